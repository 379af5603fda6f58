// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small numeric and collection helpers.
//!
//! These are the summary statistics applications typically compute over values
//! read from configuration or produced by [`Core::process_items`](crate::core::Core::process_items).

use std::time::Instant;

/// Arithmetic mean. Returns `0.0` for an empty slice.
///
/// # Examples
///
/// ```
/// use typecfg::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance (divides by `n - 1`). Returns `0.0` for fewer than two values.
///
/// # Examples
///
/// ```
/// use typecfg::stats::variance;
///
/// assert_eq!(variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 32.0 / 7.0);
/// assert_eq!(variance(&[1.0]), 0.0);
/// ```
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq_diff: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    sum_sq_diff / (values.len() - 1) as f64
}

/// Smallest and largest value. Returns `(0.0, 0.0)` for an empty slice.
///
/// NaN values are ignored unless every value is NaN.
pub fn min_max(values: &[f64]) -> (f64, f64) {
    let Some((&first, rest)) = values.split_first() else {
        return (0.0, 0.0);
    };
    rest.iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// Returns clones of the items matching `predicate`, in order.
pub fn filter<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

/// Maps every item through `f`, in order.
///
/// Unlike [`Core::process_items`](crate::core::Core::process_items) the output type
/// may differ from the input type.
pub fn transform<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Measures wall-clock time since creation or the last [`reset`](Timer::reset).
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds elapsed, with microsecond resolution.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_micros() as f64 / 1000.0
    }

    /// Restarts the timer.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
