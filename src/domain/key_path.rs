// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key path newtype for addressing values inside a configuration document.
//!
//! A `KeyPath` is a dot-separated string such as `"database.host"`. Each segment
//! names a field of a nested object, so `"database.host"` addresses
//! `root["database"]["host"]`.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for dot-separated configuration key paths.
///
/// # Examples
///
/// ```
/// use typecfg::domain::key_path::KeyPath;
///
/// let key = KeyPath::from("database.host");
/// assert_eq!(key.as_str(), "database.host");
/// assert_eq!(key.segments().collect::<Vec<_>>(), vec!["database", "host"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyPath(String);

impl KeyPath {
    /// Creates a new `KeyPath` from a `String`.
    pub fn new(key: String) -> Self {
        KeyPath(key)
    }

    /// Creates the empty path, which addresses the document root.
    pub fn root() -> Self {
        KeyPath(String::new())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `KeyPath` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` for the empty path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the dot-separated segments of the path.
    ///
    /// The empty path has no segments. Otherwise every piece between dots is a
    /// segment, including empty ones (`"a..b"` yields `"a"`, `""`, `"b"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use typecfg::domain::key_path::KeyPath;
    ///
    /// assert_eq!(KeyPath::root().segments().count(), 0);
    /// assert_eq!(KeyPath::from("a..b").segments().collect::<Vec<_>>(), vec!["a", "", "b"]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        // `"".split('.')` yields one empty piece; the root has none.
        let skip = usize::from(self.is_root());
        self.0.split('.').skip(skip)
    }

    /// Returns a new path with `segment` appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use typecfg::domain::key_path::KeyPath;
    ///
    /// let key = KeyPath::from("database").join("port");
    /// assert_eq!(key.as_str(), "database.port");
    /// assert_eq!(KeyPath::root().join("app").as_str(), "app");
    /// ```
    pub fn join(&self, segment: &str) -> Self {
        if self.is_root() {
            KeyPath(segment.to_string())
        } else {
            KeyPath(format!("{}.{}", self.0, segment))
        }
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        KeyPath(s)
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        KeyPath(s.to_string())
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(key: &KeyPath) -> Self {
        key.clone()
    }
}

impl From<KeyPath> for String {
    fn from(key: KeyPath) -> Self {
        key.0
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for KeyPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
