// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application core: a named component that owns its configuration.
//!
//! `Core` bundles a name with a [`DocumentStore`] and an initialized flag. It is the
//! usual entry point for an application built on this crate: create one, initialize
//! it from an optional configuration file, then read settings through
//! [`Core::config`].

use crate::service::DocumentStore;
use std::fmt;
use std::path::Path;

/// Library version information.
pub mod version {
    /// Major version number.
    pub const MAJOR: u32 = parse(env!("CARGO_PKG_VERSION_MAJOR"));
    /// Minor version number.
    pub const MINOR: u32 = parse(env!("CARGO_PKG_VERSION_MINOR"));
    /// Patch version number.
    pub const PATCH: u32 = parse(env!("CARGO_PKG_VERSION_PATCH"));
    /// Full version string.
    pub const STRING: &str = env!("CARGO_PKG_VERSION");
    /// "Debug" or "Release", depending on how the crate was compiled.
    pub const BUILD_TYPE: &str = if cfg!(debug_assertions) {
        "Debug"
    } else {
        "Release"
    };

    // Cargo guarantees each component is a plain decimal number.
    const fn parse(digits: &str) -> u32 {
        let bytes = digits.as_bytes();
        let mut value = 0;
        let mut i = 0;
        while i < bytes.len() {
            value = value * 10 + (bytes[i] - b'0') as u32;
            i += 1;
        }
        value
    }
}

/// A named component holding its own configuration store.
///
/// # Examples
///
/// ```rust
/// use typecfg::core::Core;
/// use typecfg::domain::ConfigurationStore;
///
/// let mut core = Core::new("worker");
/// assert!(core.initialize(None::<&str>));
///
/// core.config_mut().set("processing.multiplier", 3);
/// let multiplier = core.config().get("processing.multiplier", 2);
/// let processed = core.process_items(&[1, 2, 3], |x| x * multiplier);
/// assert_eq!(processed, vec![3, 6, 9]);
/// ```
pub struct Core {
    name: String,
    initialized: bool,
    config: DocumentStore,
}

impl Core {
    /// Creates a new, uninitialized core.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::debug!("Creating Core instance with name: {}", name);
        Self {
            name,
            initialized: false,
            config: DocumentStore::new(),
        }
    }

    /// Returns the name of this core.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames this core.
    pub fn set_name(&mut self, new_name: impl Into<String>) {
        let new_name = new_name.into();
        tracing::info!("Changing name from '{}' to '{}'", self.name, new_name);
        self.name = new_name;
    }

    /// Initializes the core, loading configuration from `config_path` if one is given.
    ///
    /// Returns `false` if the configuration file cannot be loaded; the core then
    /// stays uninitialized and its configuration is unchanged.
    pub fn initialize<P: AsRef<Path>>(&mut self, config_path: Option<P>) -> bool {
        if let Some(path) = config_path {
            let path = path.as_ref();
            if let Err(e) = self.config.try_load(path) {
                tracing::warn!(
                    "Failed to initialize Core '{}' from {}: {}",
                    self.name,
                    path.display(),
                    e
                );
                return false;
            }
        }

        self.initialized = true;
        tracing::info!("Core '{}' initialized successfully", self.name);
        true
    }

    /// Returns `true` once [`initialize`](Self::initialize) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns this core's configuration store.
    pub fn config(&self) -> &DocumentStore {
        &self.config
    }

    /// Returns this core's configuration store for modification.
    pub fn config_mut(&mut self) -> &mut DocumentStore {
        &mut self.config
    }

    /// Applies `processor` to every item, returning the results in order.
    pub fn process_items<T, F>(&self, items: &[T], processor: F) -> Vec<T>
    where
        F: Fn(&T) -> T,
    {
        items.iter().map(processor).collect()
    }

    /// Returns the library version as `"major.minor.patch"`.
    pub fn version() -> String {
        format!("{}.{}.{}", version::MAJOR, version::MINOR, version::PATCH)
    }
}

// Clones carry a snapshot of the configuration, not its origin.
impl Clone for Core {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            initialized: self.initialized,
            config: self.config.snapshot(),
        }
    }
}

impl fmt::Debug for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core")
            .field("name", &self.name)
            .field("initialized", &self.initialized)
            .field("config", &self.config)
            .finish()
    }
}
