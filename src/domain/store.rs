// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration store trait definition.
//!
//! This module defines the `ConfigurationStore` trait, the main interface for reading
//! and writing typed values in a configuration document. Every fallible accessor comes
//! in two flavours: a `try_*` method that reports what went wrong, and a convenience
//! method that never fails and falls back to a default instead.

use crate::domain::{ConfigDocument, KeyPath, Result};
use crate::ports::DocumentSource;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Whether a store has been populated from a source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreState {
    /// Nothing has been loaded yet (values may still have been set by hand).
    Empty,
    /// A document has been loaded successfully at least once.
    Loaded,
}

/// The main configuration store trait.
///
/// Implementors provide access to the underlying document and the mutating
/// primitives; typed reads and the infallible wrappers are provided on top.
///
/// # Examples
///
/// ```rust
/// use typecfg::prelude::*;
///
/// let mut store = DocumentStore::new();
/// store.set("database.port", 5432);
///
/// assert_eq!(store.get("database.port", 0), 5432);
/// assert_eq!(store.get("database.host", "localhost".to_string()), "localhost");
/// ```
pub trait ConfigurationStore {
    /// Returns the current document.
    fn document(&self) -> &ConfigDocument;

    /// Returns whether a document has been loaded.
    fn state(&self) -> StoreState;

    /// Replaces the whole document with the one read from `source`.
    ///
    /// The document read must be an object. On failure the current document is
    /// left untouched.
    fn try_load_from(&mut self, source: Box<dyn DocumentSource>) -> Result<()>;

    /// Re-reads the source the current document was loaded from.
    ///
    /// Fails with [`ConfigError::NoOrigin`](crate::domain::ConfigError::NoOrigin) if
    /// nothing has been loaded. On failure the current document is left untouched.
    fn reload(&mut self) -> Result<()>;

    /// Serializes `value` and writes it at `key`.
    ///
    /// Intermediate objects are created as needed and any existing value at `key`
    /// is overwritten, whatever its type.
    fn try_set<T: Serialize>(&mut self, key: impl Into<KeyPath>, value: T) -> Result<()>;

    /// Removes the value at `key`, returning it.
    fn remove(&mut self, key: impl Into<KeyPath>) -> Option<Value>;

    /// Resets the store to an empty document with no origin.
    fn clear(&mut self);

    /// Replaces the whole document with the one read from `source`.
    ///
    /// Returns `false` and leaves the current document untouched on failure.
    fn load_from(&mut self, source: Box<dyn DocumentSource>) -> bool {
        let name = source.name().to_string();
        match self.try_load_from(source) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to load configuration from '{}': {}", name, e);
                false
            }
        }
    }

    /// Returns `true` once a document has been loaded.
    fn is_loaded(&self) -> bool {
        self.state() == StoreState::Loaded
    }

    /// Decodes the value at `key` into `T`.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The decoded value
    /// * `Err(ConfigError::KeyNotFound)` - Nothing is stored at `key`
    /// * `Err(ConfigError::DecodeError)` - The stored value does not fit `T`
    fn try_get<T: DeserializeOwned>(&self, key: impl Into<KeyPath>) -> Result<T> {
        self.document().decode(&key.into())
    }

    /// Decodes the value at `key` into `T`, or returns `default`.
    ///
    /// This never fails: a missing key or a value of the wrong shape both yield
    /// `default`.
    fn get<T: DeserializeOwned>(&self, key: impl Into<KeyPath>, default: T) -> T {
        let key = key.into();
        match self.try_get(&key) {
            Ok(value) => value,
            Err(e) => {
                if !e.is_not_found() {
                    tracing::debug!("Using default for '{}': {}", key, e);
                }
                default
            }
        }
    }

    /// Writes `value` at `key`.
    ///
    /// Values that cannot be represented in the document (such as maps with
    /// non-string keys) are logged and dropped, leaving the document unchanged.
    fn set<T: Serialize>(&mut self, key: impl Into<KeyPath>, value: T) {
        let key = key.into();
        if let Err(e) = self.try_set(&key, value) {
            tracing::warn!("Failed to set configuration key '{}': {}", key, e);
        }
    }

    /// Returns `true` if `key` addresses a value.
    fn has(&self, key: impl Into<KeyPath>) -> bool {
        self.document().contains(&key.into())
    }

    /// Returns the path of every scalar leaf in the document.
    fn keys(&self) -> Vec<KeyPath> {
        self.document().leaf_paths()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;
    use serde_json::json;

    // Minimal in-memory implementation exercising the provided methods
    struct TestStore {
        document: ConfigDocument,
        state: StoreState,
    }

    impl TestStore {
        fn new() -> Self {
            Self {
                document: ConfigDocument::new(),
                state: StoreState::Empty,
            }
        }
    }

    struct FixedSource(Option<Value>);

    impl DocumentSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        fn read(&self) -> Result<Value> {
            self.0.clone().ok_or_else(|| ConfigError::SourceError {
                source_name: "fixed".to_string(),
                message: "nothing to read".to_string(),
                source: None,
            })
        }
    }

    impl ConfigurationStore for TestStore {
        fn document(&self) -> &ConfigDocument {
            &self.document
        }

        fn state(&self) -> StoreState {
            self.state
        }

        fn try_load_from(&mut self, source: Box<dyn DocumentSource>) -> Result<()> {
            self.document = ConfigDocument::from(source.read()?);
            self.state = StoreState::Loaded;
            Ok(())
        }

        fn reload(&mut self) -> Result<()> {
            Err(ConfigError::NoOrigin)
        }

        fn try_set<T: Serialize>(&mut self, key: impl Into<KeyPath>, value: T) -> Result<()> {
            self.document.assign(&key.into(), value)
        }

        fn remove(&mut self, key: impl Into<KeyPath>) -> Option<Value> {
            self.document.remove(&key.into())
        }

        fn clear(&mut self) {
            self.document = ConfigDocument::new();
            self.state = StoreState::Empty;
        }
    }

    #[test]
    fn test_get_falls_back_to_default() {
        let store = TestStore::new();
        assert_eq!(store.get("missing", 7), 7);
        assert_eq!(store.get("missing", "x".to_string()), "x");
    }

    #[test]
    fn test_set_then_get() {
        let mut store = TestStore::new();
        store.set("a.b", 42);
        assert_eq!(store.get("a.b", 0), 42);
        assert!(store.has("a"));
    }

    #[test]
    fn test_get_type_mismatch_returns_default() {
        let mut store = TestStore::new();
        store.set("a", "text");
        assert_eq!(store.get("a", 5), 5);
    }

    #[test]
    fn test_set_unrepresentable_is_dropped() {
        let mut store = TestStore::new();
        let mut map = std::collections::BTreeMap::new();
        map.insert((1, 2), "pair");
        store.set("bad", map);
        assert!(!store.has("bad"));
    }

    #[test]
    fn test_load_from_reports_outcome() {
        let mut store = TestStore::new();
        assert!(!store.load_from(Box::new(FixedSource(None))));
        assert!(!store.is_loaded());

        assert!(store.load_from(Box::new(FixedSource(Some(json!({"k": 1}))))));
        assert!(store.is_loaded());
        assert_eq!(store.get("k", 0), 1);
    }

    #[test]
    fn test_keys() {
        let mut store = TestStore::new();
        store.set("b", 1);
        store.set("a.c", true);
        assert_eq!(store.keys(), vec![KeyPath::from("a.c"), KeyPath::from("b")]);
    }
}
