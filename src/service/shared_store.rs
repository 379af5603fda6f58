// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thread-safe handle to a configuration store.

use crate::domain::{ConfigurationStore, KeyPath, Result};
use crate::service::DocumentStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable, thread-safe handle to a [`DocumentStore`].
///
/// All clones share the same store behind a single `RwLock`: reads run
/// concurrently, loads and writes are exclusive. A lock poisoned by a panicking
/// writer is recovered rather than propagated, so `get` keeps its never-fails
/// contract.
///
/// # Examples
///
/// ```rust
/// use typecfg::service::SharedStore;
/// use std::thread;
///
/// let store = SharedStore::new();
/// store.set("workers", 8);
///
/// let reader = store.clone();
/// let handle = thread::spawn(move || reader.get("workers", 1));
/// assert_eq!(handle.join().unwrap(), 8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<DocumentStore>>,
}

impl SharedStore {
    /// Creates a handle to a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the store for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, DocumentStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the store for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, DocumentStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`DocumentStore::load`].
    pub fn load(&self, path: impl AsRef<Path>) -> bool {
        self.write().load(path)
    }

    /// See [`DocumentStore::try_load`].
    pub fn try_load(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write().try_load(path)
    }

    /// See [`ConfigurationStore::reload`].
    pub fn reload(&self) -> Result<()> {
        self.write().reload()
    }

    /// See [`ConfigurationStore::get`].
    pub fn get<T: DeserializeOwned>(&self, key: impl Into<KeyPath>, default: T) -> T {
        self.read().get(key, default)
    }

    /// See [`ConfigurationStore::try_get`].
    pub fn try_get<T: DeserializeOwned>(&self, key: impl Into<KeyPath>) -> Result<T> {
        self.read().try_get(key)
    }

    /// See [`ConfigurationStore::set`].
    pub fn set<T: Serialize>(&self, key: impl Into<KeyPath>, value: T) {
        self.write().set(key, value)
    }

    /// See [`ConfigurationStore::try_set`].
    pub fn try_set<T: Serialize>(&self, key: impl Into<KeyPath>, value: T) -> Result<()> {
        self.write().try_set(key, value)
    }

    /// See [`ConfigurationStore::has`].
    pub fn has(&self, key: impl Into<KeyPath>) -> bool {
        self.read().has(key)
    }

    /// See [`ConfigurationStore::remove`].
    pub fn remove(&self, key: impl Into<KeyPath>) -> Option<Value> {
        self.write().remove(key)
    }

    /// See [`ConfigurationStore::keys`].
    pub fn keys(&self) -> Vec<KeyPath> {
        self.read().keys()
    }
}

impl From<DocumentStore> for SharedStore {
    fn from(store: DocumentStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }
}
