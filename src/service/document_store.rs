// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration store implementation.
//!
//! This module provides `DocumentStore`, the default implementation of the
//! `ConfigurationStore` trait, and a builder for assembling one from a source and
//! a set of default values.

use crate::adapters::FileSource;
use crate::domain::{
    document, ConfigDocument, ConfigError, ConfigurationStore, KeyPath, Result, StoreState,
};
use crate::ports::{DocumentParser, DocumentSource};
use crate::service::SharedStore;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Default implementation of the configuration store.
///
/// The store owns a single [`ConfigDocument`] and the source it was last loaded
/// from. Loading replaces the whole document; a failed load leaves it untouched.
/// There is no global instance: create a store and hand it (or a
/// [`SharedStore`] wrapping it) to whatever needs configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use typecfg::prelude::*;
///
/// let mut store = DocumentStore::new();
/// if !store.load("config.json") {
///     eprintln!("using built-in defaults");
/// }
///
/// let host: String = store.get("database.host", "localhost".to_string());
/// let port = store.get("database.port", 5432u16);
/// store.set("runtime.user", "example_user");
/// ```
pub struct DocumentStore {
    /// The current document
    document: ConfigDocument,
    /// Source of the last successful load, re-read on reload
    source: Option<Box<dyn DocumentSource>>,
    /// Whether anything has been loaded
    state: StoreState,
}

impl DocumentStore {
    /// Creates a store holding an empty document.
    pub fn new() -> Self {
        Self {
            document: ConfigDocument::new(),
            source: None,
            state: StoreState::Empty,
        }
    }

    /// Creates a new store builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typecfg::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let store = DocumentStore::builder()
    ///     .with_default("database.port", 5432)?
    ///     .build()?;
    /// assert_eq!(store.get("database.port", 0), 5432);
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> DocumentStoreBuilder {
        DocumentStoreBuilder::new()
    }

    /// Loads the configuration file at `path`, replacing the whole document.
    ///
    /// The parser is chosen from the file extension. On failure the current
    /// document is left untouched and the error says whether the file could not
    /// be opened or could not be parsed.
    pub fn try_load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.try_load_from(Box::new(FileSource::from_file(path)))
    }

    /// Loads the configuration file at `path`, replacing the whole document.
    ///
    /// Returns `false` if the file cannot be opened or parsed, in which case the
    /// current document is left untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_load(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Failed to load configuration from {}: {}",
                    path.display(),
                    e
                );
                false
            }
        }
    }

    /// Replaces the whole document with `content` parsed by `parser`.
    ///
    /// The content must parse to an object. The store forgets its previous origin, so a later [`reload`](ConfigurationStore::reload)
    /// fails with [`ConfigError::NoOrigin`].
    pub fn try_load_str(&mut self, content: &str, parser: &dyn DocumentParser) -> Result<()> {
        self.document = ConfigDocument::from_root(parser.parse(content)?)?;
        self.source = None;
        self.state = StoreState::Loaded;
        tracing::info!("Configuration loaded from string");
        Ok(())
    }

    /// Replaces the whole document with `content` parsed by `parser`.
    ///
    /// Returns `false` and leaves the document untouched if `content` is malformed.
    pub fn load_str(&mut self, content: &str, parser: &dyn DocumentParser) -> bool {
        match self.try_load_str(content, parser) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to load configuration from string: {}", e);
                false
            }
        }
    }

    /// Returns the file the current document was loaded from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.source.as_ref().and_then(|s| s.origin())
    }

    /// Returns a copy of the document and state without the origin.
    ///
    /// The copy cannot be reloaded.
    pub fn snapshot(&self) -> Self {
        Self {
            document: self.document.clone(),
            source: None,
            state: self.state,
        }
    }

    /// Wraps the store in a thread-safe shared handle.
    pub fn into_shared(self) -> SharedStore {
        SharedStore::from(self)
    }
}

/// Describes a source for log messages: its file if it has one, else its name.
fn describe(source: &dyn DocumentSource) -> String {
    source
        .origin()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| source.name().to_string())
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("document", &self.document)
            .field("source", &self.source.as_deref().map(|s| describe(s)))
            .field("state", &self.state)
            .finish()
    }
}

impl ConfigurationStore for DocumentStore {
    fn document(&self) -> &ConfigDocument {
        &self.document
    }

    fn state(&self) -> StoreState {
        self.state
    }

    fn try_load_from(&mut self, source: Box<dyn DocumentSource>) -> Result<()> {
        // Parse fully before touching the current document
        let document = ConfigDocument::from_root(source.read()?)?;
        self.document = document;
        self.state = StoreState::Loaded;
        tracing::info!("Configuration loaded from: {}", describe(&*source));
        self.source = Some(source);
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        let source = self.source.as_ref().ok_or(ConfigError::NoOrigin)?;
        let document = ConfigDocument::from_root(source.read()?)?;
        tracing::info!("Configuration reloaded from: {}", describe(&**source));
        self.document = document;
        Ok(())
    }

    fn try_set<T: Serialize>(&mut self, key: impl Into<KeyPath>, value: T) -> Result<()> {
        self.document.assign(&key.into(), value)
    }

    fn remove(&mut self, key: impl Into<KeyPath>) -> Option<Value> {
        self.document.remove(&key.into())
    }

    fn clear(&mut self) {
        self.document = ConfigDocument::new();
        self.source = None;
        self.state = StoreState::Empty;
    }
}

/// Builder for constructing a `DocumentStore`.
///
/// Defaults are applied after the source is loaded and only fill keys the source
/// left missing.
///
/// # Examples
///
/// ```rust,no_run
/// use typecfg::service::DocumentStoreBuilder;
///
/// # fn main() -> typecfg::domain::Result<()> {
/// let store = DocumentStoreBuilder::new()
///     .with_file("/etc/myapp/config.json")
///     .with_default("database.host", "localhost")?
///     .with_default("database.port", 5432)?
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct DocumentStoreBuilder {
    source: Option<Box<dyn DocumentSource>>,
    defaults: Vec<(KeyPath, Value)>,
}

impl DocumentStoreBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source the store is loaded from. A later call replaces an earlier one.
    pub fn with_source(mut self, source: Box<dyn DocumentSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Loads the store from the file at `path`.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_source(Box::new(FileSource::from_file(path)))
    }

    /// Loads the store from `config.json` in the OS-appropriate configuration directory.
    pub fn with_default_location(self, app_name: &str, qualifier: &str) -> Result<Self> {
        let source = FileSource::from_default_location(app_name, qualifier)?;
        Ok(self.with_source(Box::new(source)))
    }

    /// Adds a default value for `key`.
    ///
    /// Fails with [`ConfigError::EncodeError`] if `value` cannot be represented as
    /// a document value, such as a NaN or infinite float.
    pub fn with_default<T: Serialize>(mut self, key: impl Into<KeyPath>, value: T) -> Result<Self> {
        let key = key.into();
        let encoded = document::encode(&key, value)?;
        self.defaults.push((key, encoded));
        Ok(self)
    }

    /// Builds the store.
    ///
    /// Fails if a source was configured and could not be loaded.
    pub fn build(self) -> Result<DocumentStore> {
        let mut store = DocumentStore::new();

        if let Some(source) = self.source {
            store.try_load_from(source)?;
        }

        for (key, value) in self.defaults {
            if !store.document.contains(&key) {
                store.document.insert(&key, value);
            }
        }

        Ok(store)
    }
}

impl fmt::Debug for DocumentStoreBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStoreBuilder")
            .field("source", &self.source.as_deref().map(|s| describe(s)))
            .field("defaults", &self.defaults)
            .finish()
    }
}
