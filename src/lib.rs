// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed, file-backed configuration store.
//!
//! This crate holds configuration as a JSON-like document and exposes it through
//! typed accessors: `get` decodes the value at a dot-separated key into any
//! deserializable type, falling back to a caller-supplied default, and `set` encodes
//! any serializable value into the document.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`KeyPath`, `ConfigDocument`, errors, the
//!   `ConfigurationStore` trait)
//! - **Ports**: Trait definitions for the outside world (`DocumentSource`, `DocumentParser`)
//! - **Adapters**: Implementations for specific formats and sources (JSON, YAML, files)
//! - **Service**: The stores applications hold (`DocumentStore`, `SharedStore`)
//!
//! There is no global configuration. Every store is an explicit value owned by the
//! code that uses it; wrap it in a [`SharedStore`](service::SharedStore) to share it
//! between threads.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML file support (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use typecfg::prelude::*;
//!
//! let mut config = DocumentStore::new();
//! if !config.load("config.json") {
//!     eprintln!("using built-in defaults");
//! }
//!
//! let host: String = config.get("database.host", "localhost".to_string());
//! let port: u16 = config.get("database.port", 5432);
//! config.set("database.pool.size", 16);
//! ```
//!
//! Use the `try_*` variants when the reason for a failure matters:
//!
//! ```rust
//! use typecfg::prelude::*;
//!
//! let config = DocumentStore::new();
//! match config.try_get::<u16>("database.port") {
//!     Err(ConfigError::KeyNotFound { key }) => assert_eq!(key, "database.port"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod core;
pub mod domain;
pub mod ports;
pub mod service;
pub mod stats;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{FileSource, JsonParser};
    pub use crate::core::Core;
    pub use crate::domain::{
        ConfigDocument, ConfigError, ConfigurationStore, KeyPath, Result, StoreState,
    };
    pub use crate::ports::{DocumentParser, DocumentSource};
    pub use crate::service::{DocumentStore, DocumentStoreBuilder, SharedStore};

    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
