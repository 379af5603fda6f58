// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module holds the configuration document, the key paths that address it,
//! the error type, and the store contract. It knows nothing about files or
//! document formats.

pub mod document;
pub mod errors;
mod finite;
pub mod key_path;
pub mod store;

// Re-export commonly used types
pub use document::ConfigDocument;
pub use errors::{ConfigError, Result};
pub use key_path::KeyPath;
pub use store::{ConfigurationStore, StoreState};
