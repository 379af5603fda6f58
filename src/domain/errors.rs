// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration store.
//!
//! Every fallible operation in the crate returns [`ConfigError`]. The convenience
//! accessors on the store (`get`, `set`, `load`) swallow these errors and fall back
//! to a default, while the `try_*` variants hand them to the caller.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use typecfg::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::KeyNotFound {
///         key: "database.host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested key path does not address any value in the document.
    #[error("Configuration key not found: {key}")]
    KeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// The value stored at a key could not be decoded into the requested type.
    #[error("Failed to decode configuration value for key '{key}' as {target_type}: {source}")]
    DecodeError {
        /// The key being decoded
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying decode error
        source: serde_json::Error,
    },

    /// A value could not be represented as a document value.
    #[error("Failed to encode value for key '{key}': {source}")]
    EncodeError {
        /// The key being written
        key: String,
        /// The underlying encode error
        source: serde_json::Error,
    },

    /// An error occurred while reading a document source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `reload` was called on a store that was never loaded from a source.
    #[error("Configuration store has no origin to reload from")]
    NoOrigin,

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `DecodeError` for the target type `T`.
    pub fn decode<T>(key: impl Into<String>, err: serde_json::Error) -> Self {
        ConfigError::DecodeError {
            key: key.into(),
            target_type: std::any::type_name::<T>().to_string(),
            source: err,
        }
    }

    /// Returns `true` if this error means the key was simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::KeyNotFound { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
