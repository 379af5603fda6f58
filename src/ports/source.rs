// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document source trait definition.
//!
//! This module defines the `DocumentSource` trait: anything that can produce a complete
//! configuration document on demand. Files are the usual source, but tests and
//! embedding applications can supply their own.

use crate::domain::Result;
use serde_json::Value;
use std::path::Path;

/// A trait for configuration document sources.
///
/// A source is read in full every time; stores keep hold of the source they last
/// loaded from so that they can re-read it on reload.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so stores holding them can be shared
/// between threads.
///
/// # Examples
///
/// ```rust
/// use typecfg::ports::DocumentSource;
/// use typecfg::domain::Result;
/// use serde_json::{json, Value};
///
/// struct Defaults;
///
/// impl DocumentSource for Defaults {
///     fn name(&self) -> &str {
///         "defaults"
///     }
///
///     fn read(&self) -> Result<Value> {
///         Ok(json!({"database": {"port": 5432}}))
///     }
/// }
///
/// assert_eq!(Defaults.read().unwrap()["database"]["port"], 5432);
/// assert!(Defaults.origin().is_none());
/// ```
pub trait DocumentSource: Send + Sync {
    /// Returns a short name for this source, used in logs and errors.
    fn name(&self) -> &str;

    /// Reads and parses the full document.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The document tree
    /// * `Err(ConfigError::SourceError)` - The source could not be read
    /// * `Err(ConfigError::ParseError)` - The source content is malformed
    fn read(&self) -> Result<Value>;

    /// Returns the file backing this source, if there is one.
    fn origin(&self) -> Option<&Path> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    struct TestSource {
        path: Option<PathBuf>,
    }

    impl DocumentSource for TestSource {
        fn name(&self) -> &str {
            "test-source"
        }

        fn read(&self) -> Result<Value> {
            Ok(json!({"key": "value"}))
        }

        fn origin(&self) -> Option<&Path> {
            self.path.as_deref()
        }
    }

    #[test]
    fn test_document_source_name() {
        let source = TestSource { path: None };
        assert_eq!(source.name(), "test-source");
    }

    #[test]
    fn test_document_source_read() {
        let source = TestSource { path: None };
        assert_eq!(source.read().unwrap(), json!({"key": "value"}));
    }

    #[test]
    fn test_document_source_origin() {
        let source = TestSource {
            path: Some(PathBuf::from("/etc/app/config.json")),
        };
        assert_eq!(source.origin(), Some(Path::new("/etc/app/config.json")));
    }

    #[test]
    fn test_document_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn DocumentSource>>();
    }
}
