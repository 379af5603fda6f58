// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, which provides an interface for
//! turning the text of a configuration file (JSON, YAML, ...) into a document tree.

use crate::domain::Result;
use serde_json::Value;

/// A trait for parsing configuration documents.
///
/// Parsers produce the whole tree; they do not flatten it. Key path resolution
/// happens later on the [`ConfigDocument`](crate::domain::ConfigDocument).
///
/// # Examples
///
/// ```rust
/// use typecfg::ports::DocumentParser;
/// use typecfg::domain::Result;
/// use serde_json::Value;
///
/// struct LinesParser;
///
/// impl DocumentParser for LinesParser {
///     fn parse(&self, content: &str) -> Result<Value> {
///         Ok(Value::Array(content.lines().map(|l| Value::from(l)).collect()))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["lines"]
///     }
/// }
///
/// let value = LinesParser.parse("a\nb").unwrap();
/// assert_eq!(value[1], "b");
/// ```
pub trait DocumentParser: Send + Sync {
    /// Parses the full content of a configuration file.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The parsed document tree
    /// * `Err(ConfigError::ParseError)` - The content is malformed
    fn parse(&self, content: &str) -> Result<Value>;

    /// Returns the file extensions (without the leading dot) handled by this parser.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if `extension` is one of [`supported_extensions`](Self::supported_extensions),
    /// compared case-insensitively.
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
