// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document parser.

use crate::domain::{ConfigError, Result};
use crate::ports::DocumentParser;
use serde_json::Value;

/// JSON parser implementation.
///
/// This is the default parser, used for `.json` files and for files whose
/// extension no other parser claims.
///
/// # Examples
///
/// ```rust
/// use typecfg::adapters::JsonParser;
/// use typecfg::ports::DocumentParser;
///
/// let parser = JsonParser::new();
/// let doc = parser.parse(r#"{"database": {"host": "localhost", "port": 5432}}"#).unwrap();
/// assert_eq!(doc["database"]["port"], 5432);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for JsonParser {
    fn parse(&self, content: &str) -> Result<Value> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}
