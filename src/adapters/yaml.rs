// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser.

use crate::domain::{ConfigError, Result};
use crate::ports::DocumentParser;
use serde_json::Value;

/// YAML parser implementation.
///
/// YAML is deserialized straight into the same JSON document tree the JSON parser
/// produces, so the rest of the crate does not care which format a file used.
/// Mappings with non-string keys are rejected.
///
/// # Examples
///
/// ```rust
/// use typecfg::adapters::YamlParser;
/// use typecfg::ports::DocumentParser;
///
/// let parser = YamlParser::new();
/// let doc = parser.parse("database:\n  host: localhost\n  port: 5432").unwrap();
/// assert_eq!(doc["database"]["host"], "localhost");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Value> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
