// SPDX-License-Identifier: MIT OR Apache-2.0

//! File document source adapter.
//!
//! This module provides a source that reads a configuration document from a file,
//! choosing the parser from the file extension.

use crate::adapters::JsonParser;
use crate::domain::{ConfigError, Result};
use crate::ports::{DocumentParser, DocumentSource};
use directories::ProjectDirs;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum accepted size of a configuration file (10 MiB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name used when locating a configuration file in the OS config directory.
pub const DEFAULT_FILE_NAME: &str = "config.json";

/// Returns the parser for `path`, based on its extension.
///
/// `.yaml` and `.yml` files use the YAML parser when the `yaml` feature is enabled.
/// Everything else, including files without an extension, is treated as JSON.
///
/// # Examples
///
/// ```rust
/// use typecfg::adapters::parser_for_path;
/// use typecfg::ports::DocumentParser;
///
/// assert_eq!(parser_for_path("settings.json").supported_extensions(), &["json"]);
/// assert_eq!(parser_for_path("settings").supported_extensions(), &["json"]);
/// ```
#[cfg_attr(not(feature = "yaml"), allow(unused_variables))]
pub fn parser_for_path(path: impl AsRef<Path>) -> Box<dyn DocumentParser> {
    #[cfg(feature = "yaml")]
    {
        let yaml = crate::adapters::YamlParser::new();
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        if yaml.supports(extension) {
            return Box::new(yaml);
        }
    }

    Box::new(JsonParser::new())
}

/// Document source backed by a file.
///
/// The file is read in full on every [`read`](DocumentSource::read), so a store
/// holding this source picks up edits when it reloads.
///
/// # Examples
///
/// ```rust,no_run
/// use typecfg::adapters::FileSource;
/// use typecfg::ports::DocumentSource;
///
/// // Read a specific file
/// let source = FileSource::from_file("/etc/myapp/config.json");
/// let document = source.read().unwrap();
///
/// // Read config.json from the OS config directory
/// let source = FileSource::from_default_location("myapp", "com.example").unwrap();
/// ```
pub struct FileSource {
    /// Path to the configuration file
    file_path: PathBuf,
    /// Parser selected from the file extension
    parser: Box<dyn DocumentParser>,
}

impl FileSource {
    /// Creates a source for a specific file path.
    ///
    /// The file is not touched until the source is read, so a path that does not
    /// exist yet is accepted here and reported by `read`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let file_path = path.as_ref().to_path_buf();
        let parser = parser_for_path(&file_path);
        Self { file_path, parser }
    }

    /// Creates a source for a file with an explicit parser, ignoring its extension.
    pub fn with_parser<P: AsRef<Path>>(path: P, parser: Box<dyn DocumentParser>) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            parser,
        }
    }

    /// Creates a source for `config.json` in the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Creates a source for `filename` in the OS-appropriate configuration directory.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use typecfg::adapters::FileSource;
    ///
    /// let source = FileSource::with_filename("myapp", "com.example", "settings.yaml").unwrap();
    /// ```
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(Self::from_file(proj_dirs.config_dir().join(filename)))
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn display_name(&self) -> &str {
        self.file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unknown>")
    }

    fn read_content(&self) -> Result<String> {
        let metadata = fs::metadata(&self.file_path).map_err(|e| ConfigError::SourceError {
            source_name: "file".to_string(),
            message: format!("Cannot open configuration file: {}", self.display_name()),
            source: Some(Box::new(e)),
        })?;

        if metadata.len() > MAX_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: "file".to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
                source: None,
            });
        }

        fs::read_to_string(&self.file_path).map_err(|e| ConfigError::SourceError {
            source_name: "file".to_string(),
            message: format!(
                "Failed to read configuration file: {}",
                self.display_name()
            ),
            source: Some(Box::new(e)),
        })
    }
}

impl std::fmt::Debug for FileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSource")
            .field("file_path", &self.file_path)
            .field("extensions", &self.parser.supported_extensions())
            .finish()
    }
}

impl DocumentSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn read(&self) -> Result<Value> {
        let content = self.read_content()?;
        self.parser.parse(&content)
    }

    fn origin(&self) -> Option<&Path> {
        Some(&self.file_path)
    }
}
