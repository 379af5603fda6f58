// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parser and source implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: parsers for the supported document formats and a file-backed
//! document source.

pub mod file;
pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use file::{parser_for_path, FileSource};
pub use json::JsonParser;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
