// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits describe how documents are parsed and where they come from.
//! Implementations live in the adapters layer.

pub mod parser;
pub mod source;

// Re-export commonly used types
pub use parser::DocumentParser;
pub use source::DocumentSource;
