// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers shared by the integration test binaries.

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `content` to a new temporary file whose name ends in `suffix`.
///
/// The file is deleted when the returned handle is dropped.
#[allow(dead_code)]
pub fn temp_config(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("typecfg-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Installs a test-friendly `tracing` subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
