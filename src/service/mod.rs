// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration store implementations.
//!
//! This module contains `DocumentStore`, the concrete implementation of the
//! `ConfigurationStore` trait, its builder, and a thread-safe shared handle.

pub mod document_store;
pub mod shared_store;

// Re-export commonly used types
pub use document_store::{DocumentStore, DocumentStoreBuilder};
pub use shared_store::SharedStore;
