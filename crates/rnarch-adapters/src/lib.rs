//! Infrastructure adapters for rnarch.
//!
//! This crate implements the ports defined in `rnarch-core::application::ports`
//! and hosts the other I/O-facing pieces: sidecar config persistence and
//! package manifest editing.

pub mod config_store;
pub mod filesystem;
pub mod manifest;

// Re-export commonly used adapters
pub use config_store::ConfigStore;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest::ManifestEditor;
