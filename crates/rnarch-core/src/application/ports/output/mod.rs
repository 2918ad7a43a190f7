//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `rnarch-adapters` crate provides implementations.

use crate::error::CoreResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `rnarch_adapters::filesystem::LocalFilesystem` (production)
/// - `rnarch_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Generation is additive: there is no remove operation. A failed run
///   leaves already-written files in place rather than rolling back.
/// - `read_file` returns `Ok(None)` for a missing file so callers can
///   treat absence as a no-op without racing an `exists` check.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Read a file to a string. `Ok(None)` if the file does not exist.
    fn read_file(&self, path: &Path) -> CoreResult<Option<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
