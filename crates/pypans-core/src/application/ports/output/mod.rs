//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pypans-adapters` crate provides implementations.

use std::path::Path;

use crate::error::PansResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `pypans_adapters::filesystem::LocalFilesystem` (production)
/// - `pypans_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Error contract
///
/// - `create_dir` fails with `ApplicationError::DirectoryExists` if the path
///   is already present; it never creates parents.
/// - `read_to_string` on a missing file is `ApplicationError::FileNotFound`.
/// - Any other I/O failure is `ApplicationError::FileAccess` carrying the
///   offending path.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a single directory.
    fn create_dir(&self, path: &Path) -> PansResult<()>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> PansResult<String>;

    /// Truncate and write a file.
    fn write_file(&self, path: &Path, content: &str) -> PansResult<()>;

    /// Append to a file, creating it if absent.
    fn append_file(&self, path: &Path, content: &str) -> PansResult<()>;

    /// Copy a file byte-for-byte, overwriting the destination.
    fn copy_file(&self, from: &Path, to: &Path) -> PansResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> PansResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
