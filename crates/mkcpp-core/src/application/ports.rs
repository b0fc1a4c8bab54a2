//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mkcpp_adapters::filesystem::LocalFilesystem` (production)
/// - `mkcpp_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
