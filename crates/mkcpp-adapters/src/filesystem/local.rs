//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use mkcpp_core::{application::Filesystem, error::ScaffoldResult};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> mkcpp_core::error::ScaffoldError {
    mkcpp_core::error::ScaffoldError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_write_exists_roundtrip() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let dir = temp.path().join("a/b");
        fs.create_dir_all(&dir).unwrap();
        assert!(fs.exists(&dir));

        let file = dir.join("x.txt");
        fs.write_file(&file, "hello").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "hello");
    }

    #[test]
    fn write_into_missing_dir_fails_with_path() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        let file = temp.path().join("missing/x.txt");
        let err = fs.write_file(&file, "hello").unwrap_err();
        assert!(matches!(
            err,
            mkcpp_core::error::ScaffoldError::Filesystem { path, .. } if path == file
        ));
    }
}
