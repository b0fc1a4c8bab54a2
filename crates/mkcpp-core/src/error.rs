//! Error types for scaffolding operations.
//!
//! Flag parsing never fails (unrecognized tokens are ignored), so the only
//! fallible operations in this crate are filesystem writes behind the
//! [`Filesystem`](crate::application::Filesystem) port. Every failure is
//! terminal for the run; there are no retries.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for scaffolding.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaffoldError {
    /// The project directory already exists.
    #[error("project directory already exists: {path}")]
    ProjectExists { path: PathBuf },

    /// A filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
