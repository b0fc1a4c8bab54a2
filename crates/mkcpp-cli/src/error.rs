//! Error handling for the mkcpp CLI.
//!
//! Structured errors with user-friendly messages, actionable suggestions,
//! and tracing-based logging. The exit-code taxonomy is flat: every failure
//! exits 1 (malformed flags are not errors at all — they are ignored by the
//! parser and never reach this module).

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use mkcpp_core::error::ScaffoldError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `mkcpp-core`.
    #[error("Scaffolding failed: {0}")]
    Core(#[from] ScaffoldError),

    /// The working directory could not be determined.
    #[error("Couldn't get the current working directory")]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },

    /// A terminal write failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),
            Self::CurrentDir { .. } => vec![
                "The current directory may have been deleted".into(),
                "cd to a valid directory and try again".into(),
            ],
            Self::Io { message, .. } => vec![format!("I/O operation failed: {}", message)],
        }
    }

    /// The path involved, when the error has one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Core(ScaffoldError::ProjectExists { path }) => Some(path),
            Self::Core(ScaffoldError::Filesystem { path, .. }) => Some(path),
            _ => None,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        out.push_str(&format!("  {}\n", self.to_string().red()));

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }
        out
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }
        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        tracing::error!("{}", self);
        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}
