//! Unified error types for AuthSleuth.
//!
//! All fallible operations throughout the codebase return `Result<T, AuthSleuthError>`.
//! This ensures consistent error reporting and clean propagation via the `?` operator.

use std::path::{Path, PathBuf};

/// Unified error type used throughout AuthSleuth.
///
/// Each variant captures enough context to produce an actionable message for
/// the user or for log output.
#[derive(Debug, thiserror::Error)]
pub enum AuthSleuthError {
    /// The log directory could not be listed.
    #[error("cannot read log directory {}: {source}", .path.display())]
    ReadDir {
        /// Directory that failed to list.
        path: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// A log file could not be opened or failed mid-stream.
    #[error("cannot read log file {}: {source}", .path.display())]
    ReadFile {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// The rendered report could not be written to disk.
    #[error("cannot write report {}: {source}", .path.display())]
    WriteReport {
        /// Destination report path.
        path: PathBuf,
        /// Underlying OS error.
        source: std::io::Error,
    },

    /// Export (CSV or JSON) failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// A built-in recognition pattern failed to compile.
    #[error("Pattern compile error: {0}")]
    Pattern(String),

    /// An output path failed pre-flight validation.
    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    /// Catch-all for I/O errors without a more specific context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuthSleuthError>;

/// Wrap an I/O error raised while reading `path` as [`AuthSleuthError::ReadFile`].
///
/// # Example
/// ```ignore
/// File::open(&path).map_err(|e| read_file_err(&path, e))?;
/// ```
pub fn read_file_err(path: &Path, source: std::io::Error) -> AuthSleuthError {
    AuthSleuthError::ReadFile {
        path: path.to_path_buf(),
        source,
    }
}

impl From<regex::Error> for AuthSleuthError {
    fn from(e: regex::Error) -> Self {
        AuthSleuthError::Pattern(e.to_string())
    }
}
