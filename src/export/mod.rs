//! Output writers: the text report plus optional JSON and CSV exports.

pub mod csv_export;
pub mod json_export;
pub mod text_report;

use crate::util::error::{AuthSleuthError, Result};
use std::path::Path;

/// Check that `path` can plausibly be written before any scanning starts.
///
/// The parent directory must exist and be a directory. An empty parent
/// (bare file name) means the working directory and is accepted.
///
/// # Errors
/// Returns [`AuthSleuthError::InvalidPath`] describing the problem.
pub fn validate_export_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(AuthSleuthError::InvalidPath("output path is empty".into()));
    }
    if path.is_dir() {
        return Err(AuthSleuthError::InvalidPath(format!(
            "{} is a directory",
            path.display()
        )));
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if !parent.exists() {
        return Err(AuthSleuthError::InvalidPath(format!(
            "parent directory {} does not exist",
            parent.display()
        )));
    }
    if !parent.is_dir() {
        return Err(AuthSleuthError::InvalidPath(format!(
            "parent {} is not a directory",
            parent.display()
        )));
    }
    Ok(())
}
