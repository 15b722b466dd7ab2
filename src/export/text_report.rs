//! Writes the rendered text report to disk.

use crate::util::error::{AuthSleuthError, Result};
use std::path::Path;

/// Write `text` to `path` in a single blocking write, replacing any
/// existing file.
///
/// # Errors
/// Returns [`AuthSleuthError::WriteReport`] if the file cannot be written.
pub fn write_report(text: &str, path: &Path) -> Result<()> {
    std::fs::write(path, text).map_err(|source| AuthSleuthError::WriteReport {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
