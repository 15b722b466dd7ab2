//! CSV export of every recorded event.
//!
//! One row per record with standard columns, category order then
//! insertion order.

use crate::core::event_store::StoreSnapshot;
use crate::util::error::AuthSleuthError;
use std::path::Path;

/// Export the snapshot to a CSV file at `path`.
///
/// Columns: Category, Timestamp, Username, Source.
///
/// # Errors
/// Returns [`AuthSleuthError::Export`] if the file cannot be created or written.
pub fn export_csv(snapshot: &StoreSnapshot<'_>, path: &Path) -> Result<(), AuthSleuthError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AuthSleuthError::Export(format!("Failed to create CSV file: {e}")))?;

    writer
        .write_record(["Category", "Timestamp", "Username", "Source"])
        .map_err(|e| AuthSleuthError::Export(format!("Failed to write CSV header: {e}")))?;

    let mut rows = 0usize;
    for (category, event) in snapshot.iter_all() {
        let label = category.to_string();
        writer
            .write_record([
                label.as_str(),
                event.timestamp.as_str(),
                event.username.as_str(),
                event.source.as_str(),
            ])
            .map_err(|e| AuthSleuthError::Export(format!("Failed to write CSV row: {e}")))?;
        rows += 1;
    }

    writer
        .flush()
        .map_err(|e| AuthSleuthError::Export(format!("Failed to flush CSV: {e}")))?;

    tracing::info!("Exported {rows} events to CSV: {}", path.display());
    Ok(())
}
