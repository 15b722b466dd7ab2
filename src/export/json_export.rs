//! JSON export of every recorded event.
//!
//! Serialises the run as a pretty-printed object using Serde: generation
//! time, per-category counts, and the full event list.

use crate::core::event_record::{EventCategory, EventRecord};
use crate::core::event_store::StoreSnapshot;
use crate::util::error::AuthSleuthError;
use crate::util::time::format_export_timestamp;
use chrono::{DateTime, TimeZone};
use std::path::Path;

/// Top-level JSON document.
#[derive(Debug, serde::Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    summary: JsonSummary,
    events: Vec<JsonEvent<'a>>,
}

#[derive(Debug, serde::Serialize)]
struct JsonSummary {
    failed_logins: usize,
    successful_logins: usize,
    password_changes: usize,
}

/// One record flattened together with its category tag.
#[derive(Debug, serde::Serialize)]
struct JsonEvent<'a> {
    category: EventCategory,
    #[serde(flatten)]
    record: &'a EventRecord,
}

/// Export the snapshot to a JSON file at `path`.
///
/// # Errors
/// Returns [`AuthSleuthError::Export`] if the file cannot be created or written.
pub fn export_json<Tz: TimeZone>(
    snapshot: &StoreSnapshot<'_>,
    generated_at: &DateTime<Tz>,
    path: &Path,
) -> Result<(), AuthSleuthError>
where
    Tz::Offset: std::fmt::Display,
{
    let doc = JsonReport {
        generated_at: format_export_timestamp(generated_at),
        summary: JsonSummary {
            failed_logins: snapshot.count(EventCategory::FailedLogin),
            successful_logins: snapshot.count(EventCategory::SuccessfulLogin),
            password_changes: snapshot.count(EventCategory::PasswordChange),
        },
        events: snapshot
            .iter_all()
            .map(|(category, record)| JsonEvent { category, record })
            .collect(),
    };

    let file = std::fs::File::create(path)
        .map_err(|e| AuthSleuthError::Export(format!("Failed to create JSON file: {e}")))?;

    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &doc)
        .map_err(|e| AuthSleuthError::Export(format!("Failed to write JSON: {e}")))?;

    // Explicit flush so I/O errors are not silently swallowed by BufWriter::drop.
    use std::io::Write;
    writer
        .flush()
        .map_err(|e| AuthSleuthError::Export(format!("Failed to flush JSON output: {e}")))?;

    tracing::info!(
        "Exported {} events to JSON: {}",
        doc.events.len(),
        path.display()
    );
    Ok(())
}
