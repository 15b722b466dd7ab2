//! Integration tests for output writers and export pre-flight validation.

use authsleuth::core::event_record::{EventCategory, EventRecord};
use authsleuth::core::event_store::EventStore;
use authsleuth::export::csv_export::export_csv;
use authsleuth::export::json_export::export_json;
use authsleuth::export::text_report::write_report;
use authsleuth::export::validate_export_path;
use authsleuth::util::error::AuthSleuthError;
use chrono::{TimeZone, Utc};

fn sample_store() -> EventStore {
    let mut store = EventStore::new();
    store.record(
        EventCategory::FailedLogin,
        EventRecord::new("Jan 5 10:22:31", "admin", "auth.log"),
    );
    store.record(
        EventCategory::PasswordChange,
        EventRecord::new("unknown", "grace", "app.log"),
    );
    store
}

#[test]
fn validate_export_path_valid_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    let result = validate_export_path(&path);
    assert!(result.is_ok(), "Temp dir should be writable: {result:?}");
}

#[test]
fn validate_export_path_nonexistent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("report.txt");
    let msg = validate_export_path(&path).unwrap_err().to_string();
    assert!(msg.contains("does not exist"), "Should indicate dir missing: {msg}");
}

#[test]
fn validate_export_path_rejects_directory_target() {
    let dir = tempfile::tempdir().unwrap();
    let err = validate_export_path(dir.path()).unwrap_err();
    assert!(matches!(err, AuthSleuthError::InvalidPath(_)));
}

#[test]
fn validate_export_path_bare_file_name() {
    assert!(validate_export_path(std::path::Path::new("report.txt")).is_ok());
}

#[test]
fn write_report_writes_exact_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    write_report("line one\nline two", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "line one\nline two");
}

#[test]
fn write_report_into_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("report.txt");
    let err = write_report("x", &path).unwrap_err();
    assert!(matches!(err, AuthSleuthError::WriteReport { .. }));
}

#[test]
fn json_export_contains_summary_and_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    let store = sample_store();
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    export_json(&store.snapshot(), &at, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["generated_at"], "2024-03-01T08:00:00+00:00");
    assert_eq!(doc["summary"]["failed_logins"], 1);
    assert_eq!(doc["summary"]["successful_logins"], 0);
    assert_eq!(doc["summary"]["password_changes"], 1);
    assert_eq!(doc["events"][0]["category"], "failed_login");
    assert_eq!(doc["events"][0]["username"], "admin");
    assert_eq!(doc["events"][1]["source"], "app.log");
}

#[test]
fn csv_export_has_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.csv");
    let store = sample_store();
    export_csv(&store.snapshot(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "Category,Timestamp,Username,Source");
    assert_eq!(lines[1], "Failed logins,Jan 5 10:22:31,admin,auth.log");
    assert_eq!(lines[2], "Password changes,unknown,grace,app.log");
    assert_eq!(lines.len(), 3);
}
