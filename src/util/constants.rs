//! Application-wide constants for AuthSleuth.
//!
//! Centralising magic numbers and fixed text here keeps the rest of the
//! codebase clean and makes tuning straightforward.

/// Number of most-recent records shown per category in the text report.
pub const RECENT_EVENTS_LIMIT: usize = 10;

/// Placeholder used when a timestamp or username cannot be extracted.
pub const UNKNOWN_VALUE: &str = "unknown";

/// Application display name used in log output and the CLI banner.
pub const APP_NAME: &str = "AuthSleuth";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Suffix appended to a rotated log file.
pub const ROTATED_LOG_SUFFIX: &str = "old";

/// Report title line.
pub const REPORT_TITLE: &str = "SECURITY LOG ANALYSIS REPORT";

/// Underline printed beneath [`REPORT_TITLE`].
pub const REPORT_TITLE_RULE: &str = "============================";

/// Heading of the summary block.
pub const SUMMARY_HEADING: &str = "EVENT SUMMARY";

/// Underline printed beneath [`SUMMARY_HEADING`]. One dash longer than the
/// heading; existing report consumers depend on it.
pub const SUMMARY_RULE: &str = "--------------";
