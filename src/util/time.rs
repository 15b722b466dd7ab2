//! Timestamp formatting helpers for AuthSleuth.
//!
//! Provides consistent date/time display for the report and the exports.

use chrono::{DateTime, SecondsFormat, TimeZone};

/// Format the report generation time for the report header.
///
/// Renders the full weekday and month names with a 12-hour clock,
/// e.g. `Friday, March 1, 2024 at 8:05:09 AM`. Day and hour carry no
/// leading zero; minutes and seconds are always two digits.
pub fn format_report_timestamp<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format("%A, %B %-d, %Y at %-I:%M:%S %p").to_string()
}

/// Format a timestamp as RFC 3339 with second precision for machine exports.
pub fn format_export_timestamp<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Format the elapsed scan time for the completion log line.
///
/// Whole milliseconds below one second (`350ms`), tenths of a second below
/// a minute (`4.2s`), tenths of a minute beyond that (`1.5m`).
pub fn format_duration(d: std::time::Duration) -> String {
    match d.as_secs_f64() {
        secs if secs < 1.0 => format!("{}ms", d.as_millis()),
        secs if secs < 60.0 => format!("{secs:.1}s"),
        secs => format!("{:.1}m", secs / 60.0),
    }
}
