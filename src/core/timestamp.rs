//! Leading-timestamp extraction for raw log lines.
//!
//! Recognises three shapes at the very start of a line, tried in order:
//! syslog (`Jan  5 10:22:31`), ISO-8601 with `T`, and ISO-8601 with a space.
//! The matched text is returned verbatim; no calendar validation is done.

use regex::Regex;

use crate::util::constants::UNKNOWN_VALUE;
use crate::util::error::Result;

/// Alternatives of one anchored pattern. Alternation is leftmost-first, so the
/// syslog shape wins over the ISO shapes when both could match. Digits are
/// ASCII only; `\d` in `regex` would also accept other Unicode digits.
const TIMESTAMP_PATTERN: &str = concat!(
    r"^(?:",
    r"[A-Za-z]{3}\s+[0-9]{1,2}\s+[0-9]{2}:[0-9]{2}:[0-9]{2}",
    r"|[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}",
    r"|[0-9]{4}-[0-9]{2}-[0-9]{2}\s+[0-9]{2}:[0-9]{2}:[0-9]{2}",
    r")"
);

/// Compiled timestamp recogniser. Build once per run and reuse.
#[derive(Debug, Clone)]
pub struct TimestampExtractor {
    pattern: Regex,
}

impl TimestampExtractor {
    /// Compile the timestamp pattern.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(TIMESTAMP_PATTERN)?,
        })
    }

    /// Return the leading timestamp of `line`, or `"unknown"` if it has none.
    ///
    /// Total: every input, including the empty string, yields a value.
    pub fn extract<'a>(&self, line: &'a str) -> &'a str {
        self.pattern
            .find(line)
            .map(|m| m.as_str())
            .unwrap_or(UNKNOWN_VALUE)
    }
}
