//! Canonical data structures for a recognised security event.
//!
//! Every log line that matches a recognition rule produces exactly one
//! [`EventRecord`], filed under one [`EventCategory`].

/// The closed set of security-event kinds AuthSleuth recognises.
///
/// Variant order is the classification order and the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    FailedLogin,
    SuccessfulLogin,
    PasswordChange,
}

impl EventCategory {
    /// All categories in classification / report order.
    pub const ALL: [EventCategory; 3] = [
        EventCategory::FailedLogin,
        EventCategory::SuccessfulLogin,
        EventCategory::PasswordChange,
    ];

    /// Dense index into per-category storage.
    pub fn index(self) -> usize {
        match self {
            EventCategory::FailedLogin => 0,
            EventCategory::SuccessfulLogin => 1,
            EventCategory::PasswordChange => 2,
        }
    }

    /// Label used in the summary block, e.g. `Failed logins`.
    pub fn summary_label(self) -> &'static str {
        match self {
            EventCategory::FailedLogin => "Failed logins",
            EventCategory::SuccessfulLogin => "Successful logins",
            EventCategory::PasswordChange => "Password changes",
        }
    }

    /// Title of the category's detail block.
    pub fn section_title(self) -> &'static str {
        match self {
            EventCategory::FailedLogin => "RECENT FAILED LOGINS",
            EventCategory::SuccessfulLogin => "RECENT SUCCESSFUL LOGINS",
            EventCategory::PasswordChange => "RECENT PASSWORD CHANGES",
        }
    }

    /// Underline printed beneath [`section_title`](Self::section_title).
    ///
    /// The failed-login rule is one dash short of its title; the report
    /// format has always looked like this.
    pub fn section_rule(self) -> &'static str {
        match self {
            EventCategory::FailedLogin => "-------------------",
            EventCategory::SuccessfulLogin => "------------------------",
            EventCategory::PasswordChange => "-----------------------",
        }
    }

    /// Line rendered in place of a detail list when nothing was recorded.
    pub fn empty_message(self) -> &'static str {
        match self {
            EventCategory::FailedLogin => "No failed logins recorded.",
            EventCategory::SuccessfulLogin => "No successful logins recorded.",
            EventCategory::PasswordChange => "No password changes recorded.",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.summary_label())
    }
}

/// One accumulated observation of a security event.
///
/// Values are stored as extracted text; the timestamp is never parsed into a
/// structured date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EventRecord {
    /// Leading timestamp text of the line, or `"unknown"`.
    pub timestamp: String,

    /// Account name captured by the matching rule, or `"unknown"`.
    pub username: String,

    /// Base name of the file the line came from (no directory path).
    pub source: String,
}

impl EventRecord {
    /// Build a record from borrowed parts.
    pub fn new(timestamp: &str, username: &str, source: &str) -> Self {
        Self {
            timestamp: timestamp.to_owned(),
            username: username.to_owned(),
            source: source.to_owned(),
        }
    }

    /// Render the record as one report line:
    /// `[timestamp] User: username, Source: source`.
    pub fn report_line(&self) -> String {
        format!(
            "[{}] User: {}, Source: {}",
            self.timestamp, self.username, self.source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_all_order() {
        for (i, cat) in EventCategory::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
        }
    }

    #[test]
    fn test_report_line_format() {
        let r = EventRecord::new("Jan 5 10:22:31", "admin", "auth.log");
        assert_eq!(
            r.report_line(),
            "[Jan 5 10:22:31] User: admin, Source: auth.log"
        );
    }

    #[test]
    fn test_section_rules() {
        assert_eq!(
            EventCategory::SuccessfulLogin.section_rule().len(),
            EventCategory::SuccessfulLogin.section_title().len()
        );
        assert_eq!(
            EventCategory::PasswordChange.section_rule().len(),
            EventCategory::PasswordChange.section_title().len()
        );
        assert_eq!(
            EventCategory::FailedLogin.section_rule().len() + 1,
            EventCategory::FailedLogin.section_title().len()
        );
    }

    #[test]
    fn test_display_uses_summary_label() {
        for cat in EventCategory::ALL {
            assert_eq!(cat.to_string(), cat.summary_label());
        }
    }

    #[test]
    fn test_category_serialises_snake_case() {
        let json = serde_json::to_string(&EventCategory::PasswordChange).unwrap();
        assert_eq!(json, "\"password_change\"");
    }
}
