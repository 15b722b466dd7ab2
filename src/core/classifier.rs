//! Line classification against the fixed, ordered rule table.
//!
//! Rules are tried strictly in table order: every failed-login rule, then
//! every successful-login rule, then every password-change rule. The first
//! rule that matches decides the category and no later rule is consulted, so
//! a line yields at most one event.

use regex::{Captures, Regex, RegexBuilder};

use crate::core::event_record::EventCategory;
use crate::util::constants::UNKNOWN_VALUE;
use crate::util::error::Result;

/// Static description of one rule: its category, pattern source, and the
/// capture groups to try for the username, in preference order.
struct RuleSpec {
    category: EventCategory,
    pattern: &'static str,
    user_groups: &'static [usize],
}

/// The ordered rule table. Order is significant.
const RULE_TABLE: &[RuleSpec] = &[
    // Group 1 is the "invalid user " flag; the account name is group 2.
    RuleSpec {
        category: EventCategory::FailedLogin,
        pattern: r"Failed password for (invalid user )?(\S+) from (\S+)",
        user_groups: &[2, 1],
    },
    RuleSpec {
        category: EventCategory::FailedLogin,
        pattern: r"authentication failure.*user=(\S+)",
        user_groups: &[1],
    },
    RuleSpec {
        category: EventCategory::FailedLogin,
        pattern: r"Failed login attempt for user '(\S+)'",
        user_groups: &[1],
    },
    RuleSpec {
        category: EventCategory::SuccessfulLogin,
        pattern: r"Accepted password for (\S+) from (\S+)",
        user_groups: &[1],
    },
    RuleSpec {
        category: EventCategory::SuccessfulLogin,
        pattern: r"session opened for user (\S+)",
        user_groups: &[1],
    },
    RuleSpec {
        category: EventCategory::SuccessfulLogin,
        pattern: r"Successfully authenticated user (\S+)",
        user_groups: &[1],
    },
    RuleSpec {
        category: EventCategory::PasswordChange,
        pattern: r"password changed for (\S+)",
        user_groups: &[1],
    },
    RuleSpec {
        category: EventCategory::PasswordChange,
        pattern: r"password for (\S+) changed by",
        user_groups: &[1],
    },
    RuleSpec {
        category: EventCategory::PasswordChange,
        pattern: r"user (\S+) changed password",
        user_groups: &[1],
    },
];

/// A compiled recognition rule tagged with its category.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Category this rule files matches under.
    pub category: EventCategory,
    pattern: Regex,
    user_groups: &'static [usize],
}

impl PatternRule {
    /// Compile a rule. Matching is always case-insensitive.
    fn compile(spec: &RuleSpec) -> Result<Self> {
        let pattern = RegexBuilder::new(spec.pattern)
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            category: spec.category,
            pattern,
            user_groups: spec.user_groups,
        })
    }

    /// Try the rule against `line`, returning the extracted username on a match.
    pub fn apply<'a>(&self, line: &'a str) -> Option<&'a str> {
        let caps = self.pattern.captures(line)?;
        Some(self.username(&caps))
    }

    /// First non-empty preferred group, else `"unknown"`.
    fn username<'a>(&self, caps: &Captures<'a>) -> &'a str {
        self.user_groups
            .iter()
            .filter_map(|&g| caps.get(g))
            .map(|m| m.as_str())
            .find(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_VALUE)
    }
}

/// Outcome of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub category: EventCategory,
    pub username: &'a str,
}

/// Holds the compiled rule table in classification order.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    rules: Vec<PatternRule>,
}

impl LineClassifier {
    /// Compile every built-in rule.
    ///
    /// # Errors
    /// Returns [`crate::util::error::AuthSleuthError::Pattern`] if a rule fails to compile.
    pub fn new() -> Result<Self> {
        let rules = RULE_TABLE
            .iter()
            .map(PatternRule::compile)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!("Compiled {} recognition rules", rules.len());
        Ok(Self { rules })
    }

    /// Classify `line`. Returns `None` for the ordinary non-event line.
    pub fn classify<'a>(&self, line: &'a str) -> Option<Classification<'a>> {
        self.rules.iter().find_map(|rule| {
            rule.apply(line).map(|username| Classification {
                category: rule.category,
                username,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> LineClassifier {
        LineClassifier::new().unwrap()
    }

    fn classify(line: &str) -> Option<(EventCategory, String)> {
        classifier()
            .classify(line)
            .map(|c| (c.category, c.username.to_owned()))
    }

    #[test]
    fn test_rule_table_is_grouped_in_category_order() {
        let c = classifier();
        let order: Vec<usize> = c.rules.iter().map(|r| r.category.index()).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted, "rules must be grouped by category in order");
        assert_eq!(c.rules.len(), 9);
    }

    #[test]
    fn test_failed_password_invalid_user() {
        assert_eq!(
            classify("Failed password for invalid user admin from 10.0.0.5 port 22"),
            Some((EventCategory::FailedLogin, "admin".into()))
        );
    }

    #[test]
    fn test_failed_password_valid_user() {
        assert_eq!(
            classify("sshd[1]: Failed password for root from 192.168.1.9 port 4242 ssh2"),
            Some((EventCategory::FailedLogin, "root".into()))
        );
    }

    #[test]
    fn test_pam_authentication_failure() {
        assert_eq!(
            classify("pam_unix(sshd:auth): authentication failure; logname= uid=0 rhost=1.2.3.4 user=bob"),
            Some((EventCategory::FailedLogin, "bob".into()))
        );
    }

    #[test]
    fn test_failed_login_attempt_quoted() {
        assert_eq!(
            classify("WARN Failed login attempt for user 'carol'"),
            Some((EventCategory::FailedLogin, "carol".into()))
        );
    }

    #[test]
    fn test_accepted_password() {
        assert_eq!(
            classify("Accepted password for dave from 10.1.1.1 port 50000 ssh2"),
            Some((EventCategory::SuccessfulLogin, "dave".into()))
        );
    }

    #[test]
    fn test_session_opened_captures_trailing_token() {
        // `\S+` stops at whitespace, so pam's "user root(uid=0)" keeps the suffix.
        assert_eq!(
            classify("pam_unix(sshd:session): session opened for user root(uid=0) by (uid=0)"),
            Some((EventCategory::SuccessfulLogin, "root(uid=0)".into()))
        );
    }

    #[test]
    fn test_successfully_authenticated() {
        assert_eq!(
            classify("Successfully authenticated user erin"),
            Some((EventCategory::SuccessfulLogin, "erin".into()))
        );
    }

    #[test]
    fn test_password_change_variants() {
        assert_eq!(
            classify("passwd: password changed for frank"),
            Some((EventCategory::PasswordChange, "frank".into()))
        );
        assert_eq!(
            classify("password for grace changed by root"),
            Some((EventCategory::PasswordChange, "grace".into()))
        );
        assert_eq!(
            classify("user heidi changed password"),
            Some((EventCategory::PasswordChange, "heidi".into()))
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify("FAILED PASSWORD FOR ivan FROM 1.1.1.1"),
            Some((EventCategory::FailedLogin, "ivan".into()))
        );
    }

    #[test]
    fn test_failed_login_wins_over_later_categories() {
        let line = "Failed password for judy from 1.1.1.1; session opened for user mallory";
        assert_eq!(
            classify(line),
            Some((EventCategory::FailedLogin, "judy".into()))
        );
    }

    #[test]
    fn test_first_rule_within_category_wins() {
        let line = "authentication failure user=x Failed password for y from z";
        assert_eq!(
            classify(line),
            Some((EventCategory::FailedLogin, "y".into()))
        );
    }

    #[test]
    fn test_unrelated_line_is_none() {
        assert_eq!(classify("random unrelated log text"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_missing_from_clause_does_not_match() {
        assert_eq!(classify("Failed password for root"), None);
    }
}
