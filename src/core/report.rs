//! Text report rendering.
//!
//! [`render_report`] is a pure function of a store snapshot and the
//! generation time. It produces the title block, the summary block, and one
//! detail block per category, joined with `\n` and with no trailing newline.

use chrono::{DateTime, TimeZone};

use crate::core::event_record::EventCategory;
use crate::core::event_store::StoreSnapshot;
use crate::util::constants::*;
use crate::util::time::format_report_timestamp;

/// Render the full report text.
pub fn render_report<Tz: TimeZone>(
    snapshot: &StoreSnapshot<'_>,
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut lines: Vec<String> = vec![
        REPORT_TITLE.to_owned(),
        REPORT_TITLE_RULE.to_owned(),
        format!("Generated: {}", format_report_timestamp(generated_at)),
        String::new(),
        SUMMARY_HEADING.to_owned(),
        SUMMARY_RULE.to_owned(),
    ];

    for cat in EventCategory::ALL {
        lines.push(format!("{}: {}", cat.summary_label(), snapshot.count(cat)));
    }

    for cat in EventCategory::ALL {
        lines.push(String::new());
        push_detail_block(&mut lines, snapshot, cat);
    }

    lines.join("\n")
}

/// Append one category's titled block of most-recent records.
fn push_detail_block(lines: &mut Vec<String>, snapshot: &StoreSnapshot<'_>, cat: EventCategory) {
    lines.push(cat.section_title().to_owned());
    lines.push(cat.section_rule().to_owned());

    let before = lines.len();
    lines.extend(
        snapshot
            .recent(cat, RECENT_EVENTS_LIMIT)
            .map(|r| r.report_line()),
    );
    if lines.len() == before {
        lines.push(cat.empty_message().to_owned());
    }
}
