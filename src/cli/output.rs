//! cli::output
//!
//! Text formatting for command output.

use std::fmt::Write;

use crate::core::document::MetadataDocument;
use crate::core::region::{fallback_chain, HolidayReference};
use crate::core::types::{AttributeKey, PublicHoliday};
use crate::lookup::ResolvedRegion;

/// Format a resolved region as aligned `key: value` lines.
pub fn format_region(resolved: &ResolvedRegion) -> String {
    let mut out = String::new();
    let data = &resolved.data;

    if resolved.matched == resolved.requested {
        push_line(&mut out, "region", &resolved.requested);
    } else {
        push_line(
            &mut out,
            "region",
            &format!("{} (from {})", resolved.requested, resolved.matched),
        );
    }

    if !data.languages().is_empty() {
        push_line(&mut out, "languages", &data.languages().join(", "));
    }

    for key in AttributeKey::ALL {
        if let Some(value) = data.get(key) {
            push_line(&mut out, key.as_str(), value);
        }
    }

    if !data.public_holidays().is_empty() {
        let holidays = data
            .public_holidays()
            .iter()
            .map(format_holiday)
            .collect::<Vec<_>>()
            .join(", ");
        push_line(&mut out, "holidays", &holidays);
    }

    out
}

/// Format a holiday rule, naming symbolic anchors.
///
/// `easter-2`, `month 5+10`.
pub fn format_holiday(holiday: &PublicHoliday) -> String {
    let anchor = HolidayReference::from_code(holiday.reference())
        .map(|r| r.name().to_string())
        .unwrap_or_else(|| format!("month {}", holiday.reference()));

    match holiday.offset() {
        0 => anchor,
        offset => format!("{anchor}{offset:+}"),
    }
}

/// Format the fallback chain for `name`, marking which candidates have an
/// entry and which one a lookup would use.
///
/// ```text
///   Russia_Moscow_Central
/// * Russia_Moscow
/// + Russia
/// ```
pub fn format_chain(name: &str, document: &MetadataDocument) -> String {
    let mut out = String::new();
    let mut resolved = false;

    for candidate in fallback_chain(name) {
        let marker = match (document.contains(candidate), resolved) {
            (true, false) => {
                resolved = true;
                '*'
            }
            (true, true) => '+',
            (false, _) => ' ',
        };
        let _ = writeln!(out, "{marker} {candidate}");
    }

    out
}

fn push_line(out: &mut String, key: &str, value: &str) {
    let _ = writeln!(out, "{:<18}{}", format!("{key}:"), value);
}
