//! # Tags
//!
//! Interprets `{key:value}` tag pairs pulled from annotation lines. The
//! only specially handled key is the due-date key, which parses a calendar
//! date and computes days remaining against an injected reference date.
//!
//! Licensed under the MIT License.

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use crate::constants::DUE_DATE_KEY;
use crate::table::Style;

/// Accepted explicit date formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d.%m.%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%B %d, %Y",
];

/// Month-day formats completed with the reference year.
const MONTH_DAY_FORMATS: &[&str] = &["%b %d", "%B %d"];

/// Interprets one tag pair against the reference date.
///
/// Returns the display string and an optional style override. `by:` tags
/// render as `by <date> (<signed days left>)` and are urgent at or past
/// the due date, otherwise a warning. Every other key displays literally
/// as `key:value` with no override.
///
/// A `by:` value that parses as no known date format degrades gracefully:
/// the tag is kept raw, a warning goes to stderr, and the scan continues.
pub fn interpret(key: &str, value: &str, today: NaiveDate) -> (String, Option<Style>) {
    if key != DUE_DATE_KEY {
        return (format!("{key}:{value}"), None);
    }

    match parse_date(value.trim(), today) {
        Some(date) => {
            let days_left = (date - today).num_days();
            let style = if days_left <= 0 {
                Style::Urgent
            } else {
                Style::Warning
            };
            (format!("by {date} ({days_left})"), Some(style))
        }
        None => {
            eprintln!(
                "{} skipping unparseable due date: '{value}'",
                "warning:".yellow()
            );
            (format!("{key}:{value}"), None)
        }
    }
}

/// Parses an explicit date string, completing month-day forms with the
/// reference year.
fn parse_date(value: &str, today: NaiveDate) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    for format in MONTH_DAY_FORMATS {
        let with_year = format!("{value} {}", today.year());
        let format_with_year = format!("{format} %Y");
        if let Ok(date) = NaiveDate::parse_from_str(&with_year, &format_with_year) {
            return Some(date);
        }
    }

    None
}
