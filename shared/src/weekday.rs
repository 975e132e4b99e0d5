//! Day-card labels for the carousel.

use chrono::{DateTime, Datelike, Local, NaiveDate};

use crate::DayLabel;

/// Placeholder shown in both display fields when a day key cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Build one label per day key, in input order.
///
/// Repeated keys produce repeated labels. An unparseable key yields a label
/// with `INVALID_DATE` display fields; the rest of the batch is unaffected.
pub fn label_days<S: AsRef<str>>(day_keys: &[S]) -> Vec<DayLabel> {
    day_keys
        .iter()
        .map(|key| label_day(key.as_ref()))
        .collect()
}

fn label_day(key: &str) -> DayLabel {
    match parse_day_key(key) {
        Some(date) => DayLabel {
            day: format!("{:02}", date.day()),
            weekday: date.format("%a").to_string(),
            date: key.to_string(),
        },
        None => DayLabel {
            day: INVALID_DATE.to_string(),
            weekday: INVALID_DATE.to_string(),
            date: key.to_string(),
        },
    }
}

/// Calendar date for a day key.
///
/// Plain `YYYY-MM-DD` keys are already calendar days. Full RFC 3339 timestamps
/// are shifted into the viewer's local time zone first.
fn parse_day_key(key: &str) -> Option<NaiveDate> {
    let key = key.trim();
    if let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(key)
        .ok()
        .map(|instant| instant.with_timezone(&Local).date_naive())
}
