//! Lenient parsing and display of stored dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Shown in place of a date that cannot be parsed.
pub const NO_DATE: &str = "No date";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a stored date string.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS` (read as UTC), or a bare
/// `YYYY-MM-DD` (midnight UTC). Anything else yields `None`.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Formats a stored date for display, or [`NO_DATE`] if it does not parse.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => NO_DATE.to_string(),
    }
}
