//! Human-readable date formatting for listings and profile pages.
//!
//! Inputs arrive as loose strings (form fields, JSON payloads, DB text columns),
//! so parsing is lenient and every failure maps to `None` rather than an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Output shape: `Jan 5, 2024`.
const READABLE_FORMAT: &str = "%b %-d, %Y";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%m/%d/%Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Format a date-like string as a short readable date, or `None`.
///
/// Accepts RFC 3339 timestamps, plain `YYYY-MM-DD` dates, naive date-times and
/// a few written-out forms (`January 5, 2024`, `01/05/2024`). Timestamps are
/// rendered in UTC. Bare numbers are rejected; use
/// [`format_readable_timestamp_millis`] for epoch values.
pub fn format_readable_date(value: Option<&str>) -> Option<String> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    parse_date(raw).map(|date| date.format(READABLE_FORMAT).to_string())
}

/// Format an already-typed timestamp.
pub fn format_readable_datetime(value: DateTime<Utc>) -> String {
    value.format(READABLE_FORMAT).to_string()
}

/// Format milliseconds since the Unix epoch; out-of-range values yield `None`.
pub fn format_readable_timestamp_millis(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(format_readable_datetime)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    {
        return Some(date);
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}
