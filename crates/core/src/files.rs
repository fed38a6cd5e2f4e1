//! Filesystem-safe names for uploaded documents (resumes, logos).

use chrono::{DateTime, Utc};
use serde_json::Value;

const FALLBACK_PREFIX: &str = "resume";

/// Produce a filesystem-safe file name from untrusted input.
///
/// Path separators and every character outside `[A-Za-z0-9._-]` become `_`.
/// Missing, blank or dots-only input falls back to `resume-<unix millis>`.
/// The result is never empty and never contains `/` or `\`.
pub fn sanitize_file_name(input: Option<&str>) -> String {
    let trimmed = input.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return fallback_file_name(Utc::now());
    }

    let sanitized: String = trimmed
        .chars()
        .map(|c| match c {
            '/' | '\\' => '_',
            c if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') => c,
            _ => '_',
        })
        .collect();

    // "." and ".." still resolve to directories.
    if sanitized.chars().all(|c| c == '.') {
        return fallback_file_name(Utc::now());
    }

    sanitized
}

/// Loose-JSON variant: anything that is not a string takes the fallback name.
pub fn sanitize_file_name_value(input: &Value) -> String {
    sanitize_file_name(input.as_str())
}

/// Generated name used when the input is unusable.
pub fn fallback_file_name(now: DateTime<Utc>) -> String {
    format!("{FALLBACK_PREFIX}-{}", now.timestamp_millis())
}
