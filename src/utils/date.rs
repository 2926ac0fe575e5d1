//! Board timestamp handling.
//!
//! Every report goes through [`parse_board_timestamp`], so a trailing `Z`
//! and an explicit `+00:00` offset always produce the same instant.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Display format for dates in report tables.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a board timestamp (`2024-03-01T10:15:00.000Z`).
///
/// RFC 3339 with `Z` or a numeric offset is accepted; naive ISO date-times
/// are read as UTC.
pub fn parse_board_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];

    naive_formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.and_utc())
}

/// Format a raw board timestamp for display in local time.
///
/// Unparsable values are passed through unchanged; a missing or empty value
/// stays `None`.
pub fn format_display_date(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|s| !s.is_empty())?;

    match parse_board_timestamp(raw) {
        Some(dt) => Some(dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string()),
        None => Some(raw.to_string()),
    }
}

/// Unrounded number of days between two instants.
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}

/// Days between two raw timestamps, rounded to 2 decimals.
/// `None` if either side is missing or unparsable.
pub fn days_between_raw(entry: Option<&str>, exit: Option<&str>) -> Option<f64> {
    let t_in = parse_board_timestamp(entry?)?;
    let t_out = parse_board_timestamp(exit?)?;
    Some(round2(days_between(t_in, t_out)))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
