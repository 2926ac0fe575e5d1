// src/export/excel_date.rs

use crate::utils::date::DISPLAY_FORMAT;
use chrono::{NaiveDate, NaiveDateTime};

/// Number format applied to date cells.
pub(crate) const EXCEL_DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Excel serial for a display date (`YYYY-MM-DD HH:MM:SS`); anything else
/// stays text.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    let dt = NaiveDateTime::parse_from_str(s, DISPLAY_FORMAT).ok()?;
    naive_datetime_to_excel_serial(&dt)
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let secs = (*dt - excel_epoch).num_seconds() as f64;
    Some(secs / SECONDS_PER_DAY)
}
