use crate::errors::{AppError, AppResult};
use crate::models::StageInterval;
use crate::utils::date::parse_board_timestamp;
use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone, Utc};
use tracing::debug;

/// Optional `[start, end]` window on interval entry times. Both ends inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// `[now - days, now]`. Fails when the start falls outside chrono's range.
    pub fn last_days(days: u32, now: DateTime<Utc>) -> AppResult<Self> {
        let start = TimeDelta::try_days(i64::from(days))
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or_else(|| AppError::InvalidRange(format!("last {days} days is out of range")))?;

        Ok(Self {
            start: Some(start),
            end: Some(now),
        })
    }

    /// Whole local calendar days: `first` 00:00:00 to `last` 23:59:59.
    pub fn from_calendar(first: Option<NaiveDate>, last: Option<NaiveDate>) -> AppResult<Self> {
        let start = first.map(|d| local_to_utc(d, 0, 0, 0)).transpose()?;
        let end = last.map(|d| local_to_utc(d, 23, 59, 59)).transpose()?;

        if let (Some(s), Some(e)) = (start, end)
            && s > e
        {
            return Err(AppError::InvalidRange(format!("{s} is after {e}")));
        }

        Ok(Self { start, end })
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.is_none_or(|s| at >= s) && self.end.is_none_or(|e| at <= e)
    }
}

fn local_to_utc(day: NaiveDate, h: u32, m: u32, s: u32) -> AppResult<DateTime<Utc>> {
    let naive = day
        .and_hms_opt(h, m, s)
        .ok_or_else(|| AppError::InvalidDate(format!("{day} {h:02}:{m:02}:{s:02}")))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidDate(format!("{naive} does not exist in local time")))
}

/// Keep the intervals whose entry time falls inside `range`.
///
/// An unbounded range returns the input as is. Otherwise intervals with a
/// missing or unparsable entry time are dropped.
pub fn filter_by_date_range(intervals: Vec<StageInterval>, range: &DateRange) -> Vec<StageInterval> {
    if range.is_unbounded() {
        return intervals;
    }

    intervals
        .into_iter()
        .filter(|iv| {
            let Some(entry) = iv.entry_time.as_deref().and_then(parse_board_timestamp) else {
                debug!(
                    stage = %iv.stage_name,
                    entry = ?iv.entry_time,
                    "interval excluded: entry time not parsable"
                );
                return false;
            };
            range.contains(entry)
        })
        .collect()
}
