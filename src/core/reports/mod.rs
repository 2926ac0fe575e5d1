//! Report generators.
//!
//! Each generator walks the cards one at a time, checks for cancellation
//! before every card and reports progress after it. A cancelled run returns
//! [`AppError::Cancelled`] and nothing else.

mod detailed;
mod movement;
mod status;
mod time_analysis;
mod velocity;

pub use detailed::{DetailedReport, DetailedRow, detailed_report};
pub use movement::{MovementCount, MovementReport, movement_report};
pub use status::{CurrentStatusReport, StageCount, StatusRow, current_status_report};
pub use time_analysis::{StageTimeStats, TimeAnalysisReport, time_analysis_report};
pub use velocity::{VelocityReport, VelocityRow, velocity_report};

use crate::board::ActionSource;
use crate::core::extractor::extract_events;
use crate::core::intervals::build_intervals;
use crate::errors::{AppError, AppResult};
use crate::models::{Card, StageInterval, StageLookup};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

/// Run-wide inputs shared by the generators.
pub struct ReportContext<'a> {
    /// Reference time for intervals that are still open.
    pub now: DateTime<Utc>,
    progress: Option<&'a mut dyn FnMut(f64)>,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> ReportContext<'a> {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            progress: None,
            cancel: None,
        }
    }

    /// Called with a value in `[0, 1]` after each processed card.
    pub fn with_progress(mut self, progress: &'a mut dyn FnMut(f64)) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_cancel(mut self, cancel: &'a AtomicBool) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub(crate) fn cancel_flag(&self) -> Option<&'a AtomicBool> {
        self.cancel
    }

    pub(crate) fn take_progress(&mut self) -> Option<&'a mut dyn FnMut(f64)> {
        self.progress.take()
    }

    pub(crate) fn check_cancelled(&self) -> AppResult<()> {
        match self.cancel {
            Some(flag) if flag.load(Ordering::SeqCst) => Err(AppError::Cancelled),
            _ => Ok(()),
        }
    }

    pub(crate) fn report_progress(&mut self, done: usize, total: usize) {
        if total == 0 {
            return;
        }
        if let Some(cb) = self.progress.as_mut() {
            cb(done as f64 / total as f64);
        }
    }
}

/// Drive `per_card` over every card with cancellation and progress.
pub(crate) fn for_each_card<F>(
    cards: &[Card],
    ctx: &mut ReportContext<'_>,
    mut per_card: F,
) -> AppResult<()>
where
    F: FnMut(&Card),
{
    let total = cards.len();
    for (i, card) in cards.iter().enumerate() {
        ctx.check_cancelled()?;
        per_card(card);
        ctx.report_progress(i + 1, total);
    }
    Ok(())
}

/// Fetch, extract and build one card's intervals. A failed fetch counts as
/// an empty history.
pub(crate) fn card_history(
    card: &Card,
    lookup: &StageLookup,
    actions: &dyn ActionSource,
) -> Vec<StageInterval> {
    let raw = actions.card_actions(&card.id).unwrap_or_else(|e| {
        warn!(card = %card.id, error = %e, "action fetch failed; card treated as having no history");
        Vec::new()
    });

    build_intervals(&extract_events(&raw), lookup)
}
