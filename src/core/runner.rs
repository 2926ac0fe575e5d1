use crate::board::ActionSource;
use crate::core::filter::DateRange;
use crate::core::reports::{
    ReportContext, current_status_report, detailed_report, movement_report,
    time_analysis_report, velocity_report,
};
use crate::errors::AppResult;
use crate::export::model::ReportBook;
use crate::models::{Card, StageLookup};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    Detailed,
    Times,
    Movements,
    Status,
    Velocity,
    /// All of the above, in that order.
    Full,
}

const FULL_STEPS: [ReportKind; 5] = [
    ReportKind::Detailed,
    ReportKind::Times,
    ReportKind::Movements,
    ReportKind::Status,
    ReportKind::Velocity,
];

impl ReportKind {
    /// Label used in default file names (`Report_<label>_<date>.xlsx`).
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Detailed => "Detailed",
            ReportKind::Times => "Times",
            ReportKind::Movements => "Movements",
            ReportKind::Status => "Status",
            ReportKind::Velocity => "Velocity",
            ReportKind::Full => "Full",
        }
    }

    /// Whether a date range changes this report's output.
    pub fn uses_date_range(&self) -> bool {
        matches!(
            self,
            ReportKind::Detailed | ReportKind::Movements | ReportKind::Full
        )
    }
}

/// Generate `kind` and collect its tables.
///
/// `Full` gives each of its five reports an equal share of the progress
/// range, so the overall sequence stays non-decreasing and ends at 1.0.
pub fn run_report(
    kind: ReportKind,
    cards: &[Card],
    lookup: &StageLookup,
    actions: &dyn ActionSource,
    range: &DateRange,
    ctx: &mut ReportContext<'_>,
) -> AppResult<ReportBook> {
    if kind != ReportKind::Full {
        return run_single(kind, cards, lookup, actions, range, ctx);
    }

    let now = ctx.now;
    let cancel = ctx.cancel_flag();
    let mut outer = ctx.take_progress();
    let steps = FULL_STEPS.len() as f64;
    let mut book = ReportBook::new();

    for (k, step) in FULL_STEPS.iter().enumerate() {
        let base = k as f64;
        let mut scaled = |p: f64| {
            if let Some(cb) = outer.as_mut() {
                cb((base + p) / steps);
            }
        };

        let mut sub = ReportContext::at(now).with_progress(&mut scaled);
        if let Some(flag) = cancel {
            sub = sub.with_cancel(flag);
        }

        let part = run_single(*step, cards, lookup, actions, range, &mut sub)?;

        // status has no per-card loop of its own
        if *step == ReportKind::Status && !cards.is_empty() {
            scaled(1.0);
        }

        book.append(part);
    }

    Ok(book)
}

fn run_single(
    kind: ReportKind,
    cards: &[Card],
    lookup: &StageLookup,
    actions: &dyn ActionSource,
    range: &DateRange,
    ctx: &mut ReportContext<'_>,
) -> AppResult<ReportBook> {
    let mut book = ReportBook::new();

    match kind {
        ReportKind::Detailed => {
            book.add_report(&detailed_report(cards, lookup, actions, range, ctx)?);
        }
        ReportKind::Times => {
            book.add_report(&time_analysis_report(cards, lookup, actions, ctx)?);
        }
        ReportKind::Movements => {
            book.add_report(&movement_report(cards, lookup, actions, range, ctx)?);
        }
        ReportKind::Status => {
            ctx.check_cancelled()?;
            book.add_report(&current_status_report(cards, lookup));
        }
        ReportKind::Velocity => {
            book.add_report(&velocity_report(cards, lookup, actions, ctx)?);
        }
        ReportKind::Full => return run_report(kind, cards, lookup, actions, range, ctx),
    }

    Ok(book)
}
