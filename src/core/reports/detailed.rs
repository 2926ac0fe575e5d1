use super::{ReportContext, card_history, for_each_card};
use crate::board::ActionSource;
use crate::core::filter::{DateRange, filter_by_date_range};
use crate::errors::AppResult;
use crate::models::{Card, StageInterval, StageLookup};
use crate::utils::date::{days_between_raw, format_display_date};
use serde::Serialize;

/// One card's stay in one stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedRow {
    pub client: String,
    pub stage: String,
    pub entry_date: Option<String>,
    pub exit_date: Option<String>,
    /// `None` while the card is still in the stage or when a date is unparsable.
    pub days_in_stage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailedReport {
    pub rows: Vec<DetailedRow>,
}

/// Per-card, per-stage history.
///
/// Cards without any history in range still get one row for their current
/// stage, entered at their last activity.
pub fn detailed_report(
    cards: &[Card],
    lookup: &StageLookup,
    actions: &dyn ActionSource,
    range: &DateRange,
    ctx: &mut ReportContext<'_>,
) -> AppResult<DetailedReport> {
    let mut rows = Vec::new();

    for_each_card(cards, ctx, |card| {
        let mut intervals = filter_by_date_range(card_history(card, lookup, actions), range);

        if intervals.is_empty()
            && let Some(fallback) = StageInterval::fallback_for(card, lookup)
        {
            intervals.push(fallback);
        }

        rows.extend(intervals.iter().map(|iv| to_row(card, iv)));
    })?;

    Ok(DetailedReport { rows })
}

fn to_row(card: &Card, iv: &StageInterval) -> DetailedRow {
    DetailedRow {
        client: card.name.clone(),
        stage: iv.stage_name.clone(),
        entry_date: format_display_date(iv.entry_time.as_deref()),
        exit_date: format_display_date(iv.exit_time.as_deref()),
        days_in_stage: days_between_raw(iv.entry_time.as_deref(), iv.exit_time.as_deref()),
    }
}
