use super::{ReportContext, card_history, for_each_card};
use crate::board::ActionSource;
use crate::errors::AppResult;
use crate::models::{Card, StageLookup};
use crate::utils::date::{days_between, parse_board_timestamp, round2};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VelocityRow {
    pub client: String,
    pub total_days: f64,
    pub completed_stages: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VelocityReport {
    /// Sorted by ascending total days.
    pub rows: Vec<VelocityRow>,
}

/// Total cycle time per card, from first stage entry to the last exit (or
/// `ctx.now` when the card is still moving). Cards that never left their
/// first stage are not listed.
pub fn velocity_report(
    cards: &[Card],
    lookup: &StageLookup,
    actions: &dyn ActionSource,
    ctx: &mut ReportContext<'_>,
) -> AppResult<VelocityReport> {
    let now = ctx.now;
    let mut rows = Vec::new();

    for_each_card(cards, ctx, |card| {
        let intervals = card_history(card, lookup, actions);
        let (Some(first), Some(last)) = (intervals.first(), intervals.last()) else {
            return;
        };
        if intervals.len() < 2 {
            return;
        }

        let t_in = first.entry_time.as_deref().and_then(parse_board_timestamp);
        let t_out = match last.exit_time.as_deref() {
            Some(exit) => parse_board_timestamp(exit),
            None => Some(now),
        };

        let (Some(t_in), Some(t_out)) = (t_in, t_out) else {
            debug!(card = %card.id, "velocity skipped: unparsable boundary date");
            return;
        };

        rows.push(VelocityRow {
            client: card.name.clone(),
            total_days: round2(days_between(t_in, t_out)),
            completed_stages: intervals.iter().filter(|iv| !iv.is_open()).count(),
        });
    })?;

    rows.sort_by(|a, b| a.total_days.total_cmp(&b.total_days));

    Ok(VelocityReport { rows })
}
