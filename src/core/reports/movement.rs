use super::{ReportContext, card_history, for_each_card};
use crate::board::ActionSource;
use crate::core::filter::{DateRange, filter_by_date_range};
use crate::errors::AppResult;
use crate::models::{Card, StageLookup};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovementCount {
    pub from: String,
    pub to: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovementReport {
    /// Sorted by (from, to).
    pub movements: Vec<MovementCount>,
}

/// Count stage-to-stage transitions across all cards.
pub fn movement_report(
    cards: &[Card],
    lookup: &StageLookup,
    actions: &dyn ActionSource,
    range: &DateRange,
    ctx: &mut ReportContext<'_>,
) -> AppResult<MovementReport> {
    let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();

    for_each_card(cards, ctx, |card| {
        let intervals = filter_by_date_range(card_history(card, lookup, actions), range);

        for pair in intervals.windows(2) {
            let key = (pair[0].stage_name.clone(), pair[1].stage_name.clone());
            *counts.entry(key).or_insert(0) += 1;
        }
    })?;

    let movements = counts
        .into_iter()
        .map(|((from, to), count)| MovementCount { from, to, count })
        .collect();

    Ok(MovementReport { movements })
}
