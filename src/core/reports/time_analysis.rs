use super::{ReportContext, card_history, for_each_card};
use crate::board::ActionSource;
use crate::errors::AppResult;
use crate::models::{Card, StageLookup};
use crate::utils::date::{days_between, parse_board_timestamp, round2};
use serde::Serialize;
use std::collections::BTreeMap;

/// Duration statistics (in days) for one stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageTimeStats {
    pub stage: String,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeAnalysisReport {
    /// Sorted by stage name.
    pub stages: Vec<StageTimeStats>,
}

/// Mean/min/max time spent in each stage, over closed intervals only.
pub fn time_analysis_report(
    cards: &[Card],
    lookup: &StageLookup,
    actions: &dyn ActionSource,
    ctx: &mut ReportContext<'_>,
) -> AppResult<TimeAnalysisReport> {
    let mut durations: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for_each_card(cards, ctx, |card| {
        for iv in card_history(card, lookup, actions) {
            let entry = iv.entry_time.as_deref().and_then(parse_board_timestamp);
            let exit = iv.exit_time.as_deref().and_then(parse_board_timestamp);

            if let (Some(t_in), Some(t_out)) = (entry, exit) {
                durations
                    .entry(iv.stage_name)
                    .or_default()
                    .push(days_between(t_in, t_out));
            }
        }
    })?;

    let stages = durations
        .into_iter()
        .map(|(stage, days)| summarize(stage, &days))
        .collect();

    Ok(TimeAnalysisReport { stages })
}

fn summarize(stage: String, days: &[f64]) -> StageTimeStats {
    let count = days.len();
    let sum: f64 = days.iter().sum();
    let min = days.iter().copied().fold(f64::INFINITY, f64::min);
    let max = days.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    StageTimeStats {
        stage,
        mean: round2(sum / count as f64),
        min: round2(min),
        max: round2(max),
        count,
    }
}
