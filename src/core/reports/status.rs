use crate::models::{Card, StageLookup};
use crate::utils::date::format_display_date;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    pub client: String,
    pub current_stage: String,
    pub last_activity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageCount {
    pub stage: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrentStatusReport {
    /// One row per card, in card order.
    pub cards: Vec<StatusRow>,
    /// Cards per current stage, sorted by stage name.
    pub summary: Vec<StageCount>,
}

/// Snapshot of where every card is right now. Reads the cards only.
pub fn current_status_report(cards: &[Card], lookup: &StageLookup) -> CurrentStatusReport {
    let rows: Vec<StatusRow> = cards
        .iter()
        .map(|card| StatusRow {
            client: card.name.clone(),
            current_stage: lookup.name_of(card.current_stage.as_deref()),
            last_activity: format_display_date(card.last_activity.as_deref()),
        })
        .collect();

    let mut per_stage: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &rows {
        *per_stage.entry(row.current_stage.as_str()).or_insert(0) += 1;
    }

    let summary = per_stage
        .into_iter()
        .map(|(stage, count)| StageCount {
            stage: stage.to_string(),
            count,
        })
        .collect();

    CurrentStatusReport {
        cards: rows,
        summary,
    }
}
