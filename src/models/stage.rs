use super::card::{Card, StageLookup};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum StageEventKind {
    Creation,
    Move,
}

/// A dated stage transition extracted from a card's action log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageEvent {
    pub date: String,              // raw board timestamp, kept for display
    pub at: Option<DateTime<Utc>>, // parsed `date`; None when malformed
    pub stage_id: String,
    pub kind: StageEventKind,
}

/// A span during which a card sat in one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageInterval {
    pub stage_id: String,
    pub stage_name: String,
    pub entry_time: Option<String>,
    pub exit_time: Option<String>, // None → still in this stage
}

impl StageInterval {
    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Single open interval built from the card snapshot itself, used when a
    /// card has no usable history. `None` if the card has no current stage.
    pub fn fallback_for(card: &Card, lookup: &StageLookup) -> Option<Self> {
        let stage_id = card.current_stage.as_deref()?;

        Some(Self {
            stage_id: stage_id.to_string(),
            stage_name: lookup.name_of(Some(stage_id)),
            entry_time: card.last_activity.clone(),
            exit_time: None,
        })
    }
}
