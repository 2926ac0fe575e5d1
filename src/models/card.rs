use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel shown whenever a stage id cannot be resolved to a list name.
pub const UNKNOWN_STAGE: &str = "Unknown";

/// A card as returned by `GET /boards/{id}/cards`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(rename = "idList", default, skip_serializing_if = "Option::is_none")]
    pub current_stage: Option<String>, // ⇔ idList
    #[serde(
        rename = "dateLastActivity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_activity: Option<String>, // ⇔ dateLastActivity (raw, may be malformed)
}

impl Card {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_stage: None,
            last_activity: None,
        }
    }

    pub fn in_stage(mut self, stage_id: impl Into<String>) -> Self {
        self.current_stage = Some(stage_id.into());
        self
    }

    pub fn with_last_activity(mut self, date: impl Into<String>) -> Self {
        self.last_activity = Some(date.into());
        self
    }
}

/// A board list (a stage), as returned by `GET /boards/{id}/lists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
}

impl BoardList {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Stage id → display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageLookup {
    names: HashMap<String, String>,
}

impl StageLookup {
    pub fn from_lists(lists: &[BoardList]) -> Self {
        Self {
            names: lists
                .iter()
                .map(|l| (l.id.clone(), l.name.clone()))
                .collect(),
        }
    }

    /// Resolve a stage id, falling back to [`UNKNOWN_STAGE`].
    pub fn name_of(&self, stage_id: Option<&str>) -> String {
        stage_id
            .and_then(|id| self.names.get(id))
            .cloned()
            .unwrap_or_else(|| UNKNOWN_STAGE.to_string())
    }
}
