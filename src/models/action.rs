use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// Reference to a list inside an action payload (`data.list`, `data.listAfter`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRef {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListRef>,
    #[serde(rename = "listAfter", default, skip_serializing_if = "Option::is_none")]
    pub list_after: Option<ListRef>,
    #[serde(rename = "listBefore", default, skip_serializing_if = "Option::is_none")]
    pub list_before: Option<ListRef>,
}

/// A card action as returned by `GET /cards/{id}/actions`.
///
/// Only the fields needed to rebuild stage history are kept; everything else
/// in the payload is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub data: ActionData,
}

impl RawAction {
    pub const CREATE_CARD: &'static str = "createCard";
    pub const UPDATE_CARD: &'static str = "updateCard";

    pub fn created_in(date: &str, list_id: &str) -> Self {
        Self {
            kind: Self::CREATE_CARD.to_string(),
            date: Some(date.to_string()),
            data: ActionData {
                list: Some(ListRef {
                    id: list_id.to_string(),
                    name: None,
                }),
                ..ActionData::default()
            },
        }
    }

    pub fn moved_to(date: &str, list_id: &str) -> Self {
        Self {
            kind: Self::UPDATE_CARD.to_string(),
            date: Some(date.to_string()),
            data: ActionData {
                list_after: Some(ListRef {
                    id: list_id.to_string(),
                    name: None,
                }),
                ..ActionData::default()
            },
        }
    }
}

/// Parse a JSON array of actions.
pub fn parse_actions_json(json: &str) -> AppResult<Vec<RawAction>> {
    Ok(serde_json::from_str(json)?)
}
