use super::{ActionSource, BoardSource};
use crate::errors::{AppError, AppResult};
use crate::models::{BoardList, Card, RawAction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// A board captured to disk: lists, cards and every card's actions.
///
/// Reports can be run against a snapshot exactly as against the live API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lists: Vec<BoardList>,
    #[serde(default)]
    pub cards: Vec<Card>,
    /// card id → actions
    #[serde(default)]
    pub actions: BTreeMap<String, Vec<RawAction>>,
}

impl Snapshot {
    /// Fetch everything from `board` and `actions`.
    ///
    /// `progress` receives `(done, total)` after each card. A card whose
    /// actions cannot be fetched is stored with an empty history.
    pub fn capture(
        board_id: Option<String>,
        board: &dyn BoardSource,
        actions: &dyn ActionSource,
        progress: &mut dyn FnMut(usize, usize),
    ) -> AppResult<Self> {
        let lists = board.lists()?;
        let cards = board.cards()?;
        let total = cards.len();

        let mut per_card = BTreeMap::new();
        for (i, card) in cards.iter().enumerate() {
            let history = actions.card_actions(&card.id).unwrap_or_else(|e| {
                warn!(card = %card.id, error = %e, "action fetch failed; storing empty history");
                Vec::new()
            });
            per_card.insert(card.id.clone(), history);
            progress(i + 1, total);
        }

        Ok(Self {
            board_id,
            fetched_at: Some(Utc::now()),
            lists,
            cards,
            actions: per_card,
        })
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("cannot read snapshot {}: {e}", path.display()),
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl BoardSource for Snapshot {
    fn lists(&self) -> AppResult<Vec<BoardList>> {
        Ok(self.lists.clone())
    }

    fn cards(&self) -> AppResult<Vec<Card>> {
        Ok(self.cards.clone())
    }
}

impl ActionSource for Snapshot {
    fn card_actions(&self, card_id: &str) -> AppResult<Vec<RawAction>> {
        Ok(self.actions.get(card_id).cloned().unwrap_or_default())
    }
}
