use crate::board::{ActionSource, BoardSource, Snapshot, TrelloClient};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{BoardList, Card, RawAction};
use std::path::Path;

/// Live API or a snapshot file, chosen on the command line.
pub(crate) enum DataSource {
    Live(TrelloClient),
    Offline(Snapshot),
}

impl DataSource {
    pub(crate) fn resolve(cfg: &Config, snapshot: Option<&Path>) -> AppResult<Self> {
        match snapshot {
            Some(path) => Ok(DataSource::Offline(Snapshot::load(path)?)),
            None => Ok(DataSource::Live(TrelloClient::from_config(cfg)?)),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            DataSource::Live(c) => format!("board {}", c.board_id()),
            DataSource::Offline(s) => match &s.board_id {
                Some(id) => format!("snapshot of board {id}"),
                None => "snapshot".to_string(),
            },
        }
    }
}

impl BoardSource for DataSource {
    fn lists(&self) -> AppResult<Vec<BoardList>> {
        match self {
            DataSource::Live(c) => c.lists(),
            DataSource::Offline(s) => s.lists(),
        }
    }

    fn cards(&self) -> AppResult<Vec<Card>> {
        match self {
            DataSource::Live(c) => c.cards(),
            DataSource::Offline(s) => s.cards(),
        }
    }
}

impl ActionSource for DataSource {
    fn card_actions(&self, card_id: &str) -> AppResult<Vec<RawAction>> {
        match self {
            DataSource::Live(c) => c.card_actions(card_id),
            DataSource::Offline(s) => s.card_actions(card_id),
        }
    }
}
