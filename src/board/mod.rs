//! Board data sources.
//!
//! The report engine only sees the two traits below. `TrelloClient` talks to
//! the live API, `Snapshot` replays a previously captured board from disk and
//! `CachedActions` keeps one fetch per card across several reports.

mod cache;
mod client;
mod snapshot;

pub use cache::CachedActions;
pub use client::TrelloClient;
pub use snapshot::Snapshot;

use crate::errors::AppResult;
use crate::models::{BoardList, Card, RawAction};

/// Board-level data: fetch failures here are fatal to a run.
pub trait BoardSource {
    fn lists(&self) -> AppResult<Vec<BoardList>>;
    fn cards(&self) -> AppResult<Vec<Card>>;
}

/// Per-card action history.
pub trait ActionSource {
    fn card_actions(&self, card_id: &str) -> AppResult<Vec<RawAction>>;
}

impl<F> ActionSource for F
where
    F: Fn(&str) -> AppResult<Vec<RawAction>>,
{
    fn card_actions(&self, card_id: &str) -> AppResult<Vec<RawAction>> {
        self(card_id)
    }
}
