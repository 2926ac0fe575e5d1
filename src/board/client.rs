//! Blocking client for the Trello REST API (v1).

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ActionSource, BoardSource};
use crate::config::{Config, Credentials};
use crate::errors::{AppError, AppResult};
use crate::models::{BoardList, Card, RawAction};

/// Action types that carry stage history.
const ACTION_FILTER: &str = "updateCard:idList,createCard";

#[derive(Debug, Deserialize)]
struct BoardInfo {
    name: String,
}

pub struct TrelloClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
    actions_limit: u32,
}

impl TrelloClient {
    pub fn new(
        credentials: Credentials,
        base_url: &str,
        timeout_secs: u64,
        actions_limit: u32,
    ) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            actions_limit,
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(
            cfg.credentials()?,
            &cfg.api_base_url,
            cfg.request_timeout_secs,
            cfg.actions_limit,
        )
    }

    pub fn board_id(&self) -> &str {
        &self.credentials.board_id
    }

    /// Verify credentials and board id; returns the board name.
    pub fn check_connection(&self) -> AppResult<String> {
        let url = format!("{}/boards/{}", self.base_url, self.credentials.board_id);
        let response = self
            .http
            .get(&url)
            .query(&self.auth())
            .query(&[("fields", "name")])
            .send()
            .map_err(|e| AppError::Connection(format!("connection failed: {e}")))?;

        match response.status() {
            s if s.is_success() => Ok(response.json::<BoardInfo>()?.name),
            StatusCode::UNAUTHORIZED => {
                Err(AppError::Connection("invalid API key or token".into()))
            }
            StatusCode::NOT_FOUND => Err(AppError::Connection("board not found".into())),
            s => Err(AppError::Connection(format!("HTTP error {}", s.as_u16()))),
        }
    }

    fn auth(&self) -> [(&str, &str); 2] {
        [
            ("key", self.credentials.api_key.as_str()),
            ("token", self.credentials.token.as_str()),
        ]
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, extra: &[(&str, String)]) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");

        let value = self
            .http
            .get(&url)
            .query(&self.auth())
            .query(extra)
            .send()?
            .error_for_status()?
            .json::<T>()?;

        Ok(value)
    }
}

impl BoardSource for TrelloClient {
    fn lists(&self) -> AppResult<Vec<BoardList>> {
        self.get_json(&format!("boards/{}/lists", self.board_id()), &[])
            .map_err(|e| AppError::Connection(format!("failed to fetch lists: {e}")))
    }

    fn cards(&self) -> AppResult<Vec<Card>> {
        self.get_json(&format!("boards/{}/cards", self.board_id()), &[])
            .map_err(|e| AppError::Connection(format!("failed to fetch cards: {e}")))
    }
}

impl ActionSource for TrelloClient {
    fn card_actions(&self, card_id: &str) -> AppResult<Vec<RawAction>> {
        self.get_json(
            &format!("cards/{card_id}/actions"),
            &[
                ("filter", ACTION_FILTER.to_string()),
                ("limit", self.actions_limit.to_string()),
            ],
        )
    }
}
