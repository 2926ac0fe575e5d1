#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use boardreport::board::Snapshot;
use boardreport::models::{BoardList, Card, RawAction, StageLookup};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// Acme: created in A, moved to B after 2 days, to C after 3 more.
pub const T0: &str = "2024-03-01T09:00:00.000Z";
pub const T1: &str = "2024-03-03T09:00:00.000Z";
pub const T2: &str = "2024-03-06T09:00:00.000Z";
pub const NOW: &str = "2024-03-11T09:00:00Z";

/// Binary under test, isolated from the user's environment.
pub fn br(config: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("boardreport");
    cmd.env("NO_COLOR", "1")
        .env_remove("TRELLO_API_KEY")
        .env_remove("TRELLO_TOKEN")
        .env_remove("TRELLO_BOARD_ID")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid test timestamp")
        .with_timezone(&Utc)
}

pub fn now() -> DateTime<Utc> {
    ts(NOW)
}

pub fn lists() -> Vec<BoardList> {
    vec![
        BoardList::new("la", "A"),
        BoardList::new("lb", "B"),
        BoardList::new("lc", "C"),
    ]
}

pub fn lookup() -> StageLookup {
    StageLookup::from_lists(&lists())
}

pub fn acme_actions() -> Vec<RawAction> {
    // newest first, as the API returns them
    vec![
        RawAction::moved_to(T2, "lc"),
        RawAction::moved_to(T1, "lb"),
        RawAction::created_in(T0, "la"),
    ]
}

/// Acme plus a card that never left its first stage and one with no history.
pub fn board_snapshot() -> Snapshot {
    let cards = vec![
        Card::new("c1", "Acme").in_stage("lc").with_last_activity(T2),
        Card::new("c2", "Globex").in_stage("la").with_last_activity(T1),
        Card::new("c3", "Initech").in_stage("lb").with_last_activity(T0),
    ];

    let mut actions = BTreeMap::new();
    actions.insert("c1".to_string(), acme_actions());
    actions.insert("c2".to_string(), vec![RawAction::created_in(T1, "la")]);

    Snapshot {
        board_id: Some("board-1".to_string()),
        fetched_at: Some(now()),
        lists: lists(),
        cards,
        actions,
    }
}

pub fn write_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("board.json");
    board_snapshot().save(&path).expect("snapshot written");
    path
}
