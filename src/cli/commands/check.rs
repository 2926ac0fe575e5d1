use crate::board::TrelloClient;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `check` subcommand: verify credentials and board id.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let client = TrelloClient::from_config(cfg)?;
    info(format!("Testing connection to board {}…", client.board_id()));

    let name = client.check_connection()?;
    success(format!("Connected to board '{name}'"));
    Ok(())
}
