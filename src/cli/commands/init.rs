use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command: write a default configuration file.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if Config::init(path, force)? {
        success(format!("Config file: {}", path.display()));
        info("Set your credentials with `boardreport config --set --api-key … --token … --board-id …`");
        info("or export TRELLO_API_KEY, TRELLO_TOKEN and TRELLO_BOARD_ID.");
    } else {
        warning(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }
    Ok(())
}
