use crate::board::{Snapshot, TrelloClient};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{info, success};
use indicatif::{ProgressBar, ProgressStyle};

/// Handle the `snapshot` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Snapshot { file, force } = cmd {
        ensure_writable(file, *force)?;

        let client = TrelloClient::from_config(cfg)?;
        info(format!("Capturing board {}", client.board_id()));

        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} cards")
                .map_err(|e| AppError::Other(e.to_string()))?
                .progress_chars("#>-"),
        );

        let snapshot = Snapshot::capture(
            Some(client.board_id().to_string()),
            &client,
            &client,
            &mut |done, total| {
                pb.set_length(total as u64);
                pb.set_position(done as u64);
            },
        )?;
        pb.finish_and_clear();

        snapshot.save(file)?;

        success(format!(
            "Snapshot saved: {} ({} lists, {} cards)",
            file.display(),
            snapshot.lists.len(),
            snapshot.cards.len()
        ));
    }
    Ok(())
}
