use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        set,
        api_key,
        token,
        board_id,
    } = cmd
    {
        // ---- SET CREDENTIALS ----
        if *set {
            set_credentials(path, api_key, token, board_id)?;
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            header(format!("Current configuration ({})", path.display()));
            let yaml = serde_yaml::to_string(&masked(cfg))?;
            println!("{yaml}");
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.clone());
        }
    }

    Ok(())
}

/// Update only the values given on the command line; environment overrides
/// are not written back.
fn set_credentials(
    path: &Path,
    api_key: &Option<String>,
    token: &Option<String>,
    board_id: &Option<String>,
) -> AppResult<()> {
    if api_key.is_none() && token.is_none() && board_id.is_none() {
        return Err(AppError::Config(
            "--set needs at least one of --api-key, --token, --board-id".into(),
        ));
    }

    let mut stored = Config::read_file(path)?;
    if let Some(v) = api_key {
        stored.api_key = Some(v.trim().to_string());
    }
    if let Some(v) = token {
        stored.token = Some(v.trim().to_string());
    }
    if let Some(v) = board_id {
        stored.board_id = Some(v.trim().to_string());
    }
    stored.save(path)?;

    success(format!("Configuration updated: {}", path.display()));
    Ok(())
}

fn masked(cfg: &Config) -> Config {
    let mut out = cfg.clone();
    out.api_key = out.api_key.as_deref().map(mask_secret);
    out.token = out.token.as_deref().map(mask_secret);
    out
}

/// Keep the last four characters visible.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}

fn edit(path: &Path, requested: Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor_to_use}'"));
        }
        _ => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));
            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited using fallback '{default_editor}'"
                    ));
                }
                _ => error(format!(
                    "Failed to edit configuration file using '{default_editor}'"
                )),
            }
        }
    }
}
