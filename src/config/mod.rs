use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_API_KEY: &str = "TRELLO_API_KEY";
pub const ENV_TOKEN: &str = "TRELLO_TOKEN";
pub const ENV_BOARD_ID: &str = "TRELLO_BOARD_ID";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub token: Option<String>,
    pub board_id: Option<String>,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub actions_limit: u32,
    pub log_level: String,
    pub default_format: ExportFormat,
}

/// The three values needed to talk to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub token: String,
    pub board_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            token: None,
            board_id: None,
            api_base_url: "https://api.trello.com/1".to_string(),
            request_timeout_secs: 30,
            actions_limit: 1000,
            log_level: "warn".to_string(),
            default_format: ExportFormat::Xlsx,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.boardreport`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".boardreport")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("boardreport.conf")
    }

    /// Read the file only (defaults if it does not exist).
    pub fn read_file(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    /// Read the file, then apply `TRELLO_*` environment overrides.
    pub fn load(path: &Path) -> AppResult<Self> {
        let mut cfg = Self::read_file(path)?;
        cfg.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    /// Non-empty values returned by `lookup` replace the credentials.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_API_KEY) {
            self.api_key = Some(v);
        }
        if let Some(v) = get(ENV_TOKEN) {
            self.token = Some(v);
        }
        if let Some(v) = get(ENV_BOARD_ID) {
            self.board_id = Some(v);
        }
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Write a default configuration file. Returns `false` if one already
    /// exists and `force` is not set.
    pub fn init(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        Self::default().save(path)?;
        Ok(true)
    }

    pub fn credentials(&self) -> AppResult<Credentials> {
        fn required(v: &Option<String>, name: &'static str) -> AppResult<String> {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or(AppError::MissingCredential(name))
        }

        Ok(Credentials {
            api_key: required(&self.api_key, "api_key")?,
            token: required(&self.token, "token")?,
            board_id: required(&self.board_id, "board_id")?,
        })
    }
}
