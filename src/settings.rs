//! Optional user configuration, `~/.config/airmood/config.toml`.
//!
//! Everything has a default; the file, and every key in it, may be absent.
//! Precedence for the dataset path: `--data` flag, then `AIRMOOD_DATA`
//! (a `.env` file is honored), then the config file, then `./Tweets.csv`.

use crate::error::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DATA_ENV_VAR: &str = "AIRMOOD_DATA";
const DEFAULT_DATA_PATH: &str = "Tweets.csv";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_path: Option<PathBuf>,
    pub dashboard: Dashboard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    /// Event-poll timeout of the TUI loop, in milliseconds.
    pub tick_ms: u64,
    /// How many words the word cloud keeps.
    pub word_limit: usize,
}

impl Default for Dashboard {
    fn default() -> Self {
        Dashboard {
            tick_ms: 200,
            word_limit: 60,
        }
    }
}

impl Settings {
    /// Read the config file if there is one; defaults otherwise. A present
    /// but unparseable file is an error, not a silent fallback.
    pub fn load() -> Result<Settings> {
        let Some(dirs) = ProjectDirs::from("", "", "airmood") else {
            return Ok(Settings::default());
        };
        let path = dirs.config_dir().join("config.toml");
        if !path.is_file() {
            return Ok(Settings::default());
        }
        let text = std::fs::read_to_string(&path)?;
        Self::parse(&text).map_err(|e| {
            GeneralError::invalid_config(e.into_inner().context(format!("in {}", path.display())))
        })
    }

    pub fn parse(text: &str) -> Result<Settings> {
        toml::from_str(text).map_err(GeneralError::invalid_config)
    }

    /// Resolve the dataset path, most specific wins.
    pub fn resolve_data_path(&self, flag: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
        flag.or(env)
            .or_else(|| self.data_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }
}
