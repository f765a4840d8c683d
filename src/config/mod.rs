use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const LOCAL_CONFIG_FILE: &str = ".income_tracker.json";
const CONFIG_DIR_NAME: &str = "income_tracker";
const CONFIG_FILE_NAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "budget_data.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

/// User preferences read at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ledger file loaded at startup and written on save/exit.
    #[serde(default = "Config::default_data_file")]
    pub data_file: PathBuf,
    #[serde(default = "Config::default_color_output")]
    pub color_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::default_data_file(),
            color_output: Self::default_color_output(),
        }
    }
}

impl Config {
    pub fn default_data_file() -> PathBuf {
        PathBuf::from(DEFAULT_DATA_FILE)
    }

    pub fn default_color_output() -> bool {
        true
    }
}

/// Locates and reads the [`Config`] file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Prefers `./.income_tracker.json`, then the per-user config directory.
    pub fn discover() -> Self {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::new(local);
        }
        match dirs::config_dir() {
            Some(dir) => Self::new(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)),
            None => Self::new(local),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Missing files yield the defaults.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            let config =
                serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))?;
            tracing::debug!(path = %self.config_path.display(), "configuration loaded");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}
