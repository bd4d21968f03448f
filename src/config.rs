//! Engine configuration, read from `~/.clouddrive/config.yaml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_HOME_PATH, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL,
    DEFAULT_RECENT_LIMIT, DEFAULT_SEARCH_DEBOUNCE_MS, MAX_SEARCH_DEBOUNCE_MS,
};
use crate::models::{ViewMode, ViewTag};

/// Log output settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub file_name: String,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            directory: PathBuf::from("."),
            file_name: String::from(DEFAULT_LOG_FILE),
            level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

/// Engine settings; every field falls back to its default when absent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search_debounce_ms: u64,
    pub recent_limit: usize,
    pub home_path: Vec<String>,
    pub initial_view: ViewTag,
    pub view_mode: ViewMode,
    /// Seed file to start from instead of the built-in dataset
    pub seed_path: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            recent_limit: DEFAULT_RECENT_LIMIT,
            home_path: DEFAULT_HOME_PATH.iter().map(|s| s.to_string()).collect(),
            initial_view: ViewTag::MyDrive,
            view_mode: ViewMode::Grid,
            seed_path: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Directory holding the config file
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    /// Load the user config, or defaults when the file does not exist
    pub fn load() -> Result<Self> {
        let path = Self::config_dir().join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.normalize();
        Ok(config)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// The home path must have at least one segment and the debounce window is capped
    fn normalize(&mut self) {
        self.search_debounce_ms = self.search_debounce_ms.min(MAX_SEARCH_DEBOUNCE_MS);
        self.home_path.retain(|s| !s.trim().is_empty());
        if self.home_path.is_empty() {
            self.home_path = Config::default().home_path;
        }
    }
}
