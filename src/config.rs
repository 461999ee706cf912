use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long to wait for input before sending a Tick
    pub tick_rate_ms: u64,
    /// Capture mouse clicks so buttons can be pressed with the mouse
    pub mouse: bool,
    /// Log filter directive, overridden by RUST_LOG
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            mouse: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".floating-sheets"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file, `Ok(None)` when there is none
    pub fn load() -> anyhow::Result<Option<Config>> {
        let Some(config_path) = Self::config_path() else {
            return Ok(None);
        };
        if !config_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            anyhow::anyhow!("Could not read {}: {}", config_path.display(), e)
        })?;
        Self::from_json(&contents).map(Some)
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Config> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}
