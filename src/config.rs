//! Configuration loading and persistence for the CLI.
//!
//! The config file is JSON under the platform config dir
//! (`~/.config/fleetmon/config.json` on Linux). Environment variables
//! override the file: `FLEETMON_URL` and `FLEETMON_TOKEN` override the
//! values, `FLEETMON_CONFIG_DIR` relocates the directory itself
//! (integration tests use this to stay out of the real config dir).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::constants;

/// Configuration for the fleetmon CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL.
    pub server_url: String,
    /// Session token from a previous `login --save`, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: constants::DEFAULT_SERVER_URL.to_string(),
            token: None,
        }
    }
}

impl Config {
    /// Returns the configuration directory, honoring `FLEETMON_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("FLEETMON_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        Ok(dirs::config_dir()
            .context("could not determine config directory")?
            .join("fleetmon"))
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Loads the config file, then applies environment overrides.
    ///
    /// A missing file yields the defaults; a corrupt file is an error
    /// rather than a silent reset.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut config: Self = if path.exists() {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("invalid config file {}", path.display()))?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var("FLEETMON_URL") {
            config.server_url = url;
        }
        if let Ok(token) = std::env::var("FLEETMON_TOKEN") {
            config.token = Some(token);
        }

        Ok(config)
    }

    /// Writes the config file, creating the directory if necessary.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let path = dir.join("config.json");
        let data = serde_json::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&path, data).with_context(|| format!("failed to write {}", path.display()))?;

        Ok(())
    }
}
