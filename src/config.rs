//! User configuration.
//!
//! Stored as TOML at `<config_dir>/phrasesync/config.toml`, or wherever
//! `PHRASESYNC_CONFIG` points. Missing files and missing fields fall back
//! to defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PHRASESYNC_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub script: ScriptConfig,
}

/// Settings for the terminal player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// How often the transport position is sampled, in milliseconds
    pub sample_interval_ms: u64,
    /// Keep the selected phrase scrolled into view
    pub follow_selection: bool,
    /// Draw phrase boundaries on the progress bar
    pub show_boundaries: bool,
    /// Start playing as soon as the player opens
    pub autoplay: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 10,
            follow_selection: true,
            show_boundaries: true,
            autoplay: false,
        }
    }
}

impl PlayerConfig {
    /// Sampling interval, never below 1ms.
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms.max(1))
    }
}

/// Script lookup settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Script used when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_path: Option<PathBuf>,
}

impl Config {
    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("phrasesync").join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Pick the script to open: the explicit argument, else the configured
    /// default.
    pub fn resolve_script(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.script.default_path.clone()).context(
            "No script given. Pass a SCRIPT path or set script.default_path in the config",
        )
    }
}
