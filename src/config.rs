//! Configuration management
//!
//! Configuration is read from `<config_dir>/vidctl/config.toml`. Every
//! section falls back to defaults, so a missing file or a partial file is
//! always valid. `VIDCTL_CONFIG_DIR` and `VIDCTL_DATA_DIR` override the
//! platform directories.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::player::chapters::{default_chapters, Chapter};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "VIDCTL_CONFIG_DIR";
/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "VIDCTL_DATA_DIR";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the {0} directory for this platform")]
    NoPlatformDir(&'static str),

    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub fullscreen: FullscreenConfig,
    /// Chapter list; the built-in list is used when empty
    pub chapters: Vec<Chapter>,
}

/// Playback and persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Key the last position is stored under
    pub storage_key: String,
    /// Media length used by `vidctl play` when `--duration` is not given
    pub default_duration: f64,
    /// Seconds skipped by the back button
    pub back_skip: f64,
    /// Seconds skipped by the forward button
    pub forward_skip: f64,
    /// Seconds skipped by the arrow keys
    pub arrow_skip: f64,
    /// Volume change per arrow key press
    pub volume_step: f64,
    /// Rate change per `<` / `>` key press
    pub rate_step: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            storage_key: "gh_movie_player_position".to_string(),
            default_duration: 9000.0,
            back_skip: 15.0,
            forward_skip: 30.0,
            arrow_skip: 5.0,
            volume_step: 0.1,
            rate_step: 0.25,
        }
    }
}

/// Fullscreen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullscreenConfig {
    /// Look for a fullscreen mechanism at start-up
    pub enabled: bool,
}

impl Default for FullscreenConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playback: PlaybackConfig::default(),
            fullscreen: FullscreenConfig::default(),
            chapters: default_chapters(),
        }
    }
}

impl Config {
    /// Directory holding `config.toml`.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|d| d.join("vidctl"))
            .ok_or(ConfigError::NoPlatformDir("config"))
    }

    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory holding the position store and log file.
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        dirs::data_dir()
            .map(|d| d.join("vidctl"))
            .ok_or(ConfigError::NoPlatformDir("data"))
    }

    /// Path of the JSON position store.
    pub fn store_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::data_dir()?.join("positions.json"))
    }

    /// Path of the log file.
    pub fn log_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::data_dir()?.join("vidctl.log"))
    }

    /// Load configuration, falling back to defaults if the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Write configuration, creating the config directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.clone(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|source| ConfigError::Write { path, source })
    }

    /// Chapters to display, sorted by time.
    ///
    /// Entries with a negative or non-finite time are dropped. An empty
    /// list falls back to the built-in chapters.
    pub fn chapters(&self) -> Vec<Chapter> {
        let mut chapters: Vec<Chapter> = self
            .chapters
            .iter()
            .filter(|c| c.time.is_finite() && c.time >= 0.0)
            .cloned()
            .collect();
        if chapters.is_empty() {
            return default_chapters();
        }
        chapters.sort_by(|a, b| a.time.total_cmp(&b.time));
        chapters
    }
}
