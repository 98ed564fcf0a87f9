//! Configuration management
//!
//! Settings are read from the first of:
//!
//! 1. An explicit path (`--config <path>`)
//! 2. `.barcheck.toml` in the current directory
//! 3. `~/.config/barcheck/config.toml` (XDG standard)
//!
//! Missing files fall back to defaults. An explicit path that does not exist,
//! or any file that fails to parse, is an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{FormatParseError, Locale, ScannerFormat};
use crate::core::services::dedup::DEFAULT_WINDOW;

/// Project configuration filename
pub const CONFIG_FILE: &str = ".barcheck.toml";

/// Global configuration filename (inside the config directory)
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Errors loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading the file failed
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Serializing the configuration failed
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Writing the file failed
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// `default_hint` names no known format
    #[error("invalid default_hint: {0}")]
    InvalidHint(#[from] FormatParseError),
}

fn default_window_ms() -> u64 {
    u64::try_from(DEFAULT_WINDOW.as_millis()).unwrap_or(u64::MAX)
}

/// barcheck configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Language of symbology descriptions
    #[serde(default)]
    pub locale: Locale,

    /// Format hint applied when the command line gives none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_hint: Option<String>,

    /// Duplicate-scan window for `stream`, in milliseconds
    #[serde(default = "default_window_ms")]
    pub dedup_window_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            default_hint: None,
            dedup_window_ms: default_window_ms(),
        }
    }
}

impl Config {
    /// Global config directory (`~/.config/barcheck`)
    #[must_use]
    pub fn global_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("barcheck"))
    }

    /// Global config file path
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
    }

    /// Load from a specific file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve configuration using the lookup order in the module docs
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            log::debug!("loading config from {}", path.display());
            return Self::from_file(path);
        }

        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            log::debug!("loading config from {}", local.display());
            return Self::from_file(&local);
        }

        if let Some(global) = Self::global_path().filter(|p| p.exists()) {
            log::debug!("loading config from {}", global.display());
            return Self::from_file(&global);
        }

        log::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Save to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parsed `default_hint`
    pub fn hint(&self) -> Result<Option<ScannerFormat>, ConfigError> {
        Ok(self
            .default_hint
            .as_deref()
            .map(str::parse::<ScannerFormat>)
            .transpose()?)
    }

    /// Duplicate-scan window
    #[must_use]
    pub const fn dedup_window(&self) -> Duration {
        Duration::from_millis(self.dedup_window_ms)
    }
}
