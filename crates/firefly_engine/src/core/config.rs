//! Engine configuration
//!
//! Configuration is loaded from a TOML file (`firefly.toml` by default) with
//! every field optional; missing values fall back to the defaults below.
//! Applications that ship no config file at all run entirely on defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "firefly.toml";

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Application behavior settings
    pub app: AppSettings,

    /// Logging settings
    pub logging: LogSettings,
}

/// Application behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Application title, used for log context and window titles
    pub title: String,

    /// Frame rate cap for the main loop; 0 leaves it uncapped
    pub target_fps: u32,

    /// Skip update/render while the application is unfocused
    pub auto_pause: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: "firefly".to_string(),
            target_fps: 0,
            auto_pause: false,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default log filter, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load a configuration file, falling back to defaults when it is
    /// missing or unreadable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from_file(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "config '{}' not loaded ({e}), using defaults",
                    path.as_ref().display()
                );
                Self::default()
            }
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error while reading the file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML content
    #[error("parse error: {0}")]
    Parse(String),
}
