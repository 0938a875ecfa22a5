//! Configuration management for oversize-checker
//!
//! Config stored at: ~/.config/oversize-checker/config.toml
//!
//! Only presentation and logging are configurable. Rule thresholds are fixed.

use oversize_types::{ConfigError, LogFormat, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON responses
    #[serde(default)]
    pub pretty: bool,

    /// Log level filter, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log line format (text, json)
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            pretty: false,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("oversize-checker");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Pretty JSON:     {}", self.pretty)?;
        writeln!(f, "Log level:       {}", self.log_level)?;
        write!(f, "Log format:      {}", self.log_format)
    }
}
