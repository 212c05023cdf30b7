//! Configuration loader for memory-access
//!
//! Handles loading configuration from TOML files and merging with defaults.

use super::defaults::default_config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_access")]
    pub access: AccessConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

/// Checks applied by [`crate::memory::SafeMemoryAccess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    #[serde(default = "default_reject_null")]
    pub reject_null: bool,
    #[serde(default = "default_reject_wraparound")]
    pub reject_wraparound: bool,
    #[serde(default = "default_max_transfer_bytes")]
    pub max_transfer_bytes: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this loader reads from and writes to
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Loads configuration from file
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults only when the file is missing.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<Config, ConfigError> {
        match self.load() {
            Err(ConfigError::FileNotFound(path)) => {
                tracing::debug!(%path, "no configuration file, using defaults");
                Ok(Config::default())
            }
            other => other,
        }
    }

    /// Saves configuration to file
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "memory-access.toml";

/// Loads configuration from the default location
pub fn load_config() -> Result<Config, ConfigError> {
    ConfigLoader::new(DEFAULT_CONFIG_FILE).load_or_default()
}

// Default functions for serde
fn default_access() -> AccessConfig {
    AccessConfig::default()
}

fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
    }
}

// Individual field defaults
fn default_reject_null() -> bool {
    default_config().access.reject_null
}

fn default_reject_wraparound() -> bool {
    default_config().access.reject_wraparound
}

fn default_max_transfer_bytes() -> usize {
    default_config().access.max_transfer_bytes
}

fn default_log_level() -> String {
    default_config().logging.level
}

impl Default for AccessConfig {
    fn default() -> Self {
        let defaults = default_config();
        AccessConfig {
            reject_null: defaults.access.reject_null,
            reject_wraparound: defaults.access.reject_wraparound,
            max_transfer_bytes: defaults.access.max_transfer_bytes,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            access: default_access(),
            logging: default_logging(),
        }
    }
}
