//! Configuration file parsing for the Router.
//!
//! Loads settings from TOML files including bind address, database path,
//! log level, and lineage depth limits.

use petz_lineage::LineageConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Field present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Router configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// SQLite database file
    pub database_path: String,

    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Lineage depth limits
    #[serde(default)]
    pub lineage: LineageConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: RouterConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check required fields and nested limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.is_empty() {
            return Err(ConfigError::MissingField("database_path".to_string()));
        }
        self.lineage.validate().map_err(ConfigError::Invalid)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        RouterConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            database_path: ":memory:".to_string(),
            log_level: default_log_level(),
            lineage: LineageConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
