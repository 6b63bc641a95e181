//! Embedder-facing bridge configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tether_launch::ProcessLauncher;

/// Errors from configuration loading, parsing, or validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The specified config file was not found.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// TOML parsing failed.
    #[error("TOML parse error: {0}")]
    Parse(String),

    /// A config value failed validation.
    #[error("validation error: {field}: {message}")]
    Validation {
        /// The dotted field path (e.g. `adapter.module_runner`).
        field: String,
        /// Human-readable description of the violation.
        message: String,
    },

    /// An I/O error occurred while reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Log verbosity level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Most verbose.
    Trace,
    /// Debug messages.
    Debug,
    /// Informational messages (default).
    #[default]
    Info,
    /// Warnings only.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// The `tracing`-compatible filter string for this level.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging section.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log verbosity.
    pub level: LogLevel,
}

/// Adapter-process section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Program used to run `{modulePath}` adapter descriptors.
    pub module_runner: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            module_runner: "node".into(),
        }
    }
}

/// Bridge configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Logging section.
    pub log: LogConfig,
    /// Adapter-process section.
    pub adapter: AdapterConfig,
}

impl BridgeConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        validate(&config)?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// A process launcher configured from this config.
    pub fn launcher(&self) -> ProcessLauncher {
        ProcessLauncher::new(&self.adapter.module_runner)
    }
}

/// Validate a [`BridgeConfig`].
fn validate(config: &BridgeConfig) -> Result<(), ConfigError> {
    if config.adapter.module_runner.is_empty() {
        return Err(ConfigError::Validation {
            field: "adapter.module_runner".into(),
            message: "must not be empty".into(),
        });
    }
    Ok(())
}
