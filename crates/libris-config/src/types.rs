//! Core configuration types and data structures

use libris_common::LogLevel;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Validation engine configuration
    pub validation: ValidationConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// How a validation pass reacts to a failing rule function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorMode {
    /// Stop at the first failing rule function
    #[default]
    FailFast,
    /// Run every rule function and report all failures
    Collect,
}

/// Calendar used to decide what "today" is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeBasis {
    #[default]
    Utc,
    Local,
}

/// Validation engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// Error handling across rule functions
    pub error_mode: ErrorMode,
    /// Calendar for past-or-today checks
    pub time_basis: TimeBasis,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level name (trace, debug, info, warn, error)
    pub level: String,
    /// Colour terminal output
    pub ansi: bool,
}

impl LoggingConfig {
    /// Parsed log level, `None` for an unknown name
    pub fn log_level(&self) -> Option<LogLevel> {
        LogLevel::from_str(&self.level)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}

/// Configuration manager trait
pub trait ConfigManager {
    /// Load configuration
    fn load_config(&mut self) -> Result<AppConfig, crate::error::ConfigError>;
    /// Save configuration
    fn save_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
}
