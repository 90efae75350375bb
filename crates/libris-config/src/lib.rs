//! Libris Configuration Management
//!
//! Loads the engine and logging settings from an optional TOML file layered
//! under `LIBRIS__*` environment variables.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{
    AppConfig, ConfigManager as ConfigManagerTrait, ErrorMode, LoggingConfig, TimeBasis,
    ValidationConfig,
};
