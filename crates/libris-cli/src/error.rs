// CLI error types

use libris_config::ConfigError;
use libris_common::LoggingError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("Could not read {path}: {message}")]
    Input { path: String, message: String },

    #[error("Validation engine error: {0}")]
    Engine(String),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::Config(e) => {
                format!(
                    "Configuration error: {}\n\nCheck the file passed with --config or the LIBRIS__* environment variables.",
                    libris_common::format_error(e)
                )
            }
            CliError::Logging(e) => format!("Logging setup failed: {}", e),
            CliError::Input { path, message } => {
                format!("Could not read {}: {}", path, message)
            }
            CliError::Engine(msg) => {
                format!("Validation engine error: {}\n\nPlease report this issue.", msg)
            }
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
