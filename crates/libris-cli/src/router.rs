// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use libris_common::{LogLevel, LogOptions};
use libris_config::{AppConfig, ConfigManager, ConfigManagerTrait};
use tracing::debug;

use crate::commands::*;
use crate::error::CliResult;

/// libris - validate media library commands
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(bin_name = "libris")]
#[command(about = "Validate media library commands against a reference catalog")]
#[command(version)]
#[command(author = "Libris Contributors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: <config dir>/libris/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate a JSON-encoded command
    #[command(about = "Validate a command file and print every violation")]
    Validate {
        /// Command file (JSON, tagged with "kind")
        #[arg(long, value_name = "FILE")]
        command: PathBuf,

        /// Reference catalog (TOML)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Report every failing rule instead of stopping at the first
        #[arg(long)]
        collect: bool,
    },

    /// List every error code
    #[command(about = "List every error code a validation can report")]
    Codes,
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<Outcome> {
        let cli = Cli::parse();
        let config = Self::load_config(&cli)?;

        libris_common::init(Self::log_options(&cli, &config))?;
        debug!(?config, "configuration loaded");

        Self::execute(&cli, &config).await
    }

    /// Load configuration from the file named on the command line, or the default location
    pub fn load_config(cli: &Cli) -> CliResult<AppConfig> {
        let mut manager = match &cli.config {
            Some(path) => ConfigManager::with_path(path.clone()),
            None => ConfigManager::new(),
        };
        Ok(manager.load_config()?)
    }

    /// Logging options: `--verbose` wins over the configured level
    pub fn log_options(cli: &Cli, config: &AppConfig) -> LogOptions {
        let level = if cli.verbose {
            LogLevel::Debug
        } else {
            config.logging.log_level().unwrap_or_default()
        };
        LogOptions {
            level,
            ansi: config.logging.ansi,
            with_target: cli.verbose,
        }
    }

    /// Execute a command
    pub async fn execute(cli: &Cli, config: &AppConfig) -> CliResult<Outcome> {
        match &cli.command {
            Commands::Validate {
                command,
                catalog,
                collect,
            } => {
                let cmd = ValidateCommand::new(command.clone(), config.validation.clone())
                    .with_catalog(catalog.clone())
                    .with_collect(*collect);
                cmd.execute().await
            }
            Commands::Codes => CodesCommand::new().execute().await,
        }
    }
}
