// Validate a command file against a reference catalog

use std::path::{Path, PathBuf};

use libris_common::format_error;
use libris_config::{ErrorMode, ValidationConfig};
use libris_domain::{Command as DomainCommand, InMemoryCatalog};
use libris_validation::{CommandValidator, ReferenceLookups, ValidationError, ValidationReport};
use tracing::{debug, warn};

use super::{Command, Outcome};
use crate::catalog;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Validate one JSON-encoded command
pub struct ValidateCommand {
    command_path: PathBuf,
    catalog_path: Option<PathBuf>,
    config: ValidationConfig,
}

impl ValidateCommand {
    pub fn new(command_path: PathBuf, config: ValidationConfig) -> Self {
        Self {
            command_path,
            catalog_path: None,
            config,
        }
    }

    /// Resolve references against this catalog file
    pub fn with_catalog(mut self, catalog_path: Option<PathBuf>) -> Self {
        self.catalog_path = catalog_path;
        self
    }

    /// Report every failing rule instead of stopping at the first
    pub fn with_collect(mut self, collect: bool) -> Self {
        if collect {
            self.config.error_mode = ErrorMode::Collect;
        }
        self
    }

    /// Read and decode the command file
    pub async fn read_command(&self) -> CliResult<DomainCommand> {
        let source = tokio::fs::read_to_string(&self.command_path)
            .await
            .map_err(|e| input_error(&self.command_path, e.to_string()))?;
        serde_json::from_str(&source).map_err(|e| input_error(&self.command_path, e.to_string()))
    }

    fn load_catalog(&self) -> CliResult<InMemoryCatalog> {
        match &self.catalog_path {
            Some(path) => {
                catalog::load(path).map_err(|e| input_error(path, format!("{:#}", e)))
            }
            None => {
                warn!("no catalog given; every referenced identifier will be unknown");
                Ok(InMemoryCatalog::new())
            }
        }
    }

    /// Run the validation and return the report lines
    pub async fn check(&self, style: &OutputStyle) -> CliResult<(Outcome, Vec<String>)> {
        let command = self.read_command().await?;
        let catalog = self.load_catalog()?;
        debug!(kind = command.kind(), path = %self.command_path.display(), "validating command file");

        let validator = CommandValidator::new(&self.config, ReferenceLookups::from(&catalog));
        match validator.validate(&command).await {
            Ok(()) => Ok((
                Outcome::Valid,
                vec![style.success(&format!("{} command is valid", command.kind()))],
            )),
            Err(report) => Ok((Outcome::Rejected, render_report(report, style)?)),
        }
    }
}

/// One `TYPE.FIELD CODE: message` line per violation
///
/// Engine failures (misuse or a failed lookup) are not rejections of the
/// input and surface as [`CliError::Engine`].
pub fn render_report(report: ValidationReport, style: &OutputStyle) -> CliResult<Vec<String>> {
    report
        .into_errors()
        .into_iter()
        .map(|error| match error {
            ValidationError::Violation(violation) => Ok(style.error(&format!(
                "{}.{} {}: {}",
                violation.validating_type(),
                violation.validating_field(),
                style.code(violation.kind().code()),
                violation.kind()
            ))),
            other => Err(CliError::Engine(format_error(&other))),
        })
        .collect()
}

fn input_error(path: &Path, message: String) -> CliError {
    CliError::Input {
        path: path.display().to_string(),
        message,
    }
}

#[async_trait::async_trait]
impl Command for ValidateCommand {
    async fn execute(&self) -> CliResult<Outcome> {
        let (outcome, lines) = self.check(&OutputStyle::default()).await?;
        for line in lines {
            println!("{}", line);
        }
        Ok(outcome)
    }
}
