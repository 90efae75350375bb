// List the error codes a validation can report

use libris_validation::ErrorKind;

use super::{Command, Outcome};
use crate::error::CliResult;
use crate::output::OutputStyle;

/// Print every code in the error taxonomy
pub struct CodesCommand;

impl CodesCommand {
    pub fn new() -> Self {
        Self
    }

    fn lines(style: &OutputStyle) -> Vec<String> {
        std::iter::once(style.header("Error codes"))
            .chain(
                ErrorKind::ALL_CODES
                    .iter()
                    .map(|code| style.list_item(&style.code(code))),
            )
            .collect()
    }
}

impl Default for CodesCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Command for CodesCommand {
    async fn execute(&self) -> CliResult<Outcome> {
        for line in Self::lines(&OutputStyle::default()) {
            println!("{}", line);
        }
        Ok(Outcome::Valid)
    }
}
