// Command handlers for the libris CLI

pub mod codes;
pub mod validate;

pub use codes::CodesCommand;
pub use validate::ValidateCommand;

use crate::error::CliResult;

/// What a finished command reports back to the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to complain about
    Valid,
    /// The input was checked and rejected
    Rejected,
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Valid => 0,
            Outcome::Rejected => 1,
        }
    }
}

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<Outcome>;
}
