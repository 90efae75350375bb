// libris CLI library

pub mod catalog;
pub mod commands;
pub mod error;
pub mod output;
pub mod router;

pub use error::{CliError, CliResult};
