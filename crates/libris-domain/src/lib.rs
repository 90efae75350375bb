//! Core domain types for the libris media library
//!
//! Commands are the plain data holders produced upstream from request
//! payloads; the validation engine reads them and never mutates them.
//! Repositories are defined here only as interfaces plus an in-memory
//! implementation used by tests and the command-line front end.

pub mod commands;
pub mod errors;
pub mod repositories;
pub mod value_objects;

pub use commands::*;
pub use errors::{DomainError, DomainResult};
pub use repositories::{InMemoryCatalog, InMemoryReferenceRepository, ReferenceRepository};
pub use value_objects::*;
