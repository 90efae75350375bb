//! Validation engine for libris domain commands
//!
//! Commands are checked by hand-composed rule functions built on a small set
//! of primitive validators:
//!
//! - [`primitives`]: string, integer, date-time, enumerable and object checks
//! - [`context::ValidatorContext`]: hands the primitives to rule functions
//! - [`oracle`]: asynchronous existence lookups for referenced identifiers
//! - [`rules`]: per-field and per-aggregate rule functions
//! - [`pass::ValidationPass`]: fail-fast or collect-all sequencing across
//!   rule functions
//! - [`service::CommandValidator`]: validates any [`libris_domain::Command`]
//!
//! Failures are reported through the closed [`errors::ErrorKind`] taxonomy.

pub mod clock;
pub mod context;
pub mod errors;
pub mod oracle;
pub mod pass;
pub mod primitives;
pub mod rules;
pub mod service;
pub mod target;

pub use clock::{Clock, FixedClock, SystemClock};
pub use context::{StandardValidators, ValidatorContext, ValidatorSet};
pub use errors::{ErrorKind, RuleViolation, ValidationError, ValidationResult};
pub use oracle::{ExistenceOracle, FnOracle, RepositoryOracle};
pub use pass::{ValidationPass, ValidationReport};
pub use rules::ReferenceLookups;
pub use service::CommandValidator;
pub use target::Target;
