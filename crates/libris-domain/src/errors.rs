//! Domain errors for libris

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid identifier for {entity_type}: {reason}")]
    InvalidIdentifier { entity_type: String, reason: String },

    #[error("Repository unavailable: {repository} - {reason}")]
    RepositoryUnavailable { repository: String, reason: String },

    #[error("Lookup failed: {entity_type} with id {id} - {reason}")]
    LookupFailed {
        entity_type: String,
        id: String,
        reason: String,
    },
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
