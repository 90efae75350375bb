//! Validation error taxonomy
//!
//! Two disjoint classes of failure leave the engine:
//! - [`ValidationError::Violation`]: bad input data, described by a closed
//!   [`ErrorKind`] plus the type and field that were being validated
//! - [`ValidationError::InvalidArgument`]: the engine's own API was misused
//!   (blank type or field name, inverted bounds)
//!
//! A third variant, [`ValidationError::Lookup`], carries a failed existence
//! lookup back to the caller unchanged.

use std::fmt;

use chrono::NaiveDate;
use libris_domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// The rule that was violated, with the bound it was checked against
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum ErrorKind {
    ShouldNotBeNullOrWhitespace,
    ShouldHaveMinLength { min: usize },
    ShouldHaveMaxLength { max: usize },
    ShouldMatchPattern { pattern: String },
    ShouldBeAtLeast { min: i32 },
    ShouldBeAtMost { max: i32 },
    ShouldBeKnownValue,
    ShouldBePastDateOrToday,
    ShouldBeEarlierThanOffset { offset: NaiveDate },
    ShouldBeLaterThanOffset { offset: NaiveDate },
    ShouldBeLaterThanOrEqualToOffset { offset: NaiveDate },
    ShouldHaveMinItems { min: usize },
    ShouldHaveMaxItems { max: usize },
    ShouldNotBeNull,
}

impl ErrorKind {
    /// Every code in the taxonomy, in declaration order
    pub const ALL_CODES: [&'static str; 14] = [
        "ShouldNotBeNullOrWhitespace",
        "ShouldHaveMinLength",
        "ShouldHaveMaxLength",
        "ShouldMatchPattern",
        "ShouldBeAtLeast",
        "ShouldBeAtMost",
        "ShouldBeKnownValue",
        "ShouldBePastDateOrToday",
        "ShouldBeEarlierThanOffset",
        "ShouldBeLaterThanOffset",
        "ShouldBeLaterThanOrEqualToOffset",
        "ShouldHaveMinItems",
        "ShouldHaveMaxItems",
        "ShouldNotBeNull",
    ];

    /// Stable code for presentation-layer lookups
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::ShouldNotBeNullOrWhitespace => "ShouldNotBeNullOrWhitespace",
            ErrorKind::ShouldHaveMinLength { .. } => "ShouldHaveMinLength",
            ErrorKind::ShouldHaveMaxLength { .. } => "ShouldHaveMaxLength",
            ErrorKind::ShouldMatchPattern { .. } => "ShouldMatchPattern",
            ErrorKind::ShouldBeAtLeast { .. } => "ShouldBeAtLeast",
            ErrorKind::ShouldBeAtMost { .. } => "ShouldBeAtMost",
            ErrorKind::ShouldBeKnownValue => "ShouldBeKnownValue",
            ErrorKind::ShouldBePastDateOrToday => "ShouldBePastDateOrToday",
            ErrorKind::ShouldBeEarlierThanOffset { .. } => "ShouldBeEarlierThanOffset",
            ErrorKind::ShouldBeLaterThanOffset { .. } => "ShouldBeLaterThanOffset",
            ErrorKind::ShouldBeLaterThanOrEqualToOffset { .. } => {
                "ShouldBeLaterThanOrEqualToOffset"
            }
            ErrorKind::ShouldHaveMinItems { .. } => "ShouldHaveMinItems",
            ErrorKind::ShouldHaveMaxItems { .. } => "ShouldHaveMaxItems",
            ErrorKind::ShouldNotBeNull => "ShouldNotBeNull",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ShouldNotBeNullOrWhitespace => write!(f, "must not be empty or whitespace"),
            ErrorKind::ShouldHaveMinLength { min } => {
                write!(f, "must be at least {} characters long", min)
            }
            ErrorKind::ShouldHaveMaxLength { max } => {
                write!(f, "must be at most {} characters long", max)
            }
            ErrorKind::ShouldMatchPattern { pattern } => write!(f, "must match pattern {}", pattern),
            ErrorKind::ShouldBeAtLeast { min } => write!(f, "must be at least {}", min),
            ErrorKind::ShouldBeAtMost { max } => write!(f, "must be at most {}", max),
            ErrorKind::ShouldBeKnownValue => write!(f, "must reference a known value"),
            ErrorKind::ShouldBePastDateOrToday => write!(f, "must be today or in the past"),
            ErrorKind::ShouldBeEarlierThanOffset { offset } => {
                write!(f, "must be earlier than {}", offset)
            }
            ErrorKind::ShouldBeLaterThanOffset { offset } => {
                write!(f, "must be later than {}", offset)
            }
            ErrorKind::ShouldBeLaterThanOrEqualToOffset { offset } => {
                write!(f, "must be on or later than {}", offset)
            }
            ErrorKind::ShouldHaveMinItems { min } => write!(f, "must have at least {} items", min),
            ErrorKind::ShouldHaveMaxItems { max } => write!(f, "must have at most {} items", max),
            ErrorKind::ShouldNotBeNull => write!(f, "must be present"),
        }
    }
}

/// A single rule violation: what failed, and where
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{validating_type}.{validating_field} {kind}")]
pub struct RuleViolation {
    kind: ErrorKind,
    validating_type: String,
    validating_field: String,
}

impl RuleViolation {
    pub fn new(
        kind: ErrorKind,
        validating_type: impl Into<String>,
        validating_field: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            validating_type: validating_type.into(),
            validating_field: validating_field.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn validating_type(&self) -> &str {
        &self.validating_type
    }

    pub fn validating_field(&self) -> &str {
        &self.validating_field
    }
}

/// Errors produced by the validation engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error(transparent)]
    Violation(#[from] RuleViolation),

    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    #[error("Existence lookup for {validating_type}.{validating_field} failed: {source}")]
    Lookup {
        validating_type: String,
        validating_field: String,
        #[source]
        source: DomainError,
    },
}

impl ValidationError {
    /// Build an invalid-argument error
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// The rule violation, if this is one
    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            ValidationError::Violation(violation) => Some(violation),
            _ => None,
        }
    }

    /// The violated rule kind, if this is a rule violation
    pub fn kind(&self) -> Option<&ErrorKind> {
        self.violation().map(RuleViolation::kind)
    }

    /// Whether this reports API misuse rather than bad data
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ValidationError::InvalidArgument { .. })
    }
}

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
