//! The type and field a check is run for

use tracing::debug;

use crate::errors::{ErrorKind, RuleViolation, ValidationError, ValidationResult};

/// Identifies the validating type and field currently in scope
///
/// Both parts are checked on construction, so every primitive validator can
/// rely on them being non-blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<'a> {
    validating_type: &'a str,
    validating_field: &'a str,
}

impl<'a> Target<'a> {
    /// Create a target; blank names are an invalid argument
    pub fn new(validating_type: &'a str, validating_field: &'a str) -> ValidationResult<Self> {
        if validating_type.trim().is_empty() {
            return Err(ValidationError::invalid_argument(
                "validating_type",
                "must not be blank",
            ));
        }
        if validating_field.trim().is_empty() {
            return Err(ValidationError::invalid_argument(
                "validating_field",
                "must not be blank",
            ));
        }
        Ok(Self {
            validating_type,
            validating_field,
        })
    }

    pub fn validating_type(&self) -> &'a str {
        self.validating_type
    }

    pub fn validating_field(&self) -> &'a str {
        self.validating_field
    }

    /// Build the violation error for this target
    pub fn violation(&self, kind: ErrorKind) -> ValidationError {
        debug!(
            validating_type = self.validating_type,
            validating_field = self.validating_field,
            code = kind.code(),
            "validation rule violated"
        );
        RuleViolation::new(kind, self.validating_type, self.validating_field).into()
    }
}

/// Last path segment of a type name (`BookCommand` for
/// `libris_domain::commands::BookCommand`)
pub fn type_label<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
