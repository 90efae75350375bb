use crate::errors::{ErrorKind, ValidationError, ValidationResult};
use crate::target::Target;

/// Range checks on integers
pub trait IntegerValidator: Send + Sync {
    /// Inclusive range check; `min > max` is an invalid argument
    fn between(&self, value: i32, min: i32, max: i32, target: Target<'_>) -> ValidationResult<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardIntegerValidator;

impl IntegerValidator for StandardIntegerValidator {
    fn between(&self, value: i32, min: i32, max: i32, target: Target<'_>) -> ValidationResult<()> {
        if min > max {
            return Err(ValidationError::invalid_argument(
                "min",
                format!("lower bound {} is greater than upper bound {}", min, max),
            ));
        }
        if value < min {
            return Err(target.violation(ErrorKind::ShouldBeAtLeast { min }));
        }
        if value > max {
            return Err(target.violation(ErrorKind::ShouldBeAtMost { max }));
        }
        Ok(())
    }
}
