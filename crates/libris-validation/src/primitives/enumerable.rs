use crate::errors::{ErrorKind, ValidationResult};
use crate::target::Target;

/// Item-count checks on sequences; a null sequence has zero items
pub trait EnumerableValidator: Send + Sync {
    fn min_items<T>(&self, value: Option<&[T]>, min: usize, target: Target<'_>) -> ValidationResult<()>;

    fn max_items<T>(&self, value: Option<&[T]>, max: usize, target: Target<'_>) -> ValidationResult<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEnumerableValidator;

impl EnumerableValidator for StandardEnumerableValidator {
    fn min_items<T>(&self, value: Option<&[T]>, min: usize, target: Target<'_>) -> ValidationResult<()> {
        if value.map_or(0, <[T]>::len) < min {
            return Err(target.violation(ErrorKind::ShouldHaveMinItems { min }));
        }
        Ok(())
    }

    fn max_items<T>(&self, value: Option<&[T]>, max: usize, target: Target<'_>) -> ValidationResult<()> {
        if value.map_or(0, <[T]>::len) > max {
            return Err(target.violation(ErrorKind::ShouldHaveMaxItems { max }));
        }
        Ok(())
    }
}
