use regex::Regex;

use crate::errors::{ErrorKind, ValidationResult};
use crate::target::Target;

/// Checks on text values
///
/// `inclusive_of_blank` decides how null or blank input is treated: `true`
/// exempts it from the check (optional fields), `false` treats it as empty
/// text (required fields). Length is counted in Unicode scalar values.
pub trait StringValidator: Send + Sync {
    fn not_null_or_whitespace(&self, value: Option<&str>, target: Target<'_>) -> ValidationResult<()>;

    fn min_length(
        &self,
        value: Option<&str>,
        min: usize,
        inclusive_of_blank: bool,
        target: Target<'_>,
    ) -> ValidationResult<()>;

    fn max_length(
        &self,
        value: Option<&str>,
        max: usize,
        inclusive_of_blank: bool,
        target: Target<'_>,
    ) -> ValidationResult<()>;

    fn match_pattern(
        &self,
        value: Option<&str>,
        pattern: &Regex,
        inclusive_of_blank: bool,
        target: Target<'_>,
    ) -> ValidationResult<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardStringValidator;

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn char_count(value: Option<&str>) -> usize {
    value.map_or(0, |v| v.chars().count())
}

impl StringValidator for StandardStringValidator {
    fn not_null_or_whitespace(&self, value: Option<&str>, target: Target<'_>) -> ValidationResult<()> {
        if is_blank(value) {
            return Err(target.violation(ErrorKind::ShouldNotBeNullOrWhitespace));
        }
        Ok(())
    }

    fn min_length(
        &self,
        value: Option<&str>,
        min: usize,
        inclusive_of_blank: bool,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        if inclusive_of_blank && is_blank(value) {
            return Ok(());
        }
        if char_count(value) < min {
            return Err(target.violation(ErrorKind::ShouldHaveMinLength { min }));
        }
        Ok(())
    }

    fn max_length(
        &self,
        value: Option<&str>,
        max: usize,
        inclusive_of_blank: bool,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        if inclusive_of_blank && is_blank(value) {
            return Ok(());
        }
        if char_count(value) > max {
            return Err(target.violation(ErrorKind::ShouldHaveMaxLength { max }));
        }
        Ok(())
    }

    fn match_pattern(
        &self,
        value: Option<&str>,
        pattern: &Regex,
        inclusive_of_blank: bool,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        if inclusive_of_blank && is_blank(value) {
            return Ok(());
        }
        match value {
            Some(v) if pattern.is_match(v) => Ok(()),
            _ => Err(target.violation(ErrorKind::ShouldMatchPattern {
                pattern: pattern.as_str().to_string(),
            })),
        }
    }
}
