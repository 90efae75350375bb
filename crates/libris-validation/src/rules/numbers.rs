//! Numeric range and size rules

use crate::context::{ValidatorContext, ValidatorSet};
use crate::errors::ValidationResult;
use crate::primitives::{EnumerableValidator, IntegerValidator};
use crate::target::Target;

pub const YEAR_PUBLISHED_RANGE: (i32, i32) = (1000, 9999);
pub const LENGTH_RANGE: (i32, i32) = (1, 999);
pub const NUMBER_OF_TRACKS_RANGE: (i32, i32) = (1, 999);
pub const LENDING_LIMIT_RANGE: (i32, i32) = (1, 365);
pub const MAX_IMAGE_BYTES: usize = 32768;

fn optional_between<V: ValidatorSet>(
    ctx: &ValidatorContext<V>,
    value: Option<i32>,
    (min, max): (i32, i32),
    target: Target<'_>,
) -> ValidationResult<()> {
    match value {
        Some(value) => ctx.integer().between(value, min, max, target),
        None => Ok(()),
    }
}

pub async fn validate_year_published<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    year_published: Option<i32>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    optional_between(ctx, year_published, YEAR_PUBLISHED_RANGE, target)?;
    Ok(ctx)
}

/// Running time in minutes
pub async fn validate_length<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    length: Option<i32>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    optional_between(ctx, length, LENGTH_RANGE, target)?;
    Ok(ctx)
}

pub async fn validate_number_of_tracks<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    number_of_tracks: Option<i32>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    optional_between(ctx, number_of_tracks, NUMBER_OF_TRACKS_RANGE, target)?;
    Ok(ctx)
}

pub async fn validate_lending_limit<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    lending_limit: i32,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    let (min, max) = LENDING_LIMIT_RANGE;
    ctx.integer().between(lending_limit, min, max, target)?;
    Ok(ctx)
}

/// Image bytes; checked even when absent, which counts as empty
pub async fn validate_image<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    image: Option<&[u8]>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    ctx.enumerable().min_items(image, 0, target)?;
    ctx.enumerable().max_items(image, MAX_IMAGE_BYTES, target)?;
    Ok(ctx)
}
