//! Cross-field date rules
//!
//! Every comparison is made on calendar dates as seen by the context's clock.

use chrono::{DateTime, Utc};

use crate::context::{ValidatorContext, ValidatorSet};
use crate::errors::ValidationResult;
use crate::primitives::DateTimeValidator;
use crate::target::Target;

/// Birth date of a media personality
///
/// Must not lie in the future and must come strictly before the date of
/// dead. Without a date of dead the current instant is the upper bound.
pub async fn validate_birth_date<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    birth_date: Option<&DateTime<Utc>>,
    date_of_dead: Option<&DateTime<Utc>>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    let Some(birth_date) = birth_date else {
        return Ok(ctx);
    };

    let dates = ctx.date_time();
    dates.past_date_or_today(birth_date, target)?;
    let upper = date_of_dead.copied().unwrap_or_else(|| dates.now());
    dates.earlier_than_offset(birth_date, &upper, target)?;
    Ok(ctx)
}

/// Date of dead of a media personality
///
/// Must not lie in the future and must come strictly after the birth date.
/// Without a birth date the earliest representable instant is the lower
/// bound.
pub async fn validate_date_of_dead<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    date_of_dead: Option<&DateTime<Utc>>,
    birth_date: Option<&DateTime<Utc>>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    let Some(date_of_dead) = date_of_dead else {
        return Ok(ctx);
    };

    let dates = ctx.date_time();
    dates.past_date_or_today(date_of_dead, target)?;
    let lower = birth_date.copied().unwrap_or(DateTime::<Utc>::MIN_UTC);
    dates.later_than_offset(date_of_dead, &lower, target)?;
    Ok(ctx)
}

pub async fn validate_lending_date<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    lending_date: &DateTime<Utc>,
    recall_date: &DateTime<Utc>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    let dates = ctx.date_time();
    dates.past_date_or_today(lending_date, target)?;
    dates.earlier_than_offset(lending_date, recall_date, target)?;
    Ok(ctx)
}

pub async fn validate_recall_date<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    recall_date: &DateTime<Utc>,
    lending_date: &DateTime<Utc>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    ctx.date_time()
        .later_than_offset(recall_date, lending_date, target)?;
    Ok(ctx)
}

/// Return date of a lending; may fall on the lending date itself
pub async fn validate_returned_date<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    returned_date: Option<&DateTime<Utc>>,
    lending_date: &DateTime<Utc>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    let Some(returned_date) = returned_date else {
        return Ok(ctx);
    };

    let dates = ctx.date_time();
    dates.past_date_or_today(returned_date, target)?;
    dates.later_than_or_equal_to_offset(returned_date, lending_date, target)?;
    Ok(ctx)
}
