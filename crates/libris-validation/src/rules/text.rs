//! Text field rules

use regex::Regex;

use super::patterns;
use crate::context::{ValidatorContext, ValidatorSet};
use crate::errors::ValidationResult;
use crate::primitives::StringValidator;
use crate::target::Target;

pub const MAX_SHORT_TEXT_LENGTH: usize = 256;
pub const MAX_CODE_LENGTH: usize = 32;
pub const MAX_DESCRIPTION_LENGTH: usize = 512;
pub const MAX_DETAILS_LENGTH: usize = 32768;

fn required_text<V: ValidatorSet>(
    ctx: &ValidatorContext<V>,
    value: &str,
    max: usize,
    target: Target<'_>,
) -> ValidationResult<()> {
    let strings = ctx.string();
    strings.not_null_or_whitespace(Some(value), target)?;
    strings.min_length(Some(value), 1, false, target)?;
    strings.max_length(Some(value), max, false, target)
}

fn optional_text<V: ValidatorSet>(
    ctx: &ValidatorContext<V>,
    value: Option<&str>,
    max: usize,
    pattern: Option<&Regex>,
    target: Target<'_>,
) -> ValidationResult<()> {
    let Some(value) = value else {
        return Ok(());
    };
    let strings = ctx.string();
    strings.min_length(Some(value), 1, true, target)?;
    strings.max_length(Some(value), max, true, target)?;
    if let Some(pattern) = pattern {
        strings.match_pattern(Some(value), pattern, true, target)?;
    }
    Ok(())
}

pub async fn validate_title<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    title: &str,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    required_text(ctx, title, MAX_SHORT_TEXT_LENGTH, target)?;
    Ok(ctx)
}

pub async fn validate_subtitle<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    subtitle: Option<&str>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    optional_text(ctx, subtitle, MAX_SHORT_TEXT_LENGTH, None, target)?;
    Ok(ctx)
}

pub async fn validate_details<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    details: Option<&str>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    optional_text(ctx, details, MAX_DETAILS_LENGTH, None, target)?;
    Ok(ctx)
}

pub async fn validate_description<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    description: Option<&str>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    optional_text(ctx, description, MAX_DESCRIPTION_LENGTH, None, target)?;
    Ok(ctx)
}

pub async fn validate_international_standard_book_number<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    isbn: Option<&str>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    optional_text(
        ctx,
        isbn,
        MAX_CODE_LENGTH,
        Some(patterns::international_standard_book_number()),
        target,
    )?;
    Ok(ctx)
}

pub async fn validate_internet_link<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    link: Option<&str>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    optional_text(
        ctx,
        link,
        MAX_SHORT_TEXT_LENGTH,
        Some(patterns::internet_link()),
        target,
    )?;
    Ok(ctx)
}

pub async fn validate_phone_number<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    phone_number: Option<&str>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    optional_text(
        ctx,
        phone_number,
        MAX_CODE_LENGTH,
        Some(patterns::phone_number()),
        target,
    )?;
    Ok(ctx)
}

pub async fn validate_mail_address<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    mail_address: Option<&str>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    optional_text(
        ctx,
        mail_address,
        MAX_SHORT_TEXT_LENGTH,
        Some(patterns::mail_address()),
        target,
    )?;
    Ok(ctx)
}

pub async fn validate_full_name<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    full_name: &str,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    required_text(ctx, full_name, MAX_SHORT_TEXT_LENGTH, target)?;
    Ok(ctx)
}

/// Given or middle name; optional next to the required surname
pub async fn validate_name_component<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    name: Option<&str>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    optional_text(ctx, name, MAX_SHORT_TEXT_LENGTH, None, target)?;
    Ok(ctx)
}

pub async fn validate_surname<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    surname: &str,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    required_text(ctx, surname, MAX_SHORT_TEXT_LENGTH, target)?;
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[tokio::test]
    async fn test_title_bounds() {
        let ctx = ValidatorContext::new();
        assert!(validate_title(&ctx, "Kongens Fald", "BookCommand", "Title").await.is_ok());

        let err = validate_title(&ctx, "   ", "BookCommand", "Title").await.unwrap_err();
        assert_eq!(err.kind(), Some(&ErrorKind::ShouldNotBeNullOrWhitespace));

        let long = "x".repeat(MAX_SHORT_TEXT_LENGTH + 1);
        let err = validate_title(&ctx, &long, "BookCommand", "Title").await.unwrap_err();
        assert_eq!(err.kind(), Some(&ErrorKind::ShouldHaveMaxLength { max: 256 }));
    }

    #[tokio::test]
    async fn test_blank_optional_text_is_exempt() {
        let ctx = ValidatorContext::new();
        assert!(validate_subtitle(&ctx, Some(""), "BookCommand", "Subtitle").await.is_ok());
        assert!(validate_phone_number(&ctx, Some("  "), "BorrowerCommand", "PhoneNumber")
            .await
            .is_ok());
        assert!(validate_description(&ctx, None, "BorrowerCommand", "Description")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_pattern_fields_reject_malformed_values() {
        let ctx = ValidatorContext::new();
        let err = validate_mail_address(&ctx, Some("nobody"), "BorrowerCommand", "MailAddress")
            .await
            .unwrap_err();
        assert_eq!(err.kind().map(ErrorKind::code), Some("ShouldMatchPattern"));

        let err = validate_international_standard_book_number(
            &ctx,
            Some("978-87-400-2445-6-0000-0000-0000-0000"),
            "BookCommand",
            "Isbn",
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), Some(&ErrorKind::ShouldHaveMaxLength { max: 32 }));

        for short in ["1234", "12345678901"] {
            let err = validate_international_standard_book_number(&ctx, Some(short), "BookCommand", "Isbn")
                .await
                .unwrap_err();
            assert_eq!(err.kind().map(ErrorKind::code), Some("ShouldMatchPattern"), "{short}");
        }
    }

    #[tokio::test]
    async fn test_blank_field_name_is_invalid_argument() {
        let ctx = ValidatorContext::new();
        let err = validate_details(&ctx, None, "BookCommand", " ").await.unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
