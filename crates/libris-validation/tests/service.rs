//! Command validation service behaviour

mod support;

use std::sync::Arc;

use libris_config::{ErrorMode, ValidationConfig};
use libris_domain::{
    BookCommand, BorrowerCommand, Command, LendingCommand, MediaCommand, MediaPersonalityId,
};
use libris_validation::errors::ErrorKind;
use libris_validation::{CommandValidator, FixedClock, ReferenceLookups};
use support::*;

fn invalid_borrower() -> Command {
    Command::Borrower(BorrowerCommand {
        full_name: " ".to_string(),
        phone_number: Some("call me".to_string()),
        mail_address: Some("nowhere".to_string()),
        description: None,
        lending_limit: 0,
    })
}

#[tokio::test]
async fn test_fail_fast_reports_first_error_only() {
    let catalog = catalog_with_personalities(&[]);
    let validator = CommandValidator::new(&ValidationConfig::default(), ReferenceLookups::from(&catalog));
    assert_eq!(validator.error_mode(), ErrorMode::FailFast);

    let report = validator.validate(&invalid_borrower()).await.unwrap_err();
    assert_eq!(report.len(), 1);
    let violation = report.errors()[0].violation().unwrap();
    assert_eq!(violation.validating_type(), "BorrowerCommand");
    assert_eq!(violation.validating_field(), "FullName");
    assert_eq!(violation.kind(), &ErrorKind::ShouldNotBeNullOrWhitespace);
}

#[tokio::test]
async fn test_collect_reports_one_error_per_rule_function() {
    let catalog = catalog_with_personalities(&[]);
    let config = ValidationConfig {
        error_mode: ErrorMode::Collect,
        ..ValidationConfig::default()
    };
    let validator = CommandValidator::new(&config, ReferenceLookups::from(&catalog));

    let report = validator.validate(&invalid_borrower()).await.unwrap_err();
    let codes: Vec<_> = report
        .errors()
        .iter()
        .map(|e| {
            let v = e.violation().unwrap();
            (v.validating_field().to_string(), v.kind().code())
        })
        .collect();
    assert_eq!(
        codes,
        vec![
            ("FullName".to_string(), "ShouldNotBeNullOrWhitespace"),
            ("PhoneNumber".to_string(), "ShouldMatchPattern"),
            ("MailAddress".to_string(), "ShouldMatchPattern"),
            ("LendingLimit".to_string(), "ShouldBeAtLeast"),
        ]
    );
}

#[tokio::test]
async fn test_valid_book_passes() {
    let author = MediaPersonalityId::new();
    let catalog = catalog_with_personalities(&[author]);
    let validator = CommandValidator::new(&ValidationConfig::default(), ReferenceLookups::from(&catalog));

    let command = Command::Book(BookCommand {
        media: MediaCommand {
            year_published: Some(1901),
            internet_link: Some("https://example.org/kongens-fald".to_string()),
            ..MediaCommand::titled("Kongens Fald")
        },
        isbn: Some("978-87-400-2445-6".to_string()),
        author_ids: Some(vec![author]),
    });

    validator.validate(&command).await.unwrap();
}

#[tokio::test]
async fn test_fixed_clock_rejects_future_lending() {
    let catalog = catalog_with_personalities(&[]);
    let lending = LendingCommand::new(
        Default::default(),
        Default::default(),
        days_from_now(1),
        days_from_now(10),
    );
    catalog.borrowers.insert(lending.borrower_id);
    catalog.media.insert(lending.media_id);

    let validator = CommandValidator::new(&ValidationConfig::default(), ReferenceLookups::from(&catalog))
        .with_clock(Arc::new(FixedClock::new(now())));

    let report = validator.validate(&Command::Lending(lending)).await.unwrap_err();
    assert_eq!(
        report.errors()[0].kind(),
        Some(&ErrorKind::ShouldBePastDateOrToday)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_validations_share_nothing() {
    let catalog = Arc::new(catalog_with_personalities(&[]));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let catalog = Arc::clone(&catalog);
            tokio::spawn(async move {
                let validator = CommandValidator::new(&ValidationConfig::default(), ReferenceLookups::from(&*catalog))
                    .with_error_mode(ErrorMode::Collect);
                let command = if i % 2 == 0 {
                    Command::Media(MediaCommand::titled(format!("Title {}", i)))
                } else {
                    invalid_borrower()
                };
                validator.validate(&command).await.map_err(|report| report.len())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.await.unwrap();
        if i % 2 == 0 {
            assert_eq!(result, Ok(()));
        } else {
            assert_eq!(result, Err(4));
        }
    }
}
