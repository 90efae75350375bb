//! Generated checks of the rule-invocation contracts

mod support;

use chrono::Duration;
use libris_domain::{
    BookCommand, BorrowerId, GenreId, LanguageId, LendingCommand, MediaCommand, MediaId,
    MediaPersonalityId, MediaTypeId,
};
use libris_validation::rules::{self, ReferenceLookups};
use proptest::prelude::*;
use support::*;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(future)
}

fn optional_media() -> impl Strategy<Value = MediaCommand> {
    (
        "[A-Za-z ]{1,40}",
        proptest::option::of("[a-z]{1,40}"),
        proptest::option::of("[a-z ]{1,200}"),
        proptest::option::of(1i32..=10),
        proptest::option::of(1i32..=10),
        proptest::option::of(1i32..=10),
        proptest::option::of(1000i32..=9999),
    )
        .prop_map(|(title, subtitle, details, genre, media_type, language, year)| MediaCommand {
            title: format!("T{}", title),
            subtitle,
            details,
            genre_id: genre.map(GenreId::new),
            media_type_id: media_type.map(MediaTypeId::new),
            language_id: language.map(LanguageId::new),
            year_published: year,
            ..MediaCommand::default()
        })
}

proptest! {
    #[test]
    fn prop_absent_optional_fields_are_never_checked(media in optional_media()) {
        let ctx = recording_context();
        let catalog = catalog_with_personalities(&[]);
        let command = BookCommand {
            media: media.clone(),
            author_ids: Some(Vec::new()),
            ..BookCommand::default()
        };

        let result = block_on(rules::validate_book_data(&ctx, &command, ReferenceLookups::from(&catalog)));
        prop_assert!(result.is_ok());

        let log = ctx.validators().log();
        let expectations = [
            ("Subtitle", media.subtitle.is_some(), 2),
            ("Details", media.details.is_some(), 2),
            ("GenreId", media.genre_id.is_some(), 2),
            ("MediaTypeId", media.media_type_id.is_some(), 2),
            ("LanguageId", media.language_id.is_some(), 2),
            ("YearPublished", media.year_published.is_some(), 1),
        ];
        for (field, present, calls_when_present) in expectations {
            let expected = if present { calls_when_present } else { 0 };
            prop_assert_eq!(log.for_field(field).len(), expected, "{}", field);
        }
    }

    #[test]
    fn prop_collection_of_k_ids_gets_k_lookups(k in 0usize..12) {
        let ctx = recording_context();
        let ids: Vec<_> = (0..k).map(|_| MediaPersonalityId::new()).collect();
        let catalog = catalog_with_personalities(&ids);

        let returned = block_on(rules::validate_media_personality_identifier_collection(
            &ctx,
            Some(ids.as_slice()),
            &catalog.media_personalities,
            "MovieCommand",
            "ActorIds",
        ));
        prop_assert!(std::ptr::eq(returned.unwrap(), &ctx));

        let log = ctx.validators().log();
        prop_assert_eq!(log.count(Call::is_not_null), 1);
        prop_assert_eq!(log.count(Call::is_known_value), k);
    }

    #[test]
    fn prop_lending_dates_checked_once_each(
        days_ago in 0i64..3650,
        recall_after in 1i64..365,
    ) {
        let ctx = recording_context();
        let catalog = catalog_with_personalities(&[]);
        let lending_date = now() - Duration::days(days_ago);
        let command = LendingCommand::new(
            BorrowerId::new(),
            MediaId::new(),
            lending_date,
            lending_date + Duration::days(recall_after),
        );
        catalog.borrowers.insert(command.borrower_id);
        catalog.media.insert(command.media_id);

        let returned = block_on(rules::validate_lending_data(&ctx, &command, ReferenceLookups::from(&catalog)));
        prop_assert!(std::ptr::eq(returned.unwrap(), &ctx));

        let log = ctx.validators().log();
        prop_assert_eq!(
            log.for_field("LendingDate"),
            vec![
                Call::PastDateOrToday {
                    field: "LendingDate".to_string(),
                    value: lending_date.date_naive(),
                },
                Call::EarlierThanOffset {
                    field: "LendingDate".to_string(),
                    value: lending_date.date_naive(),
                    offset: command.recall_date.date_naive(),
                },
            ]
        );
        prop_assert!(log.for_field("ReturnedDate").is_empty());
    }

    #[test]
    fn prop_text_rules_return_the_same_context(text in "\\PC{0,300}") {
        let ctx = recording_context();
        for result in [
            block_on(rules::validate_subtitle(&ctx, Some(text.as_str()), "BookCommand", "Subtitle")),
            block_on(rules::validate_description(&ctx, Some(text.as_str()), "BookCommand", "Description")),
            block_on(rules::validate_title(&ctx, &text, "BookCommand", "Title")),
        ] {
            if let Ok(returned) = result {
                prop_assert!(std::ptr::eq(returned, &ctx));
            }
        }
    }
}
