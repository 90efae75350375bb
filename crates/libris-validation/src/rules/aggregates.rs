//! Whole-command rules
//!
//! Each aggregate has a pass builder that queues its field rules in visiting
//! order, and a `validate_*_data` rule function that runs that pass and stops
//! at the first failure. The command validation service reuses the builders
//! when a caller wants every failure collected instead.

use libris_domain::{
    BookCommand, BorrowerCommand, LendingCommand, MediaCommand, MediaPersonalityCommand,
    MovieCommand, MusicCommand,
};

use super::dates::*;
use super::numbers::*;
use super::references::*;
use super::text::*;
use crate::context::{ValidatorContext, ValidatorSet};
use crate::errors::ValidationResult;
use crate::pass::ValidationPass;
use crate::target::type_label;

/// Fields every media aggregate shares, reported under `validating_type`
pub fn media_pass<'a, V: ValidatorSet>(
    ctx: &'a ValidatorContext<V>,
    media: &'a MediaCommand,
    lookups: ReferenceLookups<'a>,
    validating_type: &'a str,
) -> ValidationPass<'a> {
    let mut pass = ValidationPass::new();
    pass.step(validate_title(ctx, &media.title, validating_type, "Title"))
        .step(validate_subtitle(ctx, media.subtitle.as_deref(), validating_type, "Subtitle"))
        .step(validate_details(ctx, media.details.as_deref(), validating_type, "Details"))
        .step(validate_genre_identifier(
            ctx,
            media.genre_id,
            lookups.genres,
            validating_type,
            "GenreId",
        ))
        .step(validate_media_type_identifier(
            ctx,
            media.media_type_id,
            lookups.media_types,
            validating_type,
            "MediaTypeId",
        ))
        .step(validate_language_identifier(
            ctx,
            media.language_id,
            lookups.languages,
            validating_type,
            "LanguageId",
        ))
        .step(validate_year_published(ctx, media.year_published, validating_type, "YearPublished"))
        .step(validate_image(ctx, media.image.as_deref(), validating_type, "Image"))
        .step(validate_internet_link(
            ctx,
            media.internet_link.as_deref(),
            validating_type,
            "InternetLink",
        ));
    pass
}

pub fn book_pass<'a, V: ValidatorSet>(
    ctx: &'a ValidatorContext<V>,
    command: &'a BookCommand,
    lookups: ReferenceLookups<'a>,
) -> ValidationPass<'a> {
    let validating_type = type_label::<BookCommand>();
    let mut pass = media_pass(ctx, &command.media, lookups, validating_type);
    pass.step(validate_international_standard_book_number(
        ctx,
        command.isbn.as_deref(),
        validating_type,
        "Isbn",
    ))
    .step(validate_media_personality_identifier_collection(
        ctx,
        command.author_ids.as_deref(),
        lookups.media_personalities,
        validating_type,
        "AuthorIds",
    ));
    pass
}

pub fn movie_pass<'a, V: ValidatorSet>(
    ctx: &'a ValidatorContext<V>,
    command: &'a MovieCommand,
    lookups: ReferenceLookups<'a>,
) -> ValidationPass<'a> {
    let validating_type = type_label::<MovieCommand>();
    let mut pass = media_pass(ctx, &command.media, lookups, validating_type);
    pass.step(validate_length(ctx, command.length, validating_type, "Length"))
        .step(validate_media_personality_identifier_collection(
            ctx,
            command.director_ids.as_deref(),
            lookups.media_personalities,
            validating_type,
            "DirectorIds",
        ))
        .step(validate_media_personality_identifier_collection(
            ctx,
            command.actor_ids.as_deref(),
            lookups.media_personalities,
            validating_type,
            "ActorIds",
        ));
    pass
}

pub fn music_pass<'a, V: ValidatorSet>(
    ctx: &'a ValidatorContext<V>,
    command: &'a MusicCommand,
    lookups: ReferenceLookups<'a>,
) -> ValidationPass<'a> {
    let validating_type = type_label::<MusicCommand>();
    let mut pass = media_pass(ctx, &command.media, lookups, validating_type);
    pass.step(validate_length(ctx, command.length, validating_type, "Length"))
        .step(validate_number_of_tracks(
            ctx,
            command.number_of_tracks,
            validating_type,
            "NumberOfTracks",
        ))
        .step(validate_media_personality_identifier_collection(
            ctx,
            command.artist_ids.as_deref(),
            lookups.media_personalities,
            validating_type,
            "ArtistIds",
        ));
    pass
}

pub fn media_personality_pass<'a, V: ValidatorSet>(
    ctx: &'a ValidatorContext<V>,
    command: &'a MediaPersonalityCommand,
    lookups: ReferenceLookups<'a>,
) -> ValidationPass<'a> {
    let validating_type = type_label::<MediaPersonalityCommand>();
    let mut pass = ValidationPass::new();
    pass.step(validate_name_component(
        ctx,
        command.given_name.as_deref(),
        validating_type,
        "GivenName",
    ))
    .step(validate_name_component(
        ctx,
        command.middle_name.as_deref(),
        validating_type,
        "MiddleName",
    ))
        .step(validate_surname(ctx, &command.surname, validating_type, "Surname"))
        .step(validate_description(
            ctx,
            command.description.as_deref(),
            validating_type,
            "Description",
        ))
        .step(validate_nationality_identifier(
            ctx,
            command.nationality_id,
            lookups.nationalities,
            validating_type,
            "NationalityId",
        ))
        .step(validate_birth_date(
            ctx,
            command.birth_date.as_ref(),
            command.date_of_dead.as_ref(),
            validating_type,
            "BirthDate",
        ))
        .step(validate_date_of_dead(
            ctx,
            command.date_of_dead.as_ref(),
            command.birth_date.as_ref(),
            validating_type,
            "DateOfDead",
        ))
        .step(validate_image(ctx, command.image.as_deref(), validating_type, "Image"))
        .step(validate_internet_link(
            ctx,
            command.internet_link.as_deref(),
            validating_type,
            "InternetLink",
        ));
    pass
}

pub fn borrower_pass<'a, V: ValidatorSet>(
    ctx: &'a ValidatorContext<V>,
    command: &'a BorrowerCommand,
) -> ValidationPass<'a> {
    let validating_type = type_label::<BorrowerCommand>();
    let mut pass = ValidationPass::new();
    pass.step(validate_full_name(ctx, &command.full_name, validating_type, "FullName"))
        .step(validate_phone_number(
            ctx,
            command.phone_number.as_deref(),
            validating_type,
            "PhoneNumber",
        ))
        .step(validate_mail_address(
            ctx,
            command.mail_address.as_deref(),
            validating_type,
            "MailAddress",
        ))
        .step(validate_description(
            ctx,
            command.description.as_deref(),
            validating_type,
            "Description",
        ))
        .step(validate_lending_limit(ctx, command.lending_limit, validating_type, "LendingLimit"));
    pass
}

pub fn lending_pass<'a, V: ValidatorSet>(
    ctx: &'a ValidatorContext<V>,
    command: &'a LendingCommand,
    lookups: ReferenceLookups<'a>,
) -> ValidationPass<'a> {
    let validating_type = type_label::<LendingCommand>();
    let mut pass = ValidationPass::new();
    pass.step(validate_borrower_identifier(
        ctx,
        &command.borrower_id,
        lookups.borrowers,
        validating_type,
        "BorrowerId",
    ))
    .step(validate_media_identifier(
        ctx,
        &command.media_id,
        lookups.media,
        validating_type,
        "MediaId",
    ))
    .step(validate_lending_date(
        ctx,
        &command.lending_date,
        &command.recall_date,
        validating_type,
        "LendingDate",
    ))
    .step(validate_recall_date(
        ctx,
        &command.recall_date,
        &command.lending_date,
        validating_type,
        "RecallDate",
    ))
    .step(validate_returned_date(
        ctx,
        command.returned_date.as_ref(),
        &command.lending_date,
        validating_type,
        "ReturnedDate",
    ))
    .step(validate_description(
        ctx,
        command.description.as_deref(),
        validating_type,
        "Description",
    ));
    pass
}

/// Shared media fields; `validating_type` names the aggregate being checked
pub async fn validate_media_data<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    media: &MediaCommand,
    lookups: ReferenceLookups<'_>,
    validating_type: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    media_pass(ctx, media, lookups, validating_type)
        .run_fail_fast()
        .await?;
    Ok(ctx)
}

pub async fn validate_book_data<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    command: &BookCommand,
    lookups: ReferenceLookups<'_>,
) -> ValidationResult<&'c ValidatorContext<V>> {
    book_pass(ctx, command, lookups).run_fail_fast().await?;
    Ok(ctx)
}

pub async fn validate_movie_data<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    command: &MovieCommand,
    lookups: ReferenceLookups<'_>,
) -> ValidationResult<&'c ValidatorContext<V>> {
    movie_pass(ctx, command, lookups).run_fail_fast().await?;
    Ok(ctx)
}

pub async fn validate_music_data<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    command: &MusicCommand,
    lookups: ReferenceLookups<'_>,
) -> ValidationResult<&'c ValidatorContext<V>> {
    music_pass(ctx, command, lookups).run_fail_fast().await?;
    Ok(ctx)
}

pub async fn validate_media_personality_data<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    command: &MediaPersonalityCommand,
    lookups: ReferenceLookups<'_>,
) -> ValidationResult<&'c ValidatorContext<V>> {
    media_personality_pass(ctx, command, lookups)
        .run_fail_fast()
        .await?;
    Ok(ctx)
}

pub async fn validate_borrower_data<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    command: &BorrowerCommand,
) -> ValidationResult<&'c ValidatorContext<V>> {
    borrower_pass(ctx, command).run_fail_fast().await?;
    Ok(ctx)
}

pub async fn validate_lending_data<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    command: &LendingCommand,
    lookups: ReferenceLookups<'_>,
) -> ValidationResult<&'c ValidatorContext<V>> {
    lending_pass(ctx, command, lookups).run_fail_fast().await?;
    Ok(ctx)
}
