//! Referential-integrity rules
//!
//! Every lookup is awaited before the next one starts, in the order fields
//! are visited, so the first unknown identifier is always the one reported.

use std::collections::HashSet;
use std::fmt;

use libris_domain::{
    BorrowerId, CategoryCode, GenreId, InMemoryCatalog, LanguageId, MediaId, MediaPersonalityId,
    MediaTypeId, NationalityId, ReferenceRepository,
};

use crate::context::{ValidatorContext, ValidatorSet};
use crate::errors::ValidationResult;
use crate::oracle::RepositoryOracle;
use crate::primitives::{IntegerValidator, ObjectValidator};
use crate::target::Target;

pub const CATEGORY_CODE_RANGE: (i32, i32) = (1, 99);

/// Repositories that back existence lookups for one validation call
#[derive(Clone, Copy)]
pub struct ReferenceLookups<'r> {
    pub genres: &'r dyn ReferenceRepository<GenreId>,
    pub media_types: &'r dyn ReferenceRepository<MediaTypeId>,
    pub languages: &'r dyn ReferenceRepository<LanguageId>,
    pub nationalities: &'r dyn ReferenceRepository<NationalityId>,
    pub media_personalities: &'r dyn ReferenceRepository<MediaPersonalityId>,
    pub borrowers: &'r dyn ReferenceRepository<BorrowerId>,
    pub media: &'r dyn ReferenceRepository<MediaId>,
}

impl<'r> From<&'r InMemoryCatalog> for ReferenceLookups<'r> {
    fn from(catalog: &'r InMemoryCatalog) -> Self {
        Self {
            genres: &catalog.genres,
            media_types: &catalog.media_types,
            languages: &catalog.languages,
            nationalities: &catalog.nationalities,
            media_personalities: &catalog.media_personalities,
            borrowers: &catalog.borrowers,
            media: &catalog.media,
        }
    }
}

async fn category_identifier<V, C>(
    ctx: &ValidatorContext<V>,
    value: Option<C>,
    repository: &dyn ReferenceRepository<C>,
    target: Target<'_>,
) -> ValidationResult<()>
where
    V: ValidatorSet,
    C: CategoryCode,
{
    let Some(value) = value else {
        return Ok(());
    };
    let (min, max) = CATEGORY_CODE_RANGE;
    ctx.integer().between(value.code(), min, max, target)?;
    ctx.object()
        .known_value(Some(&value), &RepositoryOracle::new(repository), false, target)
        .await
}

async fn record_identifier<V, K>(
    ctx: &ValidatorContext<V>,
    value: &K,
    repository: &dyn ReferenceRepository<K>,
    target: Target<'_>,
) -> ValidationResult<()>
where
    V: ValidatorSet,
    K: fmt::Debug + Send + Sync,
{
    ctx.object()
        .known_value(Some(value), &RepositoryOracle::new(repository), false, target)
        .await
}

pub async fn validate_genre_identifier<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    genre_id: Option<GenreId>,
    genres: &dyn ReferenceRepository<GenreId>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    category_identifier(ctx, genre_id, genres, target).await?;
    Ok(ctx)
}

pub async fn validate_media_type_identifier<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    media_type_id: Option<MediaTypeId>,
    media_types: &dyn ReferenceRepository<MediaTypeId>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    category_identifier(ctx, media_type_id, media_types, target).await?;
    Ok(ctx)
}

pub async fn validate_language_identifier<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    language_id: Option<LanguageId>,
    languages: &dyn ReferenceRepository<LanguageId>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    category_identifier(ctx, language_id, languages, target).await?;
    Ok(ctx)
}

pub async fn validate_nationality_identifier<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    nationality_id: Option<NationalityId>,
    nationalities: &dyn ReferenceRepository<NationalityId>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    category_identifier(ctx, nationality_id, nationalities, target).await?;
    Ok(ctx)
}

pub async fn validate_borrower_identifier<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    borrower_id: &BorrowerId,
    borrowers: &dyn ReferenceRepository<BorrowerId>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    record_identifier(ctx, borrower_id, borrowers, target).await?;
    Ok(ctx)
}

pub async fn validate_media_identifier<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    media_id: &MediaId,
    media: &dyn ReferenceRepository<MediaId>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    record_identifier(ctx, media_id, media, target).await?;
    Ok(ctx)
}

/// Authors, directors, actors or artists referenced by a media item
///
/// The collection itself must be present (an empty one is fine); every
/// distinct identifier in it is then looked up once, in order.
pub async fn validate_media_personality_identifier_collection<'c, V: ValidatorSet>(
    ctx: &'c ValidatorContext<V>,
    ids: Option<&[MediaPersonalityId]>,
    media_personalities: &dyn ReferenceRepository<MediaPersonalityId>,
    validating_type: &str,
    validating_field: &str,
) -> ValidationResult<&'c ValidatorContext<V>> {
    let target = Target::new(validating_type, validating_field)?;
    ctx.object().not_null(ids, target)?;

    let oracle = RepositoryOracle::new(media_personalities);
    let mut seen = HashSet::new();
    for id in ids.unwrap_or_default() {
        if !seen.insert(id) {
            continue;
        }
        ctx.object().known_value(Some(id), &oracle, false, target).await?;
    }
    Ok(ctx)
}
