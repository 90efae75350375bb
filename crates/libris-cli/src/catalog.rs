// Reference catalog file loading
//
// A catalog file lists the identifiers that exist, one array per table:
//
//   genres = [1, 2, 3]
//   languages = [1]
//   media_personalities = ["6f1c2c8e-4a55-4f63-9b4e-0c2f4b8d8a11"]
//
// Missing tables are empty.

use std::path::Path;

use anyhow::Context;
use libris_domain::{
    BorrowerId, GenreId, InMemoryCatalog, InMemoryReferenceRepository, LanguageId, MediaId, MediaPersonalityId, MediaTypeId,
    NationalityId,
};
use serde::Deserialize;
use tracing::debug;

/// On-disk shape of a catalog
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogFile {
    pub genres: Vec<GenreId>,
    pub media_types: Vec<MediaTypeId>,
    pub languages: Vec<LanguageId>,
    pub nationalities: Vec<NationalityId>,
    pub media_personalities: Vec<MediaPersonalityId>,
    pub borrowers: Vec<BorrowerId>,
    pub media: Vec<MediaId>,
}

impl CatalogFile {
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).context("catalog is not valid TOML")
    }

    /// Load every listed identifier into a fresh in-memory catalog
    pub fn into_catalog(self) -> InMemoryCatalog {
        InMemoryCatalog {
            genres: InMemoryReferenceRepository::with_known("genres", self.genres),
            media_types: InMemoryReferenceRepository::with_known("media_types", self.media_types),
            languages: InMemoryReferenceRepository::with_known("languages", self.languages),
            nationalities: InMemoryReferenceRepository::with_known("nationalities", self.nationalities),
            media_personalities: InMemoryReferenceRepository::with_known(
                "media_personalities",
                self.media_personalities,
            ),
            borrowers: InMemoryReferenceRepository::with_known("borrowers", self.borrowers),
            media: InMemoryReferenceRepository::with_known("media", self.media),
        }
    }
}

/// Read and parse a catalog file
pub fn load(path: &Path) -> anyhow::Result<InMemoryCatalog> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = CatalogFile::parse(&source)?.into_catalog();
    debug!(
        path = %path.display(),
        genres = catalog.genres.len(),
        media_personalities = catalog.media_personalities.len(),
        borrowers = catalog.borrowers.len(),
        media = catalog.media.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
