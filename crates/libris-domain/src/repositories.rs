//! Repository interfaces for reference lookups
//!
//! The validation engine only ever asks one question of a repository: does a
//! record with this identifier exist? Persistence implementations live
//! outside this crate; [`InMemoryReferenceRepository`] backs tests and the
//! command-line front end.

use std::collections::HashSet;
use std::hash::Hash;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::trace;

use crate::errors::DomainResult;
use crate::value_objects::{
    BorrowerId, GenreId, LanguageId, MediaId, MediaPersonalityId, MediaTypeId, NationalityId,
};

/// Existence lookup for one identifier type
#[async_trait]
pub trait ReferenceRepository<ID>: Send + Sync
where
    ID: Send + Sync,
{
    /// Check existence
    async fn exists(&self, id: &ID) -> DomainResult<bool>;
}

/// Reference repository backed by an in-memory set
#[derive(Debug)]
pub struct InMemoryReferenceRepository<ID> {
    name: String,
    known: RwLock<HashSet<ID>>,
}

impl<ID> InMemoryReferenceRepository<ID>
where
    ID: Eq + Hash,
{
    /// Create an empty repository
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            known: RwLock::new(HashSet::new()),
        }
    }

    /// Create a repository that knows the given identifiers
    pub fn with_known(name: impl Into<String>, ids: impl IntoIterator<Item = ID>) -> Self {
        Self {
            name: name.into(),
            known: RwLock::new(ids.into_iter().collect()),
        }
    }

    /// Repository name used in logs
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register an identifier
    pub fn insert(&self, id: ID) -> bool {
        self.known.write().insert(id)
    }

    /// Forget an identifier
    pub fn remove(&self, id: &ID) -> bool {
        self.known.write().remove(id)
    }

    /// Forget every identifier
    pub fn clear(&self) {
        self.known.write().clear();
    }

    /// Number of known identifiers
    pub fn len(&self) -> usize {
        self.known.read().len()
    }

    /// Whether no identifier is known
    pub fn is_empty(&self) -> bool {
        self.known.read().is_empty()
    }
}

#[async_trait]
impl<ID> ReferenceRepository<ID> for InMemoryReferenceRepository<ID>
where
    ID: Eq + Hash + std::fmt::Display + Send + Sync,
{
    async fn exists(&self, id: &ID) -> DomainResult<bool> {
        let found = self.known.read().contains(id);
        trace!(repository = %self.name, %id, found, "reference lookup");
        Ok(found)
    }
}

/// Every reference table the engine looks identifiers up in
#[derive(Debug)]
pub struct InMemoryCatalog {
    pub genres: InMemoryReferenceRepository<GenreId>,
    pub media_types: InMemoryReferenceRepository<MediaTypeId>,
    pub languages: InMemoryReferenceRepository<LanguageId>,
    pub nationalities: InMemoryReferenceRepository<NationalityId>,
    pub media_personalities: InMemoryReferenceRepository<MediaPersonalityId>,
    pub borrowers: InMemoryReferenceRepository<BorrowerId>,
    pub media: InMemoryReferenceRepository<MediaId>,
}

impl InMemoryCatalog {
    /// Catalog with every table empty
    pub fn new() -> Self {
        Self {
            genres: InMemoryReferenceRepository::new("genres"),
            media_types: InMemoryReferenceRepository::new("media_types"),
            languages: InMemoryReferenceRepository::new("languages"),
            nationalities: InMemoryReferenceRepository::new("nationalities"),
            media_personalities: InMemoryReferenceRepository::new("media_personalities"),
            borrowers: InMemoryReferenceRepository::new("borrowers"),
            media: InMemoryReferenceRepository::new("media"),
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}
