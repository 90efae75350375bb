//! Existence oracles
//!
//! An oracle answers whether a referenced identifier exists in some external
//! store. Oracles are handed to `known_value` checks per call and are never
//! kept by a validator.

use std::future::Future;

use async_trait::async_trait;
use libris_domain::{DomainResult, ReferenceRepository};

/// Asynchronous existence predicate
#[async_trait]
pub trait ExistenceOracle<K>: Send + Sync
where
    K: Send + Sync,
{
    /// Whether a record keyed by `key` exists
    async fn exists(&self, key: &K) -> DomainResult<bool>;
}

/// Oracle answering from a reference repository
pub struct RepositoryOracle<'r, K: Send + Sync> {
    repository: &'r dyn ReferenceRepository<K>,
}

impl<'r, K: Send + Sync> RepositoryOracle<'r, K> {
    pub fn new(repository: &'r dyn ReferenceRepository<K>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<K> ExistenceOracle<K> for RepositoryOracle<'_, K>
where
    K: Send + Sync,
{
    async fn exists(&self, key: &K) -> DomainResult<bool> {
        self.repository.exists(key).await
    }
}

/// Oracle backed by an async closure
///
/// ```
/// use libris_domain::GenreId;
/// use libris_validation::oracle::{ExistenceOracle, FnOracle};
///
/// let oracle = FnOracle::new(|id: GenreId| async move { Ok(id.value() < 10) });
/// # futures::executor::block_on(async {
/// assert!(oracle.exists(&GenreId::new(3)).await.unwrap());
/// # });
/// ```
pub struct FnOracle<F> {
    lookup: F,
}

impl<F> FnOracle<F> {
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl<K, F, Fut> ExistenceOracle<K> for FnOracle<F>
where
    K: Clone + Send + Sync + 'static,
    F: Fn(K) -> Fut + Send + Sync,
    Fut: Future<Output = DomainResult<bool>> + Send + 'static,
{
    async fn exists(&self, key: &K) -> DomainResult<bool> {
        (self.lookup)(key.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libris_domain::{DomainError, GenreId, InMemoryReferenceRepository};

    #[tokio::test]
    async fn test_repository_oracle_delegates() {
        let repo = InMemoryReferenceRepository::with_known("genres", [GenreId::new(4)]);
        let oracle = RepositoryOracle::new(&repo);
        assert!(oracle.exists(&GenreId::new(4)).await.unwrap());
        assert!(!oracle.exists(&GenreId::new(5)).await.unwrap());
    }

    #[tokio::test]
    async fn test_fn_oracle_propagates_errors() {
        let oracle = FnOracle::new(|_: GenreId| async {
            Err(DomainError::RepositoryUnavailable {
                repository: "genres".to_string(),
                reason: "timeout".to_string(),
            })
        });
        assert!(oracle.exists(&GenreId::new(1)).await.is_err());
    }
}
