use std::fmt;

use async_trait::async_trait;
use tracing::trace;

use crate::errors::{ErrorKind, ValidationError, ValidationResult};
use crate::oracle::ExistenceOracle;
use crate::target::Target;

/// Presence and referential checks
#[async_trait]
pub trait ObjectValidator: Send + Sync {
    fn not_null<T: ?Sized>(&self, value: Option<&T>, target: Target<'_>) -> ValidationResult<()>;

    /// Ask `oracle` whether `value` exists
    ///
    /// A null value fails with `ShouldNotBeNull` unless `allow_null` is set,
    /// in which case it passes without consulting the oracle. Oracle failures
    /// come back as [`ValidationError::Lookup`].
    async fn known_value<K, O>(
        &self,
        value: Option<&K>,
        oracle: &O,
        allow_null: bool,
        target: Target<'_>,
    ) -> ValidationResult<()>
    where
        K: fmt::Debug + Send + Sync,
        O: ExistenceOracle<K> + ?Sized;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardObjectValidator;

#[async_trait]
impl ObjectValidator for StandardObjectValidator {
    fn not_null<T: ?Sized>(&self, value: Option<&T>, target: Target<'_>) -> ValidationResult<()> {
        match value {
            Some(_) => Ok(()),
            None => Err(target.violation(ErrorKind::ShouldNotBeNull)),
        }
    }

    async fn known_value<K, O>(
        &self,
        value: Option<&K>,
        oracle: &O,
        allow_null: bool,
        target: Target<'_>,
    ) -> ValidationResult<()>
    where
        K: fmt::Debug + Send + Sync,
        O: ExistenceOracle<K> + ?Sized,
    {
        let Some(key) = value else {
            if allow_null {
                return Ok(());
            }
            return Err(target.violation(ErrorKind::ShouldNotBeNull));
        };

        trace!(
            validating_type = target.validating_type(),
            validating_field = target.validating_field(),
            ?key,
            "existence lookup"
        );
        match oracle.exists(key).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(target.violation(ErrorKind::ShouldBeKnownValue)),
            Err(source) => Err(ValidationError::Lookup {
                validating_type: target.validating_type().to_string(),
                validating_field: target.validating_field().to_string(),
                source,
            }),
        }
    }
}
