//! Validator context
//!
//! The context threads the primitive validators through a chain of rule
//! functions. It holds no error list and no per-call state besides the
//! validators themselves, so one is created per validation call.

use std::fmt;
use std::sync::Arc;

use libris_config::ValidationConfig;

use crate::clock::{Clock, SystemClock};
use crate::primitives::*;

/// One implementation per primitive validator kind
pub trait ValidatorSet: Send + Sync {
    type String: StringValidator;
    type Integer: IntegerValidator;
    type DateTime: DateTimeValidator;
    type Enumerable: EnumerableValidator;
    type Object: ObjectValidator;

    fn string(&self) -> &Self::String;
    fn integer(&self) -> &Self::Integer;
    fn date_time(&self) -> &Self::DateTime;
    fn enumerable(&self) -> &Self::Enumerable;
    fn object(&self) -> &Self::Object;
}

/// Production validators
#[derive(Clone)]
pub struct StandardValidators {
    string: StandardStringValidator,
    integer: StandardIntegerValidator,
    date_time: StandardDateTimeValidator,
    enumerable: StandardEnumerableValidator,
    object: StandardObjectValidator,
}

impl StandardValidators {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            string: StandardStringValidator,
            integer: StandardIntegerValidator,
            date_time: StandardDateTimeValidator::new(clock),
            enumerable: StandardEnumerableValidator,
            object: StandardObjectValidator,
        }
    }
}

impl Default for StandardValidators {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock::default()))
    }
}

impl ValidatorSet for StandardValidators {
    type String = StandardStringValidator;
    type Integer = StandardIntegerValidator;
    type DateTime = StandardDateTimeValidator;
    type Enumerable = StandardEnumerableValidator;
    type Object = StandardObjectValidator;

    fn string(&self) -> &Self::String {
        &self.string
    }

    fn integer(&self) -> &Self::Integer {
        &self.integer
    }

    fn date_time(&self) -> &Self::DateTime {
        &self.date_time
    }

    fn enumerable(&self) -> &Self::Enumerable {
        &self.enumerable
    }

    fn object(&self) -> &Self::Object {
        &self.object
    }
}

/// Per-call access to the primitive validators
///
/// Rule functions take the context by reference and hand the same reference
/// back on success, so calls chain:
///
/// ```
/// use libris_validation::{rules, ValidatorContext};
///
/// # futures::executor::block_on(async {
/// let ctx = ValidatorContext::new();
/// let returned = rules::validate_title(&ctx, "Kongens Fald", "BookCommand", "Title")
///     .await
///     .unwrap();
/// assert!(std::ptr::eq(returned, &ctx));
/// # });
/// ```
pub struct ValidatorContext<V = StandardValidators> {
    validators: V,
}

impl ValidatorContext<StandardValidators> {
    /// Context on the system clock with UTC dates
    pub fn new() -> Self {
        Self::with_validators(StandardValidators::default())
    }

    /// Context whose date checks use `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_validators(StandardValidators::new(clock))
    }

    /// Context on the system clock with the configured time basis
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::with_clock(Arc::new(SystemClock::new(config.time_basis)))
    }
}

impl<V> fmt::Debug for ValidatorContext<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorContext").finish_non_exhaustive()
    }
}

impl Default for ValidatorContext<StandardValidators> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ValidatorSet> ValidatorContext<V> {
    /// Context over a custom validator set
    pub fn with_validators(validators: V) -> Self {
        Self { validators }
    }

    pub fn validators(&self) -> &V {
        &self.validators
    }

    pub fn string(&self) -> &V::String {
        self.validators.string()
    }

    pub fn integer(&self) -> &V::Integer {
        self.validators.integer()
    }

    pub fn date_time(&self) -> &V::DateTime {
        self.validators.date_time()
    }

    pub fn enumerable(&self) -> &V::Enumerable {
        self.validators.enumerable()
    }

    pub fn object(&self) -> &V::Object {
        self.validators.object()
    }
}
