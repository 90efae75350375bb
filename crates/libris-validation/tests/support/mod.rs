//! Test doubles shared by the integration tests
//!
//! `RecordingValidators` wraps every standard primitive validator, logs each
//! call with its arguments and then delegates, so tests can assert both on
//! the outcome and on exactly which checks ran.

#![allow(dead_code)]

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;
use regex::Regex;

use libris_domain::{
    GenreId, InMemoryCatalog, LanguageId, MediaPersonalityId, MediaTypeId, NationalityId,
};
use libris_validation::clock::{Clock, FixedClock};
use libris_validation::context::{ValidatorContext, ValidatorSet};
use libris_validation::errors::ValidationResult;
use libris_validation::oracle::ExistenceOracle;
use libris_validation::primitives::*;
use libris_validation::target::Target;

/// One primitive validator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    NotNullOrWhitespace { field: String },
    MinLength { field: String, min: usize, inclusive_of_blank: bool },
    MaxLength { field: String, max: usize, inclusive_of_blank: bool },
    MatchPattern { field: String, pattern: String },
    Between { field: String, value: i32, min: i32, max: i32 },
    PastDateOrToday { field: String, value: NaiveDate },
    EarlierThanOffset { field: String, value: NaiveDate, offset: NaiveDate },
    LaterThanOffset { field: String, value: NaiveDate, offset: NaiveDate },
    LaterThanOrEqualToOffset { field: String, value: NaiveDate, offset: NaiveDate },
    MinItems { field: String, min: usize },
    MaxItems { field: String, max: usize },
    NotNull { field: String },
    KnownValue { field: String, value: Option<String> },
}

impl Call {
    pub fn field(&self) -> &str {
        match self {
            Call::NotNullOrWhitespace { field }
            | Call::MinLength { field, .. }
            | Call::MaxLength { field, .. }
            | Call::MatchPattern { field, .. }
            | Call::Between { field, .. }
            | Call::PastDateOrToday { field, .. }
            | Call::EarlierThanOffset { field, .. }
            | Call::LaterThanOffset { field, .. }
            | Call::LaterThanOrEqualToOffset { field, .. }
            | Call::MinItems { field, .. }
            | Call::MaxItems { field, .. }
            | Call::NotNull { field }
            | Call::KnownValue { field, .. } => field,
        }
    }

    pub fn is_date_check(&self) -> bool {
        matches!(
            self,
            Call::PastDateOrToday { .. }
                | Call::EarlierThanOffset { .. }
                | Call::LaterThanOffset { .. }
                | Call::LaterThanOrEqualToOffset { .. }
        )
    }

    pub fn is_known_value(&self) -> bool {
        matches!(self, Call::KnownValue { .. })
    }

    pub fn is_not_null(&self) -> bool {
        matches!(self, Call::NotNull { .. })
    }
}

/// Shared, ordered log of calls
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn record(&self, call: Call) {
        self.0.lock().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().clone()
    }

    pub fn for_field(&self, field: &str) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.field() == field).collect()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.0.lock().iter().filter(|c| predicate(c)).count()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

/// Wraps a standard validator and logs every call before delegating
pub struct Recording<T> {
    inner: T,
    log: CallLog,
}

fn field(target: &Target<'_>) -> String {
    target.validating_field().to_string()
}

impl StringValidator for Recording<StandardStringValidator> {
    fn not_null_or_whitespace(&self, value: Option<&str>, target: Target<'_>) -> ValidationResult<()> {
        self.log.record(Call::NotNullOrWhitespace { field: field(&target) });
        self.inner.not_null_or_whitespace(value, target)
    }

    fn min_length(
        &self,
        value: Option<&str>,
        min: usize,
        inclusive_of_blank: bool,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        self.log.record(Call::MinLength {
            field: field(&target),
            min,
            inclusive_of_blank,
        });
        self.inner.min_length(value, min, inclusive_of_blank, target)
    }

    fn max_length(
        &self,
        value: Option<&str>,
        max: usize,
        inclusive_of_blank: bool,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        self.log.record(Call::MaxLength {
            field: field(&target),
            max,
            inclusive_of_blank,
        });
        self.inner.max_length(value, max, inclusive_of_blank, target)
    }

    fn match_pattern(
        &self,
        value: Option<&str>,
        pattern: &Regex,
        inclusive_of_blank: bool,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        self.log.record(Call::MatchPattern {
            field: field(&target),
            pattern: pattern.as_str().to_string(),
        });
        self.inner.match_pattern(value, pattern, inclusive_of_blank, target)
    }
}

impl IntegerValidator for Recording<StandardIntegerValidator> {
    fn between(&self, value: i32, min: i32, max: i32, target: Target<'_>) -> ValidationResult<()> {
        self.log.record(Call::Between {
            field: field(&target),
            value,
            min,
            max,
        });
        self.inner.between(value, min, max, target)
    }
}

impl DateTimeValidator for Recording<StandardDateTimeValidator> {
    fn now(&self) -> DateTime<Utc> {
        self.inner.now()
    }

    fn today(&self) -> NaiveDate {
        self.inner.today()
    }

    fn past_date_or_today(&self, value: &DateTime<Utc>, target: Target<'_>) -> ValidationResult<()> {
        self.log.record(Call::PastDateOrToday {
            field: field(&target),
            value: value.date_naive(),
        });
        self.inner.past_date_or_today(value, target)
    }

    fn earlier_than_offset(
        &self,
        value: &DateTime<Utc>,
        offset: &DateTime<Utc>,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        self.log.record(Call::EarlierThanOffset {
            field: field(&target),
            value: value.date_naive(),
            offset: offset.date_naive(),
        });
        self.inner.earlier_than_offset(value, offset, target)
    }

    fn later_than_offset(
        &self,
        value: &DateTime<Utc>,
        offset: &DateTime<Utc>,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        self.log.record(Call::LaterThanOffset {
            field: field(&target),
            value: value.date_naive(),
            offset: offset.date_naive(),
        });
        self.inner.later_than_offset(value, offset, target)
    }

    fn later_than_or_equal_to_offset(
        &self,
        value: &DateTime<Utc>,
        offset: &DateTime<Utc>,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        self.log.record(Call::LaterThanOrEqualToOffset {
            field: field(&target),
            value: value.date_naive(),
            offset: offset.date_naive(),
        });
        self.inner.later_than_or_equal_to_offset(value, offset, target)
    }
}

impl EnumerableValidator for Recording<StandardEnumerableValidator> {
    fn min_items<T>(&self, value: Option<&[T]>, min: usize, target: Target<'_>) -> ValidationResult<()> {
        self.log.record(Call::MinItems { field: field(&target), min });
        self.inner.min_items(value, min, target)
    }

    fn max_items<T>(&self, value: Option<&[T]>, max: usize, target: Target<'_>) -> ValidationResult<()> {
        self.log.record(Call::MaxItems { field: field(&target), max });
        self.inner.max_items(value, max, target)
    }
}

#[async_trait]
impl ObjectValidator for Recording<StandardObjectValidator> {
    fn not_null<T: ?Sized>(&self, value: Option<&T>, target: Target<'_>) -> ValidationResult<()> {
        self.log.record(Call::NotNull { field: field(&target) });
        self.inner.not_null(value, target)
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
        self.log.record(Call::KnownValue {
            field: field(&target),
            value: value.map(|v| format!("{:?}", v)),
        });
        self.inner.known_value(value, oracle, allow_null, target).await
    }
}

/// Validator set whose every call lands in one [`CallLog`]
pub struct RecordingValidators {
    string: Recording<StandardStringValidator>,
    integer: Recording<StandardIntegerValidator>,
    date_time: Recording<StandardDateTimeValidator>,
    enumerable: Recording<StandardEnumerableValidator>,
    object: Recording<StandardObjectValidator>,
    log: CallLog,
}

impl RecordingValidators {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let log = CallLog::default();
        Self {
            string: Recording {
                inner: StandardStringValidator,
                log: log.clone(),
            },
            integer: Recording {
                inner: StandardIntegerValidator,
                log: log.clone(),
            },
            date_time: Recording {
                inner: StandardDateTimeValidator::new(clock),
                log: log.clone(),
            },
            enumerable: Recording {
                inner: StandardEnumerableValidator,
                log: log.clone(),
            },
            object: Recording {
                inner: StandardObjectValidator,
                log: log.clone(),
            },
            log,
        }
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl ValidatorSet for RecordingValidators {
    type String = Recording<StandardStringValidator>;
    type Integer = Recording<StandardIntegerValidator>;
    type DateTime = Recording<StandardDateTimeValidator>;
    type Enumerable = Recording<StandardEnumerableValidator>;
    type Object = Recording<StandardObjectValidator>;

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

/// Fixed "now" shared by the tests: 2024-05-20 12:00 UTC
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap()
}

pub fn days_from_now(days: i64) -> DateTime<Utc> {
    now() + Duration::days(days)
}

/// Recording context on the fixed clock
pub fn recording_context() -> ValidatorContext<RecordingValidators> {
    ValidatorContext::with_validators(RecordingValidators::new(Arc::new(FixedClock::new(now()))))
}

/// Catalog knowing the given personalities plus a few category codes
pub fn catalog_with_personalities(ids: &[MediaPersonalityId]) -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    for code in 1..=10 {
        catalog.genres.insert(GenreId::new(code));
        catalog.media_types.insert(MediaTypeId::new(code));
        catalog.languages.insert(LanguageId::new(code));
        catalog.nationalities.insert(NationalityId::new(code));
    }
    for id in ids {
        catalog.media_personalities.insert(*id);
    }
    catalog
}
