use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::clock::Clock;
use crate::errors::{ErrorKind, ValidationResult};
use crate::target::Target;

/// Calendar-date checks on instants
///
/// Only the date component is compared; the time of day never matters.
pub trait DateTimeValidator: Send + Sync {
    /// Current instant of the underlying clock
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date of the underlying clock
    fn today(&self) -> NaiveDate;

    fn past_date_or_today(&self, value: &DateTime<Utc>, target: Target<'_>) -> ValidationResult<()>;

    fn earlier_than_offset(
        &self,
        value: &DateTime<Utc>,
        offset: &DateTime<Utc>,
        target: Target<'_>,
    ) -> ValidationResult<()>;

    fn later_than_offset(
        &self,
        value: &DateTime<Utc>,
        offset: &DateTime<Utc>,
        target: Target<'_>,
    ) -> ValidationResult<()>;

    fn later_than_or_equal_to_offset(
        &self,
        value: &DateTime<Utc>,
        offset: &DateTime<Utc>,
        target: Target<'_>,
    ) -> ValidationResult<()>;
}

#[derive(Clone)]
pub struct StandardDateTimeValidator {
    clock: Arc<dyn Clock>,
}

impl StandardDateTimeValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl DateTimeValidator for StandardDateTimeValidator {
    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    fn past_date_or_today(&self, value: &DateTime<Utc>, target: Target<'_>) -> ValidationResult<()> {
        if self.clock.date_of(value) > self.clock.today() {
            return Err(target.violation(ErrorKind::ShouldBePastDateOrToday));
        }
        Ok(())
    }

    fn earlier_than_offset(
        &self,
        value: &DateTime<Utc>,
        offset: &DateTime<Utc>,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        let offset = self.clock.date_of(offset);
        if self.clock.date_of(value) >= offset {
            return Err(target.violation(ErrorKind::ShouldBeEarlierThanOffset { offset }));
        }
        Ok(())
    }

    fn later_than_offset(
        &self,
        value: &DateTime<Utc>,
        offset: &DateTime<Utc>,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        let offset = self.clock.date_of(offset);
        if self.clock.date_of(value) <= offset {
            return Err(target.violation(ErrorKind::ShouldBeLaterThanOffset { offset }));
        }
        Ok(())
    }

    fn later_than_or_equal_to_offset(
        &self,
        value: &DateTime<Utc>,
        offset: &DateTime<Utc>,
        target: Target<'_>,
    ) -> ValidationResult<()> {
        let offset = self.clock.date_of(offset);
        if self.clock.date_of(value) < offset {
            return Err(target.violation(ErrorKind::ShouldBeLaterThanOrEqualToOffset { offset }));
        }
        Ok(())
    }
}
