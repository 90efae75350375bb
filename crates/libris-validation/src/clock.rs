//! Time source for date checks
//!
//! Date checks compare calendar dates only; the clock decides which calendar
//! (UTC or the host's local zone) an instant falls on.

use chrono::{DateTime, Duration, Local, NaiveDate, Offset, TimeZone, Utc};
use libris_config::TimeBasis;

/// Source of "now" and of calendar dates
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date an instant falls on
    fn date_of(&self, instant: &DateTime<Utc>) -> NaiveDate {
        instant.date_naive()
    }

    /// Current calendar date
    fn today(&self) -> NaiveDate {
        self.date_of(&self.now())
    }
}

/// Wall clock of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    basis: TimeBasis,
}

impl SystemClock {
    pub fn new(basis: TimeBasis) -> Self {
        Self { basis }
    }

    pub fn basis(&self) -> TimeBasis {
        self.basis
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn date_of(&self, instant: &DateTime<Utc>) -> NaiveDate {
        match self.basis {
            TimeBasis::Utc => instant.date_naive(),
            TimeBasis::Local => {
                let utc = instant.naive_utc();
                let offset = Local.offset_from_utc_datetime(&utc).fix();
                // Instants at the edge of the representable range keep their UTC date.
                utc.checked_add_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
                    .map(|local| local.date())
                    .unwrap_or_else(|| instant.date_naive())
            }
        }
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Noon UTC on the given date
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        Self {
            now: Utc.from_utc_datetime(&noon),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
