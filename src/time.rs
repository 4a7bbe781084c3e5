//! Injected time source for attendance operations.
//!
//! Clock-in and day-rollover decisions depend on "now" and "today". To keep
//! classification testable these are obtained through the [`Clock`] trait
//! rather than read from the system directly.

use chrono::{NaiveDate, NaiveDateTime, Utc};

/// A source of the current date and time.
///
/// Handlers and rollover jobs take a `Clock` so that tests can pin time to a
/// known instant. Classification itself is a pure function of its inputs and
/// never consults a clock.
pub trait Clock: Send + Sync {
    /// Returns the current date and time.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The production clock backed by the system time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// A clock pinned to a fixed instant, for tests and replays.
///
/// # Example
///
/// ```
/// use attendance_engine::time::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let clock = FixedClock::at(
///     NaiveDate::from_ymd_opt(2026, 6, 1)
///         .unwrap()
///         .and_hms_opt(9, 0, 0)
///         .unwrap(),
/// );
/// assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock frozen at the given instant.
    pub fn at(instant: NaiveDateTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}
