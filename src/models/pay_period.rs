//! Pay period and holiday models.
//!
//! A [`PayPeriod`] defines the date range a payroll run covers, together with
//! the declared holidays that fall inside it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A declared holiday within a pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "New Year's Day").
    pub name: String,
}

/// A pay period with its date range and declared holidays.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Holiday, PayPeriod};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 6, 22).unwrap(),
///     holidays: vec![],
/// };
/// assert_eq!(period.working_days(), 22);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 6, 10).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Holidays that fall within this pay period.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if a given date is a declared holiday within this pay period.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// Returns the number of days in the period, inclusive of both ends.
    ///
    /// This is the divisor used for the per-day base rate. No business-day
    /// calendar is applied beyond what attendance records already encode via
    /// their weekend and holiday flags.
    pub fn working_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Iterates over every date in the period, in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |d| *d <= self.end_date)
    }
}
