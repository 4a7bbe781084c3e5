//! Work shift template model.
//!
//! A [`Shift`] is a named work-hours template (start/end time) assignable to
//! employees. Unlike a timesheet entry it carries no date; the attendance
//! record for a day references the shift it was classified against.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::ActiveStatus;

/// A named work-hours template owned by a tenant.
///
/// Shifts are created by HR admins and are referenced by attendance records.
/// A referenced shift must never be deleted; it is deactivated instead so
/// historical records can still resolve it by id.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{ActiveStatus, Shift};
/// use chrono::NaiveTime;
///
/// let shift = Shift {
///     id: 1,
///     name: "Day shift".to_string(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     status: ActiveStatus::Active,
///     owner: "acme".to_string(),
/// };
/// assert!(shift.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift within the tenant.
    pub id: u64,
    /// Human-readable name (e.g., "Day shift").
    pub name: String,
    /// The scheduled start time.
    pub start_time: NaiveTime,
    /// The scheduled end time. An end time before the start time means the
    /// shift crosses midnight.
    pub end_time: NaiveTime,
    /// Lifecycle status; only active shifts participate in default resolution.
    pub status: ActiveStatus,
    /// The owning tenant id.
    pub owner: String,
}

impl Shift {
    /// Returns true if the shift is active.
    pub fn is_active(&self) -> bool {
        self.status == ActiveStatus::Active
    }

    /// Returns the scheduled length of the shift in minutes.
    ///
    /// An end time at or before the start time is treated as crossing
    /// midnight.
    pub fn scheduled_minutes(&self) -> i64 {
        let span = (self.end_time - self.start_time).num_minutes();
        if span <= 0 { span + 24 * 60 } else { span }
    }
}
