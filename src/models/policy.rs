//! Attendance policy model.
//!
//! An [`AttendancePolicy`] is a named ruleset defining the late-arrival grace
//! period and the half-day and overtime thresholds the classifier applies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ActiveStatus;

/// A named attendance ruleset owned by a tenant.
///
/// Policies follow the same lifecycle as shifts: referenced policies are
/// deactivated rather than deleted so historical attendance records can still
/// resolve them.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{ActiveStatus, AttendancePolicy};
/// use rust_decimal::Decimal;
///
/// let policy = AttendancePolicy {
///     id: 1,
///     name: "Standard".to_string(),
///     grace_minutes: 15,
///     half_day_threshold_hours: Decimal::new(4, 0),
///     overtime_threshold_hours: Decimal::new(8, 0),
///     status: ActiveStatus::Active,
///     owner: "acme".to_string(),
/// };
/// assert!(policy.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePolicy {
    /// Unique identifier for the policy within the tenant.
    pub id: u64,
    /// Human-readable name (e.g., "Standard").
    pub name: String,
    /// Minutes after the shift start before a clock-in counts as late.
    pub grace_minutes: i64,
    /// Worked hours below this threshold reclassify the day as a half day.
    pub half_day_threshold_hours: Decimal,
    /// Worked hours above this threshold accrue as overtime.
    pub overtime_threshold_hours: Decimal,
    /// Lifecycle status; only active policies participate in default resolution.
    pub status: ActiveStatus,
    /// The owning tenant id.
    pub owner: String,
}

impl AttendancePolicy {
    /// Returns true if the policy is active.
    pub fn is_active(&self) -> bool {
        self.status == ActiveStatus::Active
    }
}
