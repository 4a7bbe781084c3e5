//! Daily attendance record model.
//!
//! One [`AttendanceRecord`] exists per (employee, date) within a tenant. It is
//! created on first clock-in or by the day rollover, updated on clock-out or
//! manual edit, and never auto-deleted.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendancePolicy, Shift};

/// The classified status of one attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee worked a full day.
    Present,
    /// The employee did not clock in on a working day.
    Absent,
    /// Worked hours fell below the policy's half-day threshold.
    HalfDay,
    /// An approved leave application covers the day.
    OnLeave,
    /// The day is a declared holiday.
    Holiday,
}

/// One employee's attendance facts for a single date.
///
/// The shift and policy ids are resolved at creation time and immutable
/// thereafter, so later deactivation of either does not rewrite history.
/// Derived fields (`worked_hours`, `overtime_hours`, the punctuality flags)
/// are produced by the classifier as a pure function of the clock data plus
/// the resolved shift and policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: u64,
    /// The date of the record. Unique per employee within a tenant.
    pub date: NaiveDate,
    /// Clock-in time, if the employee clocked in.
    pub clock_in: Option<NaiveTime>,
    /// Clock-out time, if the employee clocked out.
    pub clock_out: Option<NaiveTime>,
    /// Unpaid break minutes subtracted from worked hours.
    #[serde(default)]
    pub break_minutes: i64,
    /// The classified status of the day.
    pub status: AttendanceStatus,
    /// True if the date falls on a weekend.
    pub is_weekend: bool,
    /// True if the date is a declared holiday.
    pub is_holiday: bool,
    /// The shift resolved at creation time.
    pub shift_id: u64,
    /// The attendance policy resolved at creation time.
    pub attendance_policy_id: u64,
    /// Hours worked, net of breaks, floored at zero. Includes hours that are
    /// separately tracked as overtime.
    pub worked_hours: Decimal,
    /// Hours in excess of the policy's overtime threshold.
    pub overtime_hours: Decimal,
    /// True if the clock-in was later than shift start plus grace.
    pub late_arrival: bool,
    /// True if the clock-out was earlier than shift end.
    pub early_departure: bool,
}

impl AttendanceRecord {
    /// Creates the record for a first clock-in of the day.
    ///
    /// The record starts as `Present` with no derived hours; the classifier
    /// fills in punctuality immediately and the hour fields on clock-out.
    pub fn open(
        employee_id: u64,
        date: NaiveDate,
        clock_in: NaiveTime,
        shift: &Shift,
        policy: &AttendancePolicy,
        is_weekend: bool,
        is_holiday: bool,
    ) -> Self {
        Self {
            employee_id,
            date,
            clock_in: Some(clock_in),
            clock_out: None,
            break_minutes: 0,
            status: AttendanceStatus::Present,
            is_weekend,
            is_holiday,
            shift_id: shift.id,
            attendance_policy_id: policy.id,
            worked_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            late_arrival: false,
            early_departure: false,
        }
    }

    /// Returns a copy of this record with the clock-out time set.
    ///
    /// The copy still needs to be classified; this only records the raw fact.
    pub fn with_clock_out(&self, clock_out: NaiveTime) -> Self {
        Self {
            clock_out: Some(clock_out),
            ..self.clone()
        }
    }

    /// Returns true if both clock events have been recorded.
    pub fn is_complete(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_some()
    }
}
