//! Day rollover for dates with no clock events.
//!
//! The classifier only runs on actual clock events, so absent days are marked
//! by a rollover pass over each elapsed date. The rollover synthesizes records
//! for holidays, approved leave, and absences; weekends produce no record.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::{
    AttendancePolicy, AttendanceRecord, AttendanceStatus, Employee, LeaveApplication, Shift,
    TenantContext,
};

/// Returns true if the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Produces the attendance record for a date with no clock-in, if any.
///
/// Precedence: weekends produce no record at all; declared holidays become
/// `Holiday`; days covered by an approved leave application become `OnLeave`;
/// anything else becomes `Absent`. The shift and policy ids are stamped from
/// the resolved pair so the record is self-describing like a clocked one.
///
/// The caller is expected to skip dates that already have a record. An
/// employee outside the context's tenant produces no record.
pub fn rollover(
    ctx: &TenantContext,
    employee: &Employee,
    date: NaiveDate,
    shift: &Shift,
    policy: &AttendancePolicy,
    leaves: &[LeaveApplication],
    is_holiday: bool,
) -> Option<AttendanceRecord> {
    if !ctx.owns(&employee.owner) {
        return None;
    }
    if is_weekend(date) {
        return None;
    }

    let on_leave = leaves
        .iter()
        .any(|l| l.employee_id == employee.id && l.is_approved() && l.covers(date));

    let status = if is_holiday {
        AttendanceStatus::Holiday
    } else if on_leave {
        AttendanceStatus::OnLeave
    } else {
        AttendanceStatus::Absent
    };

    Some(AttendanceRecord {
        employee_id: employee.id,
        date,
        clock_in: None,
        clock_out: None,
        break_minutes: 0,
        status,
        is_weekend: false,
        is_holiday,
        shift_id: shift.id,
        attendance_policy_id: policy.id,
        worked_hours: Decimal::ZERO,
        overtime_hours: Decimal::ZERO,
        late_arrival: false,
        early_departure: false,
    })
}
