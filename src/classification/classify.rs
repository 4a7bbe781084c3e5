//! Attendance classification.

use rust_decimal::Decimal;

use crate::models::{AttendancePolicy, AttendanceRecord, AttendanceStatus, Shift};

use super::punctuality::check_punctuality;
use super::split_overtime;
use super::worked_hours;

/// Classifies an attendance record against its resolved shift and policy.
///
/// Classification is a pure function of the record's clock data plus the
/// shift and policy: it returns a new record with the derived fields filled
/// in and never consults a clock. Re-running it on unchanged inputs yields an
/// identical result.
///
/// Rules applied, in order:
/// - worked hours = clock-out minus clock-in minus breaks, floored at zero;
/// - late-arrival and early-departure flags from the shift schedule and
///   grace period (flags never change the status by themselves);
/// - overtime hours = excess of worked hours over the policy threshold,
///   tracked separately from worked hours;
/// - half-day reclassification when a completed day's worked hours fall
///   below the policy threshold. The check uses the full pre-split worked
///   total.
///
/// Days with no clock-in (absent, leave, holiday) are produced by the day
/// rollover, not by this function; a record without a clock-in is returned
/// unchanged.
pub fn classify(
    record: &AttendanceRecord,
    shift: &Shift,
    policy: &AttendancePolicy,
) -> AttendanceRecord {
    let Some(clock_in) = record.clock_in else {
        return record.clone();
    };

    let mut out = record.clone();

    let flags = check_punctuality(record.clock_in, record.clock_out, shift, policy);
    out.late_arrival = flags.late_arrival;
    out.early_departure = flags.early_departure;

    match record.clock_out {
        Some(clock_out) => {
            let worked = worked_hours(clock_in, clock_out, record.break_minutes);
            let split = split_overtime(worked, policy.overtime_threshold_hours);

            out.worked_hours = worked;
            out.overtime_hours = split.overtime_hours;
            out.status = if worked < policy.half_day_threshold_hours {
                AttendanceStatus::HalfDay
            } else {
                AttendanceStatus::Present
            };
        }
        None => {
            // Clock-out still pending: nothing derivable beyond punctuality.
            out.worked_hours = Decimal::ZERO;
            out.overtime_hours = Decimal::ZERO;
            out.status = AttendanceStatus::Present;
        }
    }

    out
}
