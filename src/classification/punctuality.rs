//! Late-arrival and early-departure flags.

use chrono::NaiveTime;

use crate::models::{AttendancePolicy, Shift};

const DAY_MINUTES: i64 = 24 * 60;

/// Punctuality flags derived from clock data against the scheduled shift.
///
/// The flags are informational; neither changes the attendance status on its
/// own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Punctuality {
    /// The clock-in was later than shift start plus the policy's grace.
    pub late_arrival: bool,
    /// The clock-out was earlier than the scheduled shift end.
    pub early_departure: bool,
}

/// Checks clock events against the shift schedule and grace period.
///
/// Missing clock events never raise a flag: a record with no clock-out yet is
/// not an early departure.
///
/// Comparisons are made in minutes from shift start rather than on raw times,
/// so shifts crossing midnight flag correctly: leaving a 22:00-06:00 shift at
/// 23:00 is an early departure, and a 00:30 arrival for it is late. A grace
/// window wrapping past midnight (a shift starting at 23:50) also compares
/// correctly.
///
/// # Example
///
/// ```
/// use attendance_engine::classification::check_punctuality;
/// use attendance_engine::models::{ActiveStatus, AttendancePolicy, Shift};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let shift = Shift {
///     id: 1,
///     name: "Day shift".to_string(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     status: ActiveStatus::Active,
///     owner: "acme".to_string(),
/// };
/// let policy = AttendancePolicy {
///     id: 1,
///     name: "Standard".to_string(),
///     grace_minutes: 15,
///     half_day_threshold_hours: Decimal::new(4, 0),
///     overtime_threshold_hours: Decimal::new(8, 0),
///     status: ActiveStatus::Active,
///     owner: "acme".to_string(),
/// };
///
/// let flags = check_punctuality(
///     Some(NaiveTime::from_hms_opt(9, 20, 0).unwrap()),
///     Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
///     &shift,
///     &policy,
/// );
/// assert!(flags.late_arrival);
/// assert!(!flags.early_departure);
/// ```
pub fn check_punctuality(
    clock_in: Option<NaiveTime>,
    clock_out: Option<NaiveTime>,
    shift: &Shift,
    policy: &AttendancePolicy,
) -> Punctuality {
    // Minutes from shift start; times more than half a day before the start
    // are read as falling after midnight.
    let offset_from_start = |t: NaiveTime| {
        let mut offset = (t - shift.start_time).num_minutes();
        if offset < -DAY_MINUTES / 2 {
            offset += DAY_MINUTES;
        }
        offset
    };

    let late_arrival = clock_in.is_some_and(|t| offset_from_start(t) > policy.grace_minutes);

    let early_departure = clock_out.is_some_and(|t| {
        let mut offset = offset_from_start(t);
        if offset < 0 {
            offset += DAY_MINUTES;
        }
        offset < shift.scheduled_minutes()
    });

    Punctuality {
        late_arrival,
        early_departure,
    }
}
