//! Worked hours computation from raw clock data.

use chrono::NaiveTime;
use rust_decimal::Decimal;

/// Computes hours worked between a clock-in and a clock-out, net of breaks.
///
/// A clock-out earlier than the clock-in is treated as a crossing of
/// midnight (overnight shifts carry their clock-out on the next calendar
/// day). The result is floored at zero so a break longer than the worked
/// span never produces negative hours.
///
/// # Examples
///
/// ```
/// use attendance_engine::classification::worked_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let clock_in = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let clock_out = NaiveTime::from_hms_opt(17, 30, 0).unwrap();
/// assert_eq!(worked_hours(clock_in, clock_out, 30), Decimal::new(80, 1)); // 8.0
/// ```
pub fn worked_hours(clock_in: NaiveTime, clock_out: NaiveTime, break_minutes: i64) -> Decimal {
    let mut span_minutes = (clock_out - clock_in).num_minutes();
    if span_minutes < 0 {
        // Overnight: clock-out belongs to the next day.
        span_minutes += 24 * 60;
    }

    let worked_minutes = span_minutes - break_minutes;
    if worked_minutes <= 0 {
        return Decimal::ZERO;
    }

    Decimal::from(worked_minutes) / Decimal::from(60)
}
