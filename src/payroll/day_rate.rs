//! Per-day base rate derivation.

use rust_decimal::Decimal;

/// Derives the per-day base rate from basic salary over the period divisor.
///
/// The divisor is the period's day count (see
/// [`PayPeriod::working_days`](crate::models::PayPeriod::working_days)).
/// A non-positive divisor yields zero rather than dividing by zero.
///
/// # Example
///
/// ```
/// use attendance_engine::payroll::per_day_rate;
/// use rust_decimal::Decimal;
///
/// let rate = per_day_rate(Decimal::new(3000, 0), 22);
/// // 3000 / 22 = 136.3636...
/// assert_eq!(rate.round_dp(2), Decimal::new(13636, 2));
/// ```
pub fn per_day_rate(basic_salary: Decimal, working_days: i64) -> Decimal {
    if working_days <= 0 {
        return Decimal::ZERO;
    }
    basic_salary / Decimal::from(working_days)
}
