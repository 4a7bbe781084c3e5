//! Overtime pay derivation.

use rust_decimal::Decimal;

use super::round_money;

/// Computes the overtime amount for a period.
///
/// The hourly overtime base is the per-day rate divided by the standard
/// daily hours; the configured multiplier is applied on top. Overtime hours
/// were already split out of base worked hours by the classifier, so this
/// amount is additive and never double-counts base pay.
///
/// # Example
///
/// ```
/// use attendance_engine::payroll::overtime_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = overtime_amount(
///     Decimal::from_str("4").unwrap(),      // overtime hours
///     Decimal::from_str("160").unwrap(),    // per-day rate
///     Decimal::from_str("8").unwrap(),      // standard daily hours
///     Decimal::from_str("1.5").unwrap(),    // multiplier
/// );
/// // 4 * (160 / 8) * 1.5 = 120
/// assert_eq!(amount, Decimal::from_str("120.00").unwrap());
/// ```
pub fn overtime_amount(
    overtime_hours: Decimal,
    per_day_rate: Decimal,
    standard_daily_hours: Decimal,
    multiplier: Decimal,
) -> Decimal {
    if overtime_hours <= Decimal::ZERO || standard_daily_hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let hourly_rate = per_day_rate / standard_daily_hours;
    round_money(overtime_hours * hourly_rate * multiplier)
}
