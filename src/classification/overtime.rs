//! Overtime split against the policy threshold.

use rust_decimal::Decimal;

/// The split of worked hours into the base portion and the overtime excess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvertimeSplit {
    /// Hours up to the threshold.
    pub base_hours: Decimal,
    /// Hours in excess of the threshold. Zero when under or at the threshold.
    pub overtime_hours: Decimal,
}

/// Splits worked hours at the overtime threshold.
///
/// Overtime is tracked separately and never folded back into the base-pay
/// hours. The half-day decision elsewhere uses the pre-split worked total,
/// not `base_hours`.
///
/// # Examples
///
/// ```
/// use attendance_engine::classification::split_overtime;
/// use rust_decimal::Decimal;
///
/// let split = split_overtime(Decimal::new(10, 0), Decimal::new(8, 0));
/// assert_eq!(split.base_hours, Decimal::new(8, 0));
/// assert_eq!(split.overtime_hours, Decimal::new(2, 0));
/// ```
pub fn split_overtime(worked_hours: Decimal, threshold: Decimal) -> OvertimeSplit {
    if worked_hours > threshold {
        OvertimeSplit {
            base_hours: threshold,
            overtime_hours: worked_hours - threshold,
        }
    } else {
        OvertimeSplit {
            base_hours: worked_hours,
            overtime_hours: Decimal::ZERO,
        }
    }
}
