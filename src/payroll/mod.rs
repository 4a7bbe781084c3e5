//! Payroll aggregation logic.
//!
//! This module combines per-day attendance classifications with an employee's
//! salary configuration into a snapshotted payroll entry: the per-day base
//! rate, the unpaid-day deduction, overtime pay, and the resolved earnings
//! and deductions breakdowns.

mod aggregate;
mod components;
mod day_rate;
mod overtime_pay;
mod summary;

pub use aggregate::aggregate;
pub use components::component_lines;
pub use day_rate::per_day_rate;
pub use overtime_pay::overtime_amount;
pub use summary::{PeriodSummary, summarize};

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimal places, midpoint away from zero.
///
/// All breakdown lines pass through this before landing in a payroll entry.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
