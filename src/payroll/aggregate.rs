//! Payroll aggregation over a pay period.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AttendanceRecord, EmployeeSalary, LeaveApplication, PayComponentLine, PayPeriod, PayrollEntry,
    SalaryComponent, TenantContext,
};

use super::components::component_lines;
use super::day_rate::per_day_rate;
use super::overtime_pay::overtime_amount;
use super::round_money;
use super::summary::summarize;

/// Aggregates one employee's attendance and salary configuration into a
/// payroll entry for the period.
///
/// The entry is a snapshot: every breakdown line is materialized from the
/// inputs at call time, so later edits to component definitions or attendance
/// records cannot change it.
///
/// - Records outside the period or belonging to other employees are ignored.
/// - A period with no attendance records yields the zero-valued entry, so a
///   payroll run does not abort for a new hire with no history.
/// - Earnings: basic salary, each attached earning component, and overtime.
/// - Deductions: each attached deduction component plus the pro-rata
///   unpaid-leave deduction (absent days, half days at half weight, and
///   unpaid leave days, at the per-day rate).
pub fn aggregate(
    ctx: &TenantContext,
    salary: &EmployeeSalary,
    components: &[SalaryComponent],
    records: &[AttendanceRecord],
    leaves: &[LeaveApplication],
    period: &PayPeriod,
) -> PayrollEntry {
    let in_period: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|r| r.employee_id == salary.employee_id && period.contains_date(r.date))
        .collect();

    if in_period.is_empty() {
        debug!(
            employee_id = salary.employee_id,
            "no attendance in period, producing zero entry"
        );
        return PayrollEntry::zero(salary.employee_id, period.clone());
    }

    let owned: Vec<AttendanceRecord> = in_period.into_iter().cloned().collect();
    let period_summary = summarize(&owned, leaves);

    let rate = per_day_rate(salary.basic_salary, period.working_days());
    let unpaid_deduction = round_money(period_summary.unpaid_days * rate);
    let overtime = overtime_amount(
        period_summary.summary.overtime_hours,
        rate,
        salary.standard_daily_hours,
        salary.overtime_multiplier,
    );

    let (component_earnings, component_deductions) = component_lines(ctx, salary, components);

    let mut earnings = Vec::with_capacity(component_earnings.len() + 2);
    earnings.push(PayComponentLine::new(
        "Basic salary",
        round_money(salary.basic_salary),
    ));
    earnings.extend(component_earnings);
    if overtime > Decimal::ZERO {
        earnings.push(PayComponentLine::new("Overtime", overtime));
    }

    let mut deductions = component_deductions;
    if unpaid_deduction > Decimal::ZERO {
        deductions.push(PayComponentLine::new("Unpaid leave", unpaid_deduction));
    }

    let earnings_total: Decimal = earnings.iter().map(|l| l.amount).sum();
    let deductions_total: Decimal = deductions.iter().map(|l| l.amount).sum();
    let net_pay = earnings_total - deductions_total;

    PayrollEntry {
        employee_id: salary.employee_id,
        period: period.clone(),
        summary: period_summary.summary,
        earnings,
        deductions,
        net_pay,
    }
}
