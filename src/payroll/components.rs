//! Salary component resolution into breakdown lines.

use rust_decimal::Decimal;

use crate::models::{ComponentKind, EmployeeSalary, PayComponentLine, SalaryComponent, TenantContext};

use super::round_money;

/// Resolves an employee's attached salary components into concrete lines.
///
/// Only components referenced by the salary configuration, owned by the
/// tenant, and still active are resolved. Percentage components are taken
/// against the configured basic salary. Returns the earning lines and the
/// deduction lines separately, each amount rounded to money precision.
pub fn component_lines(
    ctx: &TenantContext,
    salary: &EmployeeSalary,
    components: &[SalaryComponent],
) -> (Vec<PayComponentLine>, Vec<PayComponentLine>) {
    let mut earnings = Vec::new();
    let mut deductions = Vec::new();

    for id in &salary.component_ids {
        let Some(component) = components
            .iter()
            .find(|c| c.id == *id && ctx.owns(&c.owner) && c.is_active())
        else {
            continue;
        };

        let amount = round_money(component.amount.against(salary.basic_salary));
        if amount == Decimal::ZERO {
            continue;
        }

        let line = PayComponentLine::new(component.name.clone(), amount);
        match component.kind {
            ComponentKind::Earning => earnings.push(line),
            ComponentKind::Deduction => deductions.push(line),
        }
    }

    (earnings, deductions)
}
