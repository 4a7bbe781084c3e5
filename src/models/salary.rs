//! Salary configuration models.
//!
//! Salary components are a discriminated union resolved once into a concrete
//! breakdown at aggregation time, rather than a late-bound attribute bag, so
//! a payroll entry snapshots the amounts it was computed from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ActiveStatus;

/// Whether a component adds to or subtracts from pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Added to the earnings breakdown.
    Earning,
    /// Added to the deductions breakdown.
    Deduction,
}

/// How a component's amount is calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "calculation_type", content = "value", rename_all = "snake_case")]
pub enum ComponentAmount {
    /// A fixed amount per pay period.
    Fixed(Decimal),
    /// A percentage of the employee's basic salary (e.g., `10` means 10%).
    PercentOfBasic(Decimal),
}

impl ComponentAmount {
    /// Resolves the concrete amount against a basic salary.
    pub fn against(&self, basic_salary: Decimal) -> Decimal {
        match self {
            ComponentAmount::Fixed(amount) => *amount,
            ComponentAmount::PercentOfBasic(pct) => basic_salary * *pct / Decimal::new(100, 0),
        }
    }
}

/// A reusable named earning or deduction rule owned by a tenant.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{ActiveStatus, ComponentAmount, ComponentKind, SalaryComponent};
/// use rust_decimal::Decimal;
///
/// let component = SalaryComponent {
///     id: 1,
///     name: "House rent allowance".to_string(),
///     kind: ComponentKind::Earning,
///     amount: ComponentAmount::PercentOfBasic(Decimal::new(10, 0)),
///     status: ActiveStatus::Active,
///     owner: "acme".to_string(),
/// };
/// assert_eq!(
///     component.amount.against(Decimal::new(3000, 0)),
///     Decimal::new(300, 0)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponent {
    /// Unique identifier for the component within the tenant.
    pub id: u64,
    /// The display name used in breakdown lines.
    pub name: String,
    /// Whether this is an earning or a deduction.
    pub kind: ComponentKind,
    /// How the amount is calculated.
    pub amount: ComponentAmount,
    /// Lifecycle status; inactive components are skipped at aggregation time.
    pub status: ActiveStatus,
    /// The owning tenant id.
    pub owner: String,
}

impl SalaryComponent {
    /// Returns true if the component is active.
    pub fn is_active(&self) -> bool {
        self.status == ActiveStatus::Active
    }
}

/// An employee's salary configuration.
///
/// At most one active configuration exists per employee; a zero-salary
/// placeholder stands in when none has been set up yet, so payroll runs do
/// not abort for new hires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSalary {
    /// The employee this configuration belongs to.
    pub employee_id: u64,
    /// The basic salary for one pay period.
    pub basic_salary: Decimal,
    /// Ids of the salary components attached to this employee.
    #[serde(default)]
    pub component_ids: Vec<u64>,
    /// Multiplier applied to the derived hourly rate for overtime pay.
    pub overtime_multiplier: Decimal,
    /// Hours in a standard working day, used to convert the per-day rate to
    /// an hourly overtime base.
    pub standard_daily_hours: Decimal,
    /// Whether this configuration is the employee's active one.
    pub is_active: bool,
}

impl EmployeeSalary {
    /// Creates the zero-salary placeholder for an employee with no
    /// configuration yet.
    pub fn placeholder(employee_id: u64) -> Self {
        Self {
            employee_id,
            basic_salary: Decimal::ZERO,
            component_ids: Vec::new(),
            overtime_multiplier: Decimal::ONE,
            standard_daily_hours: Decimal::new(8, 0),
            is_active: true,
        }
    }
}
