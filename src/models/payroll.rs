//! Payroll run and entry models.
//!
//! A [`PayrollRun`] covers one pay period; each [`PayrollEntry`] is the
//! snapshotted result of aggregating one employee over that period. Entries
//! are materialized values, never live views: once a run is finalized it
//! structurally refuses further entries, so later edits to attendance or
//! component definitions cannot rewrite history.
//!
//! The run is a library-level batch construct for callers that compute pay
//! for a whole roster at once. The HTTP surface only exposes per-employee
//! aggregation; it builds entries directly without wrapping them in a run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::PayPeriod;

/// Per-period attendance totals snapshotted into a payroll entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Days classified as present.
    pub present_days: u32,
    /// Days classified as absent.
    pub absent_days: u32,
    /// Days classified as half days.
    pub half_days: u32,
    /// Days classified as on leave.
    pub leave_days: u32,
    /// Days classified as holidays.
    pub holiday_days: u32,
    /// Total overtime hours across the period.
    pub overtime_hours: Decimal,
}

/// One named line in an earnings or deductions breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComponentLine {
    /// The display name of the line (e.g., "Basic salary", "Unpaid leave").
    pub name: String,
    /// The amount, rounded to 2 decimal places.
    pub amount: Decimal,
}

impl PayComponentLine {
    /// Creates a breakdown line.
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// One employee's computed pay for a run, frozen at aggregation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// The employee this entry belongs to.
    pub employee_id: u64,
    /// The pay period the entry covers.
    pub period: PayPeriod,
    /// Snapshotted attendance totals.
    pub summary: AttendanceSummary,
    /// The earnings breakdown.
    pub earnings: Vec<PayComponentLine>,
    /// The deductions breakdown.
    pub deductions: Vec<PayComponentLine>,
    /// Sum of earnings minus sum of deductions.
    pub net_pay: Decimal,
}

impl PayrollEntry {
    /// Creates the zero-valued entry used when an employee has no attendance
    /// records in the period, so payroll runs do not abort for new hires.
    pub fn zero(employee_id: u64, period: PayPeriod) -> Self {
        Self {
            employee_id,
            period,
            summary: AttendanceSummary::default(),
            earnings: Vec::new(),
            deductions: Vec::new(),
            net_pay: Decimal::ZERO,
        }
    }
}

/// Progression state of a payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Entries may still be added.
    Draft,
    /// The run is frozen; no further entries are accepted.
    Finalized,
}

/// A payroll run over one pay period.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{PayPeriod, PayrollEntry, PayrollRun};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 6, 22).unwrap(),
///     holidays: vec![],
/// };
/// let mut run = PayrollRun::new(period.clone());
/// run.push_entry(PayrollEntry::zero(42, period)).unwrap();
/// run.finalize();
/// assert!(run.is_finalized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for the run.
    pub id: Uuid,
    /// The pay period the run covers.
    pub period: PayPeriod,
    /// Whether the run is still accepting entries.
    pub status: RunStatus,
    entries: Vec<PayrollEntry>,
}

impl PayrollRun {
    /// Creates a draft run for the given period.
    pub fn new(period: PayPeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            period,
            status: RunStatus::Draft,
            entries: Vec::new(),
        }
    }

    /// Adds an entry to a draft run.
    ///
    /// Finalized runs reject new entries with [`EngineError::RunFinalized`].
    pub fn push_entry(&mut self, entry: PayrollEntry) -> EngineResult<()> {
        if self.is_finalized() {
            return Err(EngineError::RunFinalized { run_id: self.id });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Freezes the run. This transition is one-way.
    pub fn finalize(&mut self) {
        self.status = RunStatus::Finalized;
    }

    /// Returns true if the run has been finalized.
    pub fn is_finalized(&self) -> bool {
        self.status == RunStatus::Finalized
    }

    /// Returns the entries computed so far.
    pub fn entries(&self) -> &[PayrollEntry] {
        &self.entries
    }
}
