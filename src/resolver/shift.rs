//! Shift resolution for an employee.

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Shift, TenantContext};

/// Resolves the shift applicable to an employee.
///
/// An employee-level assignment wins and is honored regardless of the shift's
/// active status, since the assignment may be a historical reference.
/// Without an assignment, the tenant's active shift with the lowest id is the
/// default; the explicit ordering keeps resolution deterministic when several
/// defaults are active at once.
///
/// Shifts owned by other tenants are never considered.
///
/// # Errors
///
/// Returns [`EngineError::NoActiveShift`] when the assigned shift cannot be
/// found or no active default exists. Callers must not create an attendance
/// record on failure.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{ActiveStatus, Employee, Shift, TenantContext};
/// use attendance_engine::resolver::resolve_shift;
/// use chrono::NaiveTime;
///
/// let ctx = TenantContext::new("acme");
/// let shifts = vec![Shift {
///     id: 1,
///     name: "Day shift".to_string(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     status: ActiveStatus::Active,
///     owner: "acme".to_string(),
/// }];
/// let employee = Employee {
///     id: 42,
///     name: "Priya Sharma".to_string(),
///     shift_id: None,
///     attendance_policy_id: None,
///     owner: "acme".to_string(),
/// };
/// let shift = resolve_shift(&ctx, &employee, &shifts).unwrap();
/// assert_eq!(shift.id, 1);
/// ```
pub fn resolve_shift(
    ctx: &TenantContext,
    employee: &Employee,
    shifts: &[Shift],
) -> EngineResult<Shift> {
    if let Some(assigned_id) = employee.shift_id {
        return shifts
            .iter()
            .filter(|s| ctx.owns(&s.owner))
            .find(|s| s.id == assigned_id)
            .cloned()
            .ok_or(EngineError::NoActiveShift {
                employee_id: employee.id,
            });
    }

    shifts
        .iter()
        .filter(|s| ctx.owns(&s.owner) && s.is_active())
        .min_by_key(|s| s.id)
        .cloned()
        .ok_or(EngineError::NoActiveShift {
            employee_id: employee.id,
        })
}
