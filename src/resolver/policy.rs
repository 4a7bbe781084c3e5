//! Attendance policy resolution for an employee.

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendancePolicy, Employee, TenantContext};

/// Resolves the attendance policy applicable to an employee.
///
/// Follows the same pattern as shift resolution: an employee-level assignment
/// wins regardless of the policy's active status, otherwise the tenant's
/// active policy with the lowest id is the default. Policies owned by other
/// tenants are never considered.
///
/// # Errors
///
/// Returns [`EngineError::NoActivePolicy`] when the assigned policy cannot be
/// found or no active default exists.
pub fn resolve_policy(
    ctx: &TenantContext,
    employee: &Employee,
    policies: &[AttendancePolicy],
) -> EngineResult<AttendancePolicy> {
    if let Some(assigned_id) = employee.attendance_policy_id {
        return policies
            .iter()
            .filter(|p| ctx.owns(&p.owner))
            .find(|p| p.id == assigned_id)
            .cloned()
            .ok_or(EngineError::NoActivePolicy {
                employee_id: employee.id,
            });
    }

    policies
        .iter()
        .filter(|p| ctx.owns(&p.owner) && p.is_active())
        .min_by_key(|p| p.id)
        .cloned()
        .ok_or(EngineError::NoActivePolicy {
            employee_id: employee.id,
        })
}
