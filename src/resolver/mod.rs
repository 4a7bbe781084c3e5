//! Shift and attendance policy resolution.
//!
//! Given an employee, resolution finds the work [`Shift`](crate::models::Shift)
//! and [`AttendancePolicy`](crate::models::AttendancePolicy) the classifier
//! should apply: the employee's own assignment first, falling back to the
//! tenant's active default. A clock-in with no resolvable shift or policy is
//! rejected before any record is created.

mod policy;
mod shift;

pub use policy::resolve_policy;
pub use shift::resolve_shift;

use crate::error::EngineResult;
use crate::models::{AttendancePolicy, Employee, Shift, TenantContext};

/// Resolves both the shift and the attendance policy for an employee.
///
/// Shift and policy resolution are independent: an employee may have an
/// assigned shift but fall back to the default policy, or vice versa.
///
/// # Errors
///
/// Propagates [`EngineError::NoActiveShift`](crate::error::EngineError::NoActiveShift)
/// or [`EngineError::NoActivePolicy`](crate::error::EngineError::NoActivePolicy)
/// from the individual resolutions.
pub fn resolve(
    ctx: &TenantContext,
    employee: &Employee,
    shifts: &[Shift],
    policies: &[AttendancePolicy],
) -> EngineResult<(Shift, AttendancePolicy)> {
    let shift = resolve_shift(ctx, employee, shifts)?;
    let policy = resolve_policy(ctx, employee, policies)?;
    Ok((shift, policy))
}
