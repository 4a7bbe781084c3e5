//! Employee model.

use serde::{Deserialize, Serialize};

/// An employee on a tenant's roster.
///
/// The optional shift and policy assignments drive resolution: an assigned id
/// wins over the tenant's active default.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Employee;
///
/// let employee = Employee {
///     id: 42,
///     name: "Priya Sharma".to_string(),
///     shift_id: Some(1),
///     attendance_policy_id: None,
///     owner: "acme".to_string(),
/// };
/// assert_eq!(employee.shift_id, Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee within the tenant.
    pub id: u64,
    /// The employee's display name.
    pub name: String,
    /// Directly assigned shift, if any. Takes precedence over the tenant
    /// default and may reference an inactive shift.
    #[serde(default)]
    pub shift_id: Option<u64>,
    /// Directly assigned attendance policy, if any.
    #[serde(default)]
    pub attendance_policy_id: Option<u64>,
    /// The owning tenant id.
    pub owner: String,
}
