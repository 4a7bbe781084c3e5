//! Tenant scoping and record lifecycle types.
//!
//! Every core operation takes an explicit [`TenantContext`] instead of fishing
//! the owning tenant out of ambient state, so the resolver, classifier, and
//! aggregator stay pure functions of their inputs.

use serde::{Deserialize, Serialize};

/// Identifies the tenant on whose behalf an operation runs.
///
/// # Example
///
/// ```
/// use attendance_engine::models::TenantContext;
///
/// let ctx = TenantContext::new("acme");
/// assert_eq!(ctx.tenant_id, "acme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantContext {
    /// The id of the owning tenant.
    pub tenant_id: String,
}

impl TenantContext {
    /// Creates a context for the given tenant id.
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
        }
    }

    /// Returns true if the given owner string belongs to this tenant.
    pub fn owns(&self, owner: &str) -> bool {
        self.tenant_id == owner
    }
}

/// Lifecycle status shared by shifts, policies, and salary components.
///
/// Referenced rows are never deleted; they are deactivated so historical
/// attendance records can still resolve them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveStatus {
    /// The row participates in default resolution and new assignments.
    Active,
    /// The row is retained for historical references only.
    Inactive,
}
