//! Configuration file structures for a tenant directory.
//!
//! Each YAML file in the tenant directory deserializes into one of the file
//! structures below; the loader assembles them into a [`TenantConfig`].

use serde::Deserialize;

use crate::models::{
    AttendancePolicy, Employee, EmployeeSalary, Holiday, LeaveApplication, SalaryComponent, Shift,
};

/// Metadata about the tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantMetadata {
    /// The tenant id used for row ownership checks.
    pub id: String,
    /// The human-readable tenant name.
    pub name: String,
}

/// `tenant.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TenantFile {
    /// The tenant metadata.
    pub tenant: TenantMetadata,
}

/// `shifts.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsFile {
    /// The tenant's shift templates.
    pub shifts: Vec<Shift>,
}

/// `policies.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PoliciesFile {
    /// The tenant's attendance policies.
    pub policies: Vec<AttendancePolicy>,
}

/// `salary_components.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentsFile {
    /// The tenant's reusable salary components.
    pub components: Vec<SalaryComponent>,
}

/// `employees.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// The tenant's roster.
    pub employees: Vec<Employee>,
    /// Salary configurations keyed by employee id; employees without one get
    /// the zero-salary placeholder.
    #[serde(default)]
    pub salaries: Vec<EmployeeSalary>,
}

/// `leaves.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LeavesFile {
    /// Leave applications, in any approval state.
    #[serde(default)]
    pub leaves: Vec<LeaveApplication>,
}

/// `holidays.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// Declared holidays.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// The fully assembled tenant configuration.
#[derive(Debug, Clone)]
pub struct TenantConfig {
    /// The tenant metadata.
    pub tenant: TenantMetadata,
    /// The tenant's shift templates.
    pub shifts: Vec<Shift>,
    /// The tenant's attendance policies.
    pub policies: Vec<AttendancePolicy>,
    /// The tenant's reusable salary components.
    pub components: Vec<SalaryComponent>,
    /// The tenant's roster.
    pub employees: Vec<Employee>,
    /// Salary configurations.
    pub salaries: Vec<EmployeeSalary>,
    /// Leave applications.
    pub leaves: Vec<LeaveApplication>,
    /// Declared holidays.
    pub holidays: Vec<Holiday>,
}
