//! Tenant configuration loading.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendancePolicy, Employee, EmployeeSalary, Holiday, LeaveApplication, SalaryComponent, Shift,
    TenantContext,
};

use super::types::{
    ComponentsFile, EmployeesFile, HolidaysFile, LeavesFile, PoliciesFile, ShiftsFile, TenantConfig,
    TenantFile, TenantMetadata,
};

/// Loads and provides access to one tenant's configuration.
///
/// # Directory structure
///
/// ```text
/// config/acme/
/// ├── tenant.yaml              # Tenant metadata
/// ├── shifts.yaml              # Shift templates
/// ├── policies.yaml            # Attendance policies
/// ├── salary_components.yaml   # Earning/deduction components
/// ├── employees.yaml           # Roster and salary configurations
/// ├── leaves.yaml              # Leave applications
/// └── holidays.yaml            # Declared holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::TenantConfigLoader;
///
/// let loader = TenantConfigLoader::load("./config/acme").unwrap();
/// println!("Loaded tenant: {}", loader.tenant().name);
/// ```
#[derive(Debug, Clone)]
pub struct TenantConfigLoader {
    config: TenantConfig,
}

impl TenantConfigLoader {
    /// Loads configuration from the specified tenant directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when a required file is
    /// missing and [`EngineError::ConfigParseError`] when a file contains
    /// invalid YAML or fails field validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tenant_file: TenantFile = read_yaml(&path.join("tenant.yaml"))?;
        let shifts_file: ShiftsFile = read_yaml(&path.join("shifts.yaml"))?;
        let policies_file: PoliciesFile = read_yaml(&path.join("policies.yaml"))?;
        let components_file: ComponentsFile = read_yaml(&path.join("salary_components.yaml"))?;
        let employees_file: EmployeesFile = read_yaml(&path.join("employees.yaml"))?;
        let leaves_file: LeavesFile = read_yaml(&path.join("leaves.yaml"))?;
        let holidays_file: HolidaysFile = read_yaml(&path.join("holidays.yaml"))?;

        Ok(Self {
            config: TenantConfig {
                tenant: tenant_file.tenant,
                shifts: shifts_file.shifts,
                policies: policies_file.policies,
                components: components_file.components,
                employees: employees_file.employees,
                salaries: employees_file.salaries,
                leaves: leaves_file.leaves,
                holidays: holidays_file.holidays,
            },
        })
    }

    /// Returns the tenant metadata.
    pub fn tenant(&self) -> &TenantMetadata {
        &self.config.tenant
    }

    /// Returns the tenant context for core operations.
    pub fn context(&self) -> TenantContext {
        TenantContext::new(self.config.tenant.id.clone())
    }

    /// Returns the tenant's shift templates.
    pub fn shifts(&self) -> &[Shift] {
        &self.config.shifts
    }

    /// Returns the tenant's attendance policies.
    pub fn policies(&self) -> &[AttendancePolicy] {
        &self.config.policies
    }

    /// Returns the tenant's salary components.
    pub fn components(&self) -> &[SalaryComponent] {
        &self.config.components
    }

    /// Returns the tenant's leave applications.
    pub fn leaves(&self) -> &[LeaveApplication] {
        &self.config.leaves
    }

    /// Looks up an employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmployeeNotFound`] when the id is not on the
    /// roster.
    pub fn employee(&self, employee_id: u64) -> EngineResult<&Employee> {
        self.config
            .employees
            .iter()
            .find(|e| e.id == employee_id)
            .ok_or(EngineError::EmployeeNotFound { employee_id })
    }

    /// Returns the employee's active salary configuration, or the zero-salary
    /// placeholder when none has been set up.
    pub fn salary_for(&self, employee_id: u64) -> EmployeeSalary {
        self.config
            .salaries
            .iter()
            .find(|s| s.employee_id == employee_id && s.is_active)
            .cloned()
            .unwrap_or_else(|| EmployeeSalary::placeholder(employee_id))
    }

    /// Returns true if the given date is a declared holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.config.holidays.iter().any(|h| h.date == date)
    }

    /// Returns the declared holidays falling within the inclusive range.
    pub fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<Holiday> {
        self.config
            .holidays
            .iter()
            .filter(|h| h.date >= start && h.date <= end)
            .cloned()
            .collect()
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: display.clone(),
    })?;
    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: display,
        message: e.to_string(),
    })
}
