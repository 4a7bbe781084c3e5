//! Core data models for the attendance and payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod leave;
mod pay_period;
mod payroll;
mod policy;
mod salary;
mod shift;
mod tenant;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use employee::Employee;
pub use leave::{LeaveApplication, LeaveStatus, LeaveType};
pub use pay_period::{Holiday, PayPeriod};
pub use payroll::{AttendanceSummary, PayComponentLine, PayrollEntry, PayrollRun, RunStatus};
pub use policy::AttendancePolicy;
pub use salary::{ComponentAmount, ComponentKind, EmployeeSalary, SalaryComponent};
pub use shift::Shift;
pub use tenant::{ActiveStatus, TenantContext};
