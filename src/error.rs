//! Error types for the attendance and payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance processing
//! and payroll aggregation.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the attendance and payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::NoActiveShift { employee_id: 42 };
/// assert_eq!(
///     error.to_string(),
///     "No shift could be resolved for employee 42: contact HR to assign or activate a shift"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No shift is assigned to the employee and the tenant has no active default.
    #[error("No shift could be resolved for employee {employee_id}: contact HR to assign or activate a shift")]
    NoActiveShift {
        /// The employee for whom resolution failed.
        employee_id: u64,
    },

    /// No attendance policy is assigned to the employee and the tenant has no active default.
    #[error("No attendance policy could be resolved for employee {employee_id}: contact HR to assign or activate a policy")]
    NoActivePolicy {
        /// The employee for whom resolution failed.
        employee_id: u64,
    },

    /// An attendance record already exists for the employee on the given date.
    #[error("Attendance for employee {employee_id} on {date} already exists")]
    DuplicateAttendance {
        /// The employee with the conflicting record.
        employee_id: u64,
        /// The date of the conflicting record.
        date: NaiveDate,
    },

    /// No attendance record exists for the employee on the given date.
    #[error("No attendance record for employee {employee_id} on {date}")]
    AttendanceNotFound {
        /// The employee whose record was requested.
        employee_id: u64,
        /// The date that was requested.
        date: NaiveDate,
    },

    /// A clock-out was attempted against a record that has no clock-in.
    #[error("Employee {employee_id} has no clock-in on {date} to clock out against")]
    MissingClockIn {
        /// The employee attempting to clock out.
        employee_id: u64,
        /// The date of the attempted clock-out.
        date: NaiveDate,
    },

    /// The employee was not found in the tenant's roster.
    #[error("Employee {employee_id} not found")]
    EmployeeNotFound {
        /// The employee id that was not found.
        employee_id: u64,
    },

    /// An entry was pushed into a payroll run that has already been finalized.
    #[error("Payroll run {run_id} is finalized and cannot accept new entries")]
    RunFinalized {
        /// The id of the finalized run.
        run_id: Uuid,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
