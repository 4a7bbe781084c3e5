//! Response types for the attendance engine API.
//!
//! This module defines the attendance view model returned by the clock
//! endpoints, plus the error response structures and the mapping from
//! engine errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::classification::overlay;
use crate::error::EngineError;
use crate::models::{AttendanceRecord, AttendanceStatus, LeaveApplication};

/// An attendance record as returned by the API.
///
/// Carries the stored record plus the display-only leave overlay, so clients
/// never have to join leave applications themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceResponse {
    /// The stored attendance record.
    #[serde(flatten)]
    pub record: AttendanceRecord,
    /// The status to display, after the leave overlay.
    pub display_status: AttendanceStatus,
    /// The name of the covering leave type, for on-leave days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
}

impl AttendanceResponse {
    /// Builds the view model for a record by applying the leave overlay.
    pub fn from_record(record: AttendanceRecord, leaves: &[LeaveApplication]) -> Self {
        let view = overlay(&record, leaves);
        Self {
            record,
            display_status: view.display_status,
            leave_type: view.leave_type,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::NoActiveShift { employee_id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NO_ACTIVE_SHIFT",
                    format!("No shift could be resolved for employee {}", employee_id),
                    "Assign a shift to the employee or activate a tenant default shift",
                ),
            },
            EngineError::NoActivePolicy { employee_id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NO_ACTIVE_POLICY",
                    format!(
                        "No attendance policy could be resolved for employee {}",
                        employee_id
                    ),
                    "Assign a policy to the employee or activate a tenant default policy",
                ),
            },
            EngineError::DuplicateAttendance { employee_id, date } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_ATTENDANCE",
                    format!(
                        "Attendance for employee {} on {} already exists",
                        employee_id, date
                    ),
                    "Use clock-out to complete the existing record instead",
                ),
            },
            EngineError::AttendanceNotFound { employee_id, date } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "ATTENDANCE_NOT_FOUND",
                    format!("No attendance record for employee {} on {}", employee_id, date),
                ),
            },
            EngineError::MissingClockIn { employee_id, date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "MISSING_CLOCK_IN",
                    format!(
                        "Employee {} has no clock-in on {} to clock out against",
                        employee_id, date
                    ),
                ),
            },
            EngineError::EmployeeNotFound { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee {} not found", employee_id),
                ),
            },
            EngineError::RunFinalized { run_id } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new(
                    "RUN_FINALIZED",
                    format!("Payroll run {} is finalized", run_id),
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
