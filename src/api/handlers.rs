//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::HashSet;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::classification::{classify, is_weekend, rollover};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, PayPeriod, PayrollEntry};
use crate::payroll::aggregate;
use crate::resolver::resolve;

use super::request::{ClockInRequest, ClockOutRequest, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse, AttendanceResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/clock-in", post(clock_in_handler))
        .route("/attendance/clock-out", post(clock_out_handler))
        .route("/payroll/calculate", post(payroll_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> axum::response::Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for the POST /attendance/clock-in endpoint.
///
/// Resolves the employee's shift and policy, opens the day's attendance
/// record and classifies punctuality. Fails without side effects when
/// resolution fails or a record already exists for the day.
async fn clock_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClockInRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing clock-in request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    match perform_clock_in(&state, &request) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = record.employee_id,
                date = %record.date,
                "Clock-in recorded"
            );
            let response = AttendanceResponse::from_record(record, state.config().leaves());
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for the POST /attendance/clock-out endpoint.
///
/// Completes the day's record with the clock-out time and break minutes,
/// then re-runs classification to derive worked hours, the overtime split
/// and the final day status.
async fn clock_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClockOutRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing clock-out request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    if request.break_minutes < 0 {
        return bad_request(ApiError::validation_error(
            "break_minutes must not be negative",
        ));
    }

    match perform_clock_out(&state, &request) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = record.employee_id,
                date = %record.date,
                worked_hours = %record.worked_hours,
                "Clock-out recorded"
            );
            let response = AttendanceResponse::from_record(record, state.config().leaves());
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for the POST /payroll/calculate endpoint.
///
/// Aggregates the employee's attendance over the requested period into a
/// payroll entry. Dates without a stored record are filled by the day
/// rollover in memory; nothing is persisted by this endpoint.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    if request.end_date < request.start_date {
        return bad_request(ApiError::validation_error(
            "end_date must not be before start_date",
        ));
    }

    let start_time = Instant::now();
    match perform_payroll(&state, &request) {
        Ok(entry) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = entry.employee_id,
                net_pay = %entry.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(entry),
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Opens and classifies the attendance record for a clock-in.
fn perform_clock_in(state: &AppState, request: &ClockInRequest) -> EngineResult<AttendanceRecord> {
    let config = state.config();
    let ctx = config.context();
    let employee = config.employee(request.employee_id)?;

    // Resolve before touching the store so a failure has no side effects
    let (shift, policy) = resolve(&ctx, employee, config.shifts(), config.policies())?;

    let now = state.clock().now();
    let date = request.date.unwrap_or_else(|| now.date());
    let time = request.time.unwrap_or_else(|| now.time());

    let record = AttendanceRecord::open(
        employee.id,
        date,
        time,
        &shift,
        &policy,
        is_weekend(date),
        config.is_holiday(date),
    );
    let record = classify(&record, &shift, &policy);
    state.insert_record(record.clone())?;
    Ok(record)
}

/// Completes and reclassifies the attendance record for a clock-out.
fn perform_clock_out(
    state: &AppState,
    request: &ClockOutRequest,
) -> EngineResult<AttendanceRecord> {
    let config = state.config();
    let now = state.clock().now();
    let date = request.date.unwrap_or_else(|| now.date());
    let time = request.time.unwrap_or_else(|| now.time());

    let stored = state.get_record(request.employee_id, date).ok_or(
        EngineError::AttendanceNotFound {
            employee_id: request.employee_id,
            date,
        },
    )?;
    if stored.clock_in.is_none() {
        return Err(EngineError::MissingClockIn {
            employee_id: request.employee_id,
            date,
        });
    }

    // Classify against the shift and policy stamped at creation time, not
    // whatever is currently assigned
    let shift = config
        .shifts()
        .iter()
        .find(|s| s.id == stored.shift_id)
        .ok_or(EngineError::NoActiveShift {
            employee_id: request.employee_id,
        })?;
    let policy = config
        .policies()
        .iter()
        .find(|p| p.id == stored.attendance_policy_id)
        .ok_or(EngineError::NoActivePolicy {
            employee_id: request.employee_id,
        })?;

    let mut updated = stored.with_clock_out(time);
    updated.break_minutes = request.break_minutes;
    let record = classify(&updated, shift, policy);
    state.update_record(record.clone());
    Ok(record)
}

/// Aggregates a pay period into a payroll entry.
fn perform_payroll(state: &AppState, request: &PayrollRequest) -> EngineResult<PayrollEntry> {
    let config = state.config();
    let ctx = config.context();
    let employee = config.employee(request.employee_id)?;

    let period = PayPeriod {
        start_date: request.start_date,
        end_date: request.end_date,
        holidays: config.holidays_between(request.start_date, request.end_date),
    };

    let mut records = state.records_for(employee.id, period.start_date, period.end_date);

    // A period with no stored attendance at all yields the zero entry; gap
    // filling only applies once the employee has any history in the period
    if !records.is_empty() {
        let (shift, policy) = resolve(&ctx, employee, config.shifts(), config.policies())?;
        let today = state.clock().today();
        let have: HashSet<_> = records.iter().map(|r| r.date).collect();
        for date in period.dates() {
            if date >= today || have.contains(&date) {
                continue;
            }
            if let Some(record) = rollover(
                &ctx,
                employee,
                date,
                &shift,
                &policy,
                config.leaves(),
                period.is_holiday(date),
            ) {
                records.push(record);
            }
        }
    }

    let salary = config.salary_for(employee.id);
    Ok(aggregate(
        &ctx,
        &salary,
        config.components(),
        &records,
        config.leaves(),
        &period,
    ))
}
