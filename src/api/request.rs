//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures for the clock-in,
//! clock-out and payroll endpoints.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Request body for the `/attendance/clock-in` endpoint.
///
/// Date and time default to "now" from the server clock when omitted, which
/// is the normal kiosk flow; supplying them supports backfilled corrections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockInRequest {
    /// The employee clocking in.
    pub employee_id: u64,
    /// The attendance date. Defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The clock-in time. Defaults to the current time.
    #[serde(default)]
    pub time: Option<NaiveTime>,
}

/// Request body for the `/attendance/clock-out` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockOutRequest {
    /// The employee clocking out.
    pub employee_id: u64,
    /// The attendance date the clock-out belongs to. Defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The clock-out time. Defaults to the current time.
    #[serde(default)]
    pub time: Option<NaiveTime>,
    /// Unpaid break minutes taken during the day. Defaults to zero.
    #[serde(default)]
    pub break_minutes: i64,
}

/// Request body for the `/payroll/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee to aggregate pay for.
    pub employee_id: u64,
    /// First day of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub end_date: NaiveDate,
}
