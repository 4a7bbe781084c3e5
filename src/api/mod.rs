//! HTTP API module for the attendance engine.
//!
//! This module provides the REST endpoints for recording clock events
//! and aggregating payroll over a pay period.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClockInRequest, ClockOutRequest, PayrollRequest};
pub use response::{ApiError, AttendanceResponse};
pub use state::AppState;
