//! # Attendance Engine
//!
//! A multi-tenant attendance and payroll computation core. The engine takes
//! tenant configuration (shifts, attendance policies, salary structures,
//! leave applications and holidays) plus raw clock events, and produces
//! classified attendance records and payroll entries.
//!
//! The pipeline has four stages:
//!
//! 1. **Policy resolution** ([`resolver`]) — pick the shift and attendance
//!    policy that govern an employee, falling back to the tenant defaults.
//! 2. **Classification** ([`classification`]) — turn clock events into an
//!    attendance record with worked hours, overtime split, punctuality flags
//!    and a day status.
//! 3. **Leave overlay** ([`classification::overlay`]) — project approved
//!    leave on top of the stored status for display, without mutating it.
//! 4. **Payroll aggregation** ([`payroll`]) — fold a period of records into
//!    earnings, deductions and net pay.
//!
//! All stages are pure functions over immutable inputs: they return new
//! values and never write anywhere, which is what makes the engine easy to
//! test and safe to re-run. The [`api`] module wraps the pipeline in an
//! axum router with an in-memory attendance store.
//!
//! ## Example
//!
//! ```
//! use attendance_engine::classification::worked_hours;
//! use chrono::NaiveTime;
//! use rust_decimal::Decimal;
//!
//! let clock_in = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
//! let clock_out = NaiveTime::from_hms_opt(17, 30, 0).unwrap();
//! assert_eq!(worked_hours(clock_in, clock_out, 30), Decimal::from(8));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod classification;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
pub mod resolver;
pub mod time;

pub use error::{EngineError, EngineResult};
