//! Leave application model.
//!
//! Leave applications are a read-only input to the classifier and the payroll
//! aggregator: an approved application overlapping a date overrides that day's
//! displayed status, never the underlying clock data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approval state of a leave application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted, awaiting a decision.
    Pending,
    /// Approved; overlapping days count as leave.
    Approved,
    /// Rejected by an approver.
    Rejected,
    /// Withdrawn by the employee.
    Cancelled,
}

/// A category of leave, such as annual or sick leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    /// The display name of the leave type.
    pub name: String,
    /// Whether days of this type are paid. Unpaid leave days are deducted
    /// pro-rata from basic salary by the payroll aggregator.
    pub is_paid: bool,
}

/// An employee's request for a range of leave days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// Unique identifier for the application.
    pub id: u64,
    /// The employee requesting leave.
    pub employee_id: u64,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Approval state.
    pub status: LeaveStatus,
    /// The category of leave requested.
    pub leave_type: LeaveType,
}

impl LeaveApplication {
    /// Returns true if the application has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns true if the given date falls within the leave range
    /// (inclusive of both ends).
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn annual_leave(start: NaiveDate, end: NaiveDate, status: LeaveStatus) -> LeaveApplication {
        LeaveApplication {
            id: 1,
            employee_id: 42,
            start_date: start,
            end_date: end,
            status,
            leave_type: LeaveType {
                name: "Annual leave".to_string(),
                is_paid: true,
            },
        }
    }

    #[test]
    fn test_covers_is_inclusive_of_both_ends() {
        let leave = annual_leave(date(2026, 6, 10), date(2026, 6, 12), LeaveStatus::Approved);
        assert!(leave.covers(date(2026, 6, 10)));
        assert!(leave.covers(date(2026, 6, 11)));
        assert!(leave.covers(date(2026, 6, 12)));
        assert!(!leave.covers(date(2026, 6, 9)));
        assert!(!leave.covers(date(2026, 6, 13)));
    }

    #[test]
    fn test_single_day_leave_covers_only_that_day() {
        let leave = annual_leave(date(2026, 6, 10), date(2026, 6, 10), LeaveStatus::Approved);
        assert!(leave.covers(date(2026, 6, 10)));
        assert!(!leave.covers(date(2026, 6, 11)));
    }

    #[test]
    fn test_only_approved_applications_count() {
        for status in [
            LeaveStatus::Pending,
            LeaveStatus::Rejected,
            LeaveStatus::Cancelled,
        ] {
            let leave = annual_leave(date(2026, 6, 10), date(2026, 6, 12), status);
            assert!(!leave.is_approved());
        }
        let approved = annual_leave(date(2026, 6, 10), date(2026, 6, 12), LeaveStatus::Approved);
        assert!(approved.is_approved());
    }

    #[test]
    fn test_leave_deserialization() {
        let json = r#"{
            "id": 5,
            "employee_id": 42,
            "start_date": "2026-06-10",
            "end_date": "2026-06-12",
            "status": "approved",
            "leave_type": { "name": "Sick leave", "is_paid": false }
        }"#;
        let leave: LeaveApplication = serde_json::from_str(json).unwrap();
        assert_eq!(leave.status, LeaveStatus::Approved);
        assert_eq!(leave.leave_type.name, "Sick leave");
        assert!(!leave.leave_type.is_paid);
    }
}
