//! Display-only leave enrichment.

use crate::models::{AttendanceRecord, AttendanceStatus, LeaveApplication};

/// Display metadata attached to an attendance record from leave data.
///
/// The overlay never mutates the persisted record; it is view-model shaping
/// for a record whose status is already `OnLeave`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveOverlay {
    /// The status to display for the day.
    pub display_status: AttendanceStatus,
    /// The name of the leave type covering the day, when one is found.
    pub leave_type: Option<String>,
}

/// Enriches an on-leave record with the name of the approved leave type.
///
/// For a record whose status is `OnLeave`, the first approved application by
/// the same employee whose range covers the record's date supplies the type
/// name. A missing application is not an error; the type is simply `None`.
/// Records in any other status pass through with their own status and no
/// leave type.
pub fn overlay(record: &AttendanceRecord, leaves: &[LeaveApplication]) -> LeaveOverlay {
    if record.status != AttendanceStatus::OnLeave {
        return LeaveOverlay {
            display_status: record.status,
            leave_type: None,
        };
    }

    let leave_type = leaves
        .iter()
        .find(|l| l.employee_id == record.employee_id && l.is_approved() && l.covers(record.date))
        .map(|l| l.leave_type.name.clone());

    LeaveOverlay {
        display_status: AttendanceStatus::OnLeave,
        leave_type,
    }
}
