//! Period attendance summarization.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AttendanceStatus, AttendanceSummary, LeaveApplication};

/// Period totals plus the unpaid-day count the aggregator deducts pro-rata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSummary {
    /// Day counts and overtime hours per status.
    pub summary: AttendanceSummary,
    /// Absent days, plus half days at half weight, plus on-leave days whose
    /// leave type is unpaid.
    pub unpaid_days: Decimal,
}

/// Sums per-day classifications into period totals.
///
/// On-leave days are checked against the approved leave applications to
/// decide whether the leave type is unpaid; a day with no matching
/// application is treated as paid.
pub fn summarize(records: &[AttendanceRecord], leaves: &[LeaveApplication]) -> PeriodSummary {
    let mut summary = AttendanceSummary::default();
    let mut unpaid_leave_days = 0u32;

    for record in records {
        match record.status {
            AttendanceStatus::Present => summary.present_days += 1,
            AttendanceStatus::Absent => summary.absent_days += 1,
            AttendanceStatus::HalfDay => summary.half_days += 1,
            AttendanceStatus::Holiday => summary.holiday_days += 1,
            AttendanceStatus::OnLeave => {
                summary.leave_days += 1;
                let unpaid = leaves.iter().any(|l| {
                    l.employee_id == record.employee_id
                        && l.is_approved()
                        && l.covers(record.date)
                        && !l.leave_type.is_paid
                });
                if unpaid {
                    unpaid_leave_days += 1;
                }
            }
        }
        summary.overtime_hours += record.overtime_hours;
    }

    let unpaid_days = Decimal::from(summary.absent_days)
        + Decimal::new(5, 1) * Decimal::from(summary.half_days)
        + Decimal::from(unpaid_leave_days);

    PeriodSummary {
        summary,
        unpaid_days,
    }
}
