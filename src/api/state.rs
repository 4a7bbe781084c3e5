//! Application state for the attendance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers: the tenant configuration, the injected time
//! source, and the in-memory attendance store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;

use crate::config::TenantConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRecord;
use crate::time::{Clock, SystemClock};

/// Shared application state.
///
/// The attendance store is keyed by (employee, date), which is what enforces
/// the one-record-per-day rule: a second clock-in for the same pair is
/// rejected before any payload is examined.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tenant configuration.
    config: Arc<TenantConfigLoader>,
    /// The time source used when a request omits a date or time.
    clock: Arc<dyn Clock>,
    /// Attendance records keyed by (employee_id, date).
    records: Arc<RwLock<HashMap<(u64, NaiveDate), AttendanceRecord>>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader
    /// and the system clock.
    pub fn new(config: TenantConfigLoader) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a new application state with an explicit time source.
    pub fn with_clock(config: TenantConfigLoader, clock: impl Clock + 'static) -> Self {
        Self {
            config: Arc::new(config),
            clock: Arc::new(clock),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &TenantConfigLoader {
        &self.config
    }

    /// Returns a reference to the time source.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Inserts a new attendance record.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateAttendance`] if a record already
    /// exists for the same employee and date.
    pub fn insert_record(&self, record: AttendanceRecord) -> EngineResult<()> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let key = (record.employee_id, record.date);
        if records.contains_key(&key) {
            return Err(EngineError::DuplicateAttendance {
                employee_id: record.employee_id,
                date: record.date,
            });
        }
        records.insert(key, record);
        Ok(())
    }

    /// Returns the record for the given employee and date, if one exists.
    pub fn get_record(&self, employee_id: u64, date: NaiveDate) -> Option<AttendanceRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(employee_id, date))
            .cloned()
    }

    /// Replaces the stored record for the record's employee and date.
    pub fn update_record(&self, record: AttendanceRecord) {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        records.insert((record.employee_id, record.date), record);
    }

    /// Returns the employee's records between two dates (inclusive),
    /// ordered by date.
    pub fn records_for(
        &self,
        employee_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<AttendanceRecord> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        let mut out: Vec<AttendanceRecord> = records
            .values()
            .filter(|r| r.employee_id == employee_id && r.date >= start && r.date <= end)
            .cloned()
            .collect();
        out.sort_by_key(|r| r.date);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActiveStatus, AttendancePolicy, Shift};
    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    fn test_state() -> AppState {
        let config = TenantConfigLoader::load("./config/acme").expect("Failed to load config");
        AppState::new(config)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_record(employee_id: u64, day: NaiveDate) -> AttendanceRecord {
        let shift = Shift {
            id: 1,
            name: "Day shift".to_string(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            status: ActiveStatus::Active,
            owner: "acme".to_string(),
        };
        let policy = AttendancePolicy {
            id: 1,
            name: "Standard".to_string(),
            grace_minutes: 15,
            half_day_threshold_hours: Decimal::new(4, 0),
            overtime_threshold_hours: Decimal::new(8, 0),
            status: ActiveStatus::Active,
            owner: "acme".to_string(),
        };
        AttendanceRecord::open(
            employee_id,
            day,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            &shift,
            &policy,
            false,
            false,
        )
    }

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_insert_then_get() {
        let state = test_state();
        let record = sample_record(1, date(2026, 6, 1));
        state.insert_record(record.clone()).unwrap();
        assert_eq!(state.get_record(1, date(2026, 6, 1)), Some(record));
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let state = test_state();
        let record = sample_record(1, date(2026, 6, 1));
        state.insert_record(record.clone()).unwrap();
        let err = state.insert_record(record).unwrap_err();
        assert!(matches!(
            err,
            EngineError::DuplicateAttendance { employee_id: 1, .. }
        ));
    }

    #[test]
    fn test_same_date_different_employees_coexist() {
        let state = test_state();
        state.insert_record(sample_record(1, date(2026, 6, 1))).unwrap();
        state.insert_record(sample_record(2, date(2026, 6, 1))).unwrap();
        assert!(state.get_record(1, date(2026, 6, 1)).is_some());
        assert!(state.get_record(2, date(2026, 6, 1)).is_some());
    }

    #[test]
    fn test_records_for_is_ordered_and_bounded() {
        let state = test_state();
        state.insert_record(sample_record(1, date(2026, 6, 3))).unwrap();
        state.insert_record(sample_record(1, date(2026, 6, 1))).unwrap();
        state.insert_record(sample_record(1, date(2026, 7, 1))).unwrap();
        state.insert_record(sample_record(2, date(2026, 6, 2))).unwrap();

        let records = state.records_for(1, date(2026, 6, 1), date(2026, 6, 30));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, date(2026, 6, 1));
        assert_eq!(records[1].date, date(2026, 6, 3));
    }
}
