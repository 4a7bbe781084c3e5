//! End-to-end tests for the attendance engine API.
//!
//! This suite drives the public HTTP surface through full scenarios:
//! - clock-in / clock-out round trips
//! - duplicate and missing-record error handling
//! - payroll aggregation over a period with absences and half days
//! - overnight shifts and overtime pay
//! - zero entries for employees with no history
//! - property checks over the pure classification functions

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use attendance_engine::api::{create_router, AppState};
use attendance_engine::classification::{classify, worked_hours};
use attendance_engine::config::TenantConfigLoader;
use attendance_engine::models::{
    ActiveStatus, AttendancePolicy, AttendanceRecord, Shift,
};
use attendance_engine::time::FixedClock;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = TenantConfigLoader::load("./config/acme").expect("Failed to load config");
    // Pinned after the periods under test so gap filling sees them as elapsed
    let clock = FixedClock::at(
        NaiveDate::from_ymd_opt(2026, 8, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    );
    AppState::with_clock(config, clock)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn clock_full_day(router: Router, employee_id: u64, date: &str, out_time: &str) {
    let (status, _) = post_json(
        router.clone(),
        "/attendance/clock-in",
        json!({ "employee_id": employee_id, "date": date, "time": "09:00:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "clock-in failed for {}", date);

    let (status, _) = post_json(
        router,
        "/attendance/clock-out",
        json!({ "employee_id": employee_id, "date": date, "time": out_time }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "clock-out failed for {}", date);
}

fn assert_money(value: &Value, expected: &str) {
    let actual = Decimal::from_str(value.as_str().unwrap()).unwrap();
    assert_eq!(actual, decimal(expected));
}

// =============================================================================
// Clock event round trips
// =============================================================================

#[tokio::test]
async fn test_clock_round_trip_reports_worked_and_overtime_hours() {
    let router = create_router_for_test();

    let (status, record) = post_json(
        router.clone(),
        "/attendance/clock-in",
        json!({ "employee_id": 1, "date": "2026-07-01", "time": "09:10:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["status"], "present");
    assert_eq!(record["display_status"], "present");
    assert_eq!(record["late_arrival"], false); // within the 15 minute grace

    let (status, record) = post_json(
        router,
        "/attendance/clock-out",
        json!({
            "employee_id": 1,
            "date": "2026-07-01",
            "time": "19:10:00",
            "break_minutes": 60
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // 10h span minus 1h break = 9h worked, 1h past the 8h threshold
    assert_money(&record["worked_hours"], "9");
    assert_money(&record["overtime_hours"], "1");
    assert_eq!(record["status"], "present");
    assert_eq!(record["early_departure"], false);
}

#[tokio::test]
async fn test_duplicate_clock_in_is_a_conflict() {
    let router = create_router_for_test();

    let body = json!({ "employee_id": 1, "date": "2026-07-01", "time": "09:00:00" });
    let (status, _) = post_json(router.clone(), "/attendance/clock-in", body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, error) = post_json(router, "/attendance/clock-in", body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "DUPLICATE_ATTENDANCE");
}

#[tokio::test]
async fn test_clock_out_without_clock_in_is_not_found() {
    let router = create_router_for_test();

    let (status, error) = post_json(
        router,
        "/attendance/clock-out",
        json!({ "employee_id": 2, "date": "2026-07-01", "time": "17:00:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "ATTENDANCE_NOT_FOUND");
}

#[tokio::test]
async fn test_assigned_shift_overrides_tenant_default() {
    let router = create_router_for_test();

    // Employee 2 is assigned the night shift (id 2), so 22:05 is within the
    // grace window even though the tenant default day shift started at 09:00
    let (status, record) = post_json(
        router,
        "/attendance/clock-in",
        json!({ "employee_id": 2, "date": "2026-07-01", "time": "22:05:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["shift_id"], 2);
    assert_eq!(record["late_arrival"], false);
}

// =============================================================================
// Payroll aggregation
// =============================================================================

/// Employee 1 over 2026-07-01..22: basic 3000 across 22 calendar days gives
/// a per-day rate of 136.3636..; one absent day plus one half day is 1.5
/// unpaid days, deducting 204.55.
#[tokio::test]
async fn test_payroll_period_with_absence_and_half_day() {
    let router = create_router_for_test();

    // 16 weekdays in the period. Work all of them except 2026-07-06 (left
    // absent) and 2026-07-07 (a 3 hour half day).
    let full_days = [
        "2026-07-01", "2026-07-02", "2026-07-03",
        "2026-07-08", "2026-07-09", "2026-07-10",
        "2026-07-13", "2026-07-14", "2026-07-15", "2026-07-16", "2026-07-17",
        "2026-07-20", "2026-07-21", "2026-07-22",
    ];
    for date in full_days {
        clock_full_day(router.clone(), 1, date, "17:00:00").await;
    }
    clock_full_day(router.clone(), 1, "2026-07-07", "12:00:00").await;

    let (status, entry) = post_json(
        router,
        "/payroll/calculate",
        json!({
            "employee_id": 1,
            "start_date": "2026-07-01",
            "end_date": "2026-07-22"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(entry["summary"]["present_days"], 14);
    assert_eq!(entry["summary"]["half_days"], 1);
    assert_eq!(entry["summary"]["absent_days"], 1);

    // Earnings: basic 3000, house rent 10% = 300, transport 120
    let earnings = entry["earnings"].as_array().unwrap();
    assert_eq!(earnings.len(), 3);
    assert_money(&earnings[0]["amount"], "3000");
    assert_money(&earnings[1]["amount"], "300");
    assert_money(&earnings[2]["amount"], "120");

    // Deductions: provident fund 5% = 150, unpaid leave 1.5 * 3000/22
    let deductions = entry["deductions"].as_array().unwrap();
    assert_eq!(deductions.len(), 2);
    assert_money(&deductions[0]["amount"], "150");
    assert_eq!(deductions[1]["name"], "Unpaid leave");
    assert_money(&deductions[1]["amount"], "204.55");

    // 3420 earned, 354.55 deducted
    assert_money(&entry["net_pay"], "3065.45");
}

/// Employee 2 works one overnight shift in a 22 day period: 22:00 to 08:00
/// is 10 worked hours, 2 of them overtime. Per-day rate 4400/22 = 200, so
/// overtime pays 2 * (200/8) * 2.0 = 100 and the 15 remaining weekdays
/// deduct 15 * 200 = 3000.
#[tokio::test]
async fn test_payroll_overnight_shift_earns_overtime() {
    let router = create_router_for_test();

    let (status, _) = post_json(
        router.clone(),
        "/attendance/clock-in",
        json!({ "employee_id": 2, "date": "2026-07-01", "time": "22:00:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, record) = post_json(
        router.clone(),
        "/attendance/clock-out",
        json!({ "employee_id": 2, "date": "2026-07-01", "time": "08:00:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_money(&record["worked_hours"], "10");
    assert_money(&record["overtime_hours"], "2");

    let (status, entry) = post_json(
        router,
        "/payroll/calculate",
        json!({
            "employee_id": 2,
            "start_date": "2026-07-01",
            "end_date": "2026-07-22"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(entry["summary"]["present_days"], 1);
    assert_eq!(entry["summary"]["absent_days"], 15);
    assert_money(&entry["summary"]["overtime_hours"], "2");

    let earnings = entry["earnings"].as_array().unwrap();
    // Basic 4400, house rent 440, overtime 100
    assert_eq!(earnings.len(), 3);
    assert_money(&earnings[0]["amount"], "4400");
    assert_money(&earnings[1]["amount"], "440");
    assert_eq!(earnings[2]["name"], "Overtime");
    assert_money(&earnings[2]["amount"], "100");

    let deductions = entry["deductions"].as_array().unwrap();
    assert_eq!(deductions.len(), 1);
    assert_money(&deductions[0]["amount"], "3000");

    assert_money(&entry["net_pay"], "1940");
}

#[tokio::test]
async fn test_payroll_counts_holidays_and_approved_leave() {
    let router = create_router_for_test();

    // Employee 1 works 2026-06-08 only. The fixture has approved leave on
    // 06-10..11 and the Founders Day holiday on 06-15.
    clock_full_day(router.clone(), 1, "2026-06-08", "17:00:00").await;

    let (status, entry) = post_json(
        router,
        "/payroll/calculate",
        json!({
            "employee_id": 1,
            "start_date": "2026-06-08",
            "end_date": "2026-06-15"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(entry["summary"]["present_days"], 1);
    assert_eq!(entry["summary"]["leave_days"], 2);
    assert_eq!(entry["summary"]["holiday_days"], 1);
    assert_eq!(entry["summary"]["absent_days"], 2);

    // The leave type is paid, so only the two absences are unpaid:
    // 2 * 3000/8 = 750
    let deductions = entry["deductions"].as_array().unwrap();
    let unpaid = deductions
        .iter()
        .find(|d| d["name"] == "Unpaid leave")
        .unwrap();
    assert_money(&unpaid["amount"], "750");
}

#[tokio::test]
async fn test_payroll_without_history_is_a_zero_entry() {
    let router = create_router_for_test();

    let (status, entry) = post_json(
        router,
        "/payroll/calculate",
        json!({
            "employee_id": 3,
            "start_date": "2026-07-01",
            "end_date": "2026-07-22"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_money(&entry["net_pay"], "0");
    assert!(entry["earnings"].as_array().unwrap().is_empty());
    assert!(entry["deductions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_payroll_is_deterministic_across_calls() {
    let router = create_router_for_test();
    clock_full_day(router.clone(), 1, "2026-07-01", "17:00:00").await;

    let body = json!({
        "employee_id": 1,
        "start_date": "2026-07-01",
        "end_date": "2026-07-22"
    });
    let (_, first) = post_json(router.clone(), "/payroll/calculate", body.clone()).await;
    let (_, second) = post_json(router, "/payroll/calculate", body).await;
    assert_eq!(first, second);
}

// =============================================================================
// Properties of the pure classification functions
// =============================================================================

fn test_shift() -> Shift {
    Shift {
        id: 1,
        name: "Day shift".to_string(),
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        status: ActiveStatus::Active,
        owner: "acme".to_string(),
    }
}

fn test_policy() -> AttendancePolicy {
    AttendancePolicy {
        id: 1,
        name: "Standard".to_string(),
        grace_minutes: 15,
        half_day_threshold_hours: Decimal::new(4, 0),
        overtime_threshold_hours: Decimal::new(8, 0),
        status: ActiveStatus::Active,
        owner: "acme".to_string(),
    }
}

proptest! {
    #[test]
    fn prop_worked_hours_are_never_negative(
        in_secs in 0u32..86_400,
        out_secs in 0u32..86_400,
        break_minutes in 0i64..1_440,
    ) {
        let clock_in = NaiveTime::from_num_seconds_from_midnight_opt(in_secs, 0).unwrap();
        let clock_out = NaiveTime::from_num_seconds_from_midnight_opt(out_secs, 0).unwrap();
        let hours = worked_hours(clock_in, clock_out, break_minutes);
        prop_assert!(hours >= Decimal::ZERO);
        prop_assert!(hours <= Decimal::from(24));
    }

    #[test]
    fn prop_classification_is_idempotent(
        in_secs in 0u32..86_400,
        out_secs in 0u32..86_400,
        break_minutes in 0i64..240,
    ) {
        let clock_in = NaiveTime::from_num_seconds_from_midnight_opt(in_secs, 0).unwrap();
        let clock_out = NaiveTime::from_num_seconds_from_midnight_opt(out_secs, 0).unwrap();
        let shift = test_shift();
        let policy = test_policy();

        let mut record = AttendanceRecord::open(
            1,
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            clock_in,
            &shift,
            &policy,
            false,
            false,
        )
        .with_clock_out(clock_out);
        record.break_minutes = break_minutes;

        let once = classify(&record, &shift, &policy);
        let twice = classify(&once, &shift, &policy);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_overtime_never_exceeds_worked_hours(
        in_secs in 0u32..86_400,
        out_secs in 0u32..86_400,
    ) {
        let clock_in = NaiveTime::from_num_seconds_from_midnight_opt(in_secs, 0).unwrap();
        let clock_out = NaiveTime::from_num_seconds_from_midnight_opt(out_secs, 0).unwrap();
        let shift = test_shift();
        let policy = test_policy();

        let record = AttendanceRecord::open(
            1,
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            clock_in,
            &shift,
            &policy,
            false,
            false,
        )
        .with_clock_out(clock_out);

        let classified = classify(&record, &shift, &policy);
        prop_assert!(classified.overtime_hours <= classified.worked_hours);
    }
}
