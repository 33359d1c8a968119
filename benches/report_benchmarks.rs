//! Performance benchmarks for the attendance engine.
//!
//! Covers the pure report builder (sequential and concurrent) for growing
//! workforce sizes, plus one end-to-end request through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::calculation::{
    MonthlyReportOptions, ReportSnapshot, build_monthly_report, build_monthly_report_concurrent,
};
use attendance_engine::config::{ConfigLoader, MonthlyColumns};
use attendance_engine::models::{
    AttendanceRecord, AttendanceStatus, DocStatus, Employee, Holiday, LeaveApplication,
    LeaveStatus, ReportPeriod,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn as_of() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2025-04-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Creates a March 2025 snapshot for `employee_count` employees.
///
/// Every employee has a record on most weekdays, with a spread of durations,
/// one approved leave week and two holidays.
fn create_snapshot(employee_count: usize) -> ReportSnapshot {
    let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let employees: Vec<Employee> = (0..employee_count)
        .map(|i| Employee {
            id: format!("EMP-{:05}", i),
            name: format!("Employee {}", i),
            date_of_joining: if i % 10 == 0 {
                NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
            } else {
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
            },
            relieving_date: None,
        })
        .collect();

    let mut attendance = Vec::new();
    for (i, employee) in employees.iter().enumerate() {
        for day in 0..31 {
            if (day + i) % 7 >= 5 {
                continue;
            }
            let hours = 3 + ((day + i) % 7) as u32;
            attendance.push(AttendanceRecord {
                employee_id: employee.id.clone(),
                date: start + Duration::days(day as i64),
                status: AttendanceStatus::Present,
                swipe_in: NaiveTime::from_hms_opt(8, 0, 0),
                swipe_out: NaiveTime::from_hms_opt(8 + hours, 30, 0),
                docstatus: DocStatus::Submitted,
            });
        }
    }

    let holidays = vec![
        Holiday {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            description: Some("Labour Day".to_string()),
        },
        Holiday {
            date: NaiveDate::from_ymd_opt(2025, 3, 17).unwrap(),
            description: None,
        },
    ];

    let leave: Vec<LeaveApplication> = employees
        .iter()
        .step_by(3)
        .map(|e| LeaveApplication {
            employee_id: e.id.clone(),
            from_date: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2025, 3, 26).unwrap(),
            half_day: false,
            status: LeaveStatus::Approved,
        })
        .collect();

    ReportSnapshot::new(employees, &attendance, &holidays, &leave)
}

/// Benchmark: sequential report build for growing workforces.
fn bench_monthly_report(c: &mut Criterion) {
    let period = ReportPeriod::new(2025, 3).unwrap();
    let options = MonthlyReportOptions::default();
    let labels = MonthlyColumns::default();

    let mut group = c.benchmark_group("monthly_report");

    for employee_count in [10, 100, 1000].iter() {
        let snapshot = create_snapshot(*employee_count);

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| {
                b.iter(|| {
                    black_box(build_monthly_report(
                        &period,
                        &snapshot,
                        &options,
                        &labels,
                        as_of(),
                    ))
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: JoinSet fan-out over the same workforces.
fn bench_monthly_report_concurrent(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let period = ReportPeriod::new(2025, 3).unwrap();

    let mut group = c.benchmark_group("monthly_report_concurrent");

    for employee_count in [10, 100, 1000].iter() {
        let snapshot = Arc::new(create_snapshot(*employee_count));

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let report = build_monthly_report_concurrent(
                        period,
                        Arc::clone(&snapshot),
                        MonthlyReportOptions::default(),
                        MonthlyColumns::default(),
                        as_of(),
                    )
                    .await
                    .unwrap();
                    black_box(report)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: one monthly report request through the router.
fn bench_http_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let router = create_router(AppState::new(config));

    let employees: Vec<serde_json::Value> = (0..50)
        .map(|i| {
            serde_json::json!({
                "id": format!("EMP-{:04}", i),
                "name": format!("Employee {}", i),
                "date_of_joining": "2020-01-01"
            })
        })
        .collect();
    let attendance: Vec<serde_json::Value> = (0..50)
        .flat_map(|i| {
            (1..=28).map(move |day| {
                serde_json::json!({
                    "employee_id": format!("EMP-{:04}", i),
                    "date": format!("2025-03-{:02}", day),
                    "status": "Present",
                    "swipe_in": "09:00:00",
                    "swipe_out": "18:00:00"
                })
            })
        })
        .collect();
    let body = serde_json::json!({
        "filters": { "year": 2025, "month": "Mar" },
        "employees": employees,
        "attendance": attendance,
        "as_of": "2025-04-01T09:00:00"
    })
    .to_string();

    c.bench_function("http_monthly_report_50_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/reports/monthly-attendance")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_monthly_report,
    bench_monthly_report_concurrent,
    bench_http_request,
);
criterion_main!(benches);
