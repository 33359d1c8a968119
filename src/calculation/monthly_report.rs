//! Report row builder for the monthly attendance sheet.
//!
//! Every employee whose employment overlaps the month gets one row: a status
//! code per in-scope day plus present/leave/absent totals. Rows are sorted by
//! employee identifier. The column header set is built from the same day
//! list, so every row has exactly one code per day column.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::config::MonthlyColumns;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ColumnType, Employee, EmployeeMonthRow, MonthlyAttendanceReport, ReportColumn, ReportPeriod,
    ReportWarning, ResolvedDayStatus,
};

use super::aggregation::aggregate_month;
use super::calendar::days_in_scope;
use super::day_status::{DayContext, DurationThresholds, resolve_day_status};
use super::snapshot::ReportSnapshot;

/// Warning code for a day degraded because of inconsistent attendance data.
pub const DATA_INCONSISTENCY_WARNING: &str = "DATA_INCONSISTENCY";

/// Options controlling which employees get a row and how days resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReportOptions {
    /// Include employees with no submitted attendance in the month.
    pub include_employees_with_no_records: bool,
    /// Restrict the report to this employee identifier.
    pub employee: Option<String>,
    /// Duration bands for present days.
    pub thresholds: DurationThresholds,
}

impl Default for MonthlyReportOptions {
    fn default() -> Self {
        Self {
            include_employees_with_no_records: true,
            employee: None,
            thresholds: DurationThresholds::default(),
        }
    }
}

/// Builds the column header set for the given in-scope days.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::build_columns;
/// use attendance_engine::config::MonthlyColumns;
/// use chrono::NaiveDate;
///
/// let days = vec![
///     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
/// ];
/// let descriptors: Vec<String> = build_columns(&days, &MonthlyColumns::default())
///     .iter()
///     .map(ToString::to_string)
///     .collect();
///
/// assert_eq!(descriptors[0], "Employee:Link/Employee:120");
/// assert_eq!(descriptors[3], "1::20");
/// assert_eq!(descriptors[5], "Total Present:Float:80");
/// ```
pub fn build_columns(days: &[NaiveDate], labels: &MonthlyColumns) -> Vec<ReportColumn> {
    let mut columns = Vec::with_capacity(days.len() + 6);
    columns.push(ReportColumn::new(
        labels.employee.label.clone(),
        ColumnType::Link("Employee".to_string()),
        labels.employee.width,
    ));
    columns.push(ReportColumn::new(
        labels.employee_name.label.clone(),
        ColumnType::Data,
        labels.employee_name.width,
    ));
    columns.push(ReportColumn::new(
        labels.date_of_joining.label.clone(),
        ColumnType::Data,
        labels.date_of_joining.width,
    ));
    columns.extend(
        days.iter()
            .map(|day| ReportColumn::new(day.day().to_string(), ColumnType::Data, labels.day_width)),
    );
    for total in [
        &labels.total_present,
        &labels.total_leaves,
        &labels.total_absent,
    ] {
        columns.push(ReportColumn::new(
            total.label.clone(),
            ColumnType::Float,
            total.width,
        ));
    }
    columns
}

/// Resolves every in-scope day for one employee and folds the row.
///
/// Days whose attendance data is inconsistent resolve as absent and come back
/// as warnings alongside the row.
pub fn build_employee_row(
    employee: &Employee,
    days: &[NaiveDate],
    snapshot: &ReportSnapshot,
    now: NaiveDateTime,
    thresholds: &DurationThresholds,
) -> (EmployeeMonthRow, Vec<ReportWarning>) {
    let mut warnings = Vec::new();

    let statuses: Vec<ResolvedDayStatus> = days
        .iter()
        .map(|&date| {
            let context = DayContext {
                record: snapshot.attendance().get(&employee.id, date),
                is_holiday: snapshot.holidays().contains(date),
                is_on_leave: snapshot.leave().covers(&employee.id, date),
                in_window: employee.is_employed_on(date),
            };
            match resolve_day_status(&context, now, thresholds) {
                Ok(status) => status,
                Err(err) => {
                    warn!(
                        employee_id = %employee.id,
                        date = %date,
                        error = %err,
                        "Attendance data inconsistent, resolving day as absent"
                    );
                    warnings.push(ReportWarning {
                        code: DATA_INCONSISTENCY_WARNING.to_string(),
                        message: err.to_string(),
                        severity: "medium".to_string(),
                        employee_id: employee.id.clone(),
                        date,
                    });
                    ResolvedDayStatus::Absent
                }
            }
        })
        .collect();

    let aggregate = aggregate_month(&statuses);

    debug!(
        employee_id = %employee.id,
        present = aggregate.totals.present,
        leave = aggregate.totals.leave,
        absent = aggregate.totals.absent,
        "Built employee row"
    );

    let row = EmployeeMonthRow {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        date_of_joining: employee.date_of_joining,
        codes: aggregate.codes,
        totals: aggregate.totals,
    };
    (row, warnings)
}

/// Picks the employees that get a row, sorted by identifier.
fn select_employees<'a>(
    period: &ReportPeriod,
    snapshot: &'a ReportSnapshot,
    options: &MonthlyReportOptions,
) -> Vec<&'a Employee> {
    let mut seen = HashSet::new();
    let mut selected: Vec<&Employee> = snapshot
        .employees()
        .iter()
        .filter(|e| seen.insert(e.id.clone()))
        .filter(|e| options.employee.as_deref().is_none_or(|id| id == e.id))
        .filter(|e| e.overlaps(period.start(), period.end()))
        .filter(|e| {
            options.include_employees_with_no_records
                || snapshot
                    .attendance()
                    .count_between(&e.id, period.start(), period.end())
                    > 0
        })
        .collect();
    selected.sort_by(|a, b| a.id.cmp(&b.id));
    selected
}

/// Builds the monthly attendance sheet.
///
/// `now` pins both the current-month clipping (its date) and the in-progress
/// duration of records dated today (its time). The result depends only on the
/// arguments.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{MonthlyReportOptions, ReportSnapshot, build_monthly_report};
/// use attendance_engine::config::MonthlyColumns;
/// use attendance_engine::models::{Employee, ReportPeriod};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let employees = vec![Employee {
///     id: "EMP-0001".to_string(),
///     name: "Ada".to_string(),
///     date_of_joining: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     relieving_date: None,
/// }];
/// let snapshot = ReportSnapshot::new(employees, &[], &[], &[]);
/// let period = ReportPeriod::new(2025, 2).unwrap();
/// let now = NaiveDateTime::parse_from_str("2025-06-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let report = build_monthly_report(
///     &period,
///     &snapshot,
///     &MonthlyReportOptions::default(),
///     &MonthlyColumns::default(),
///     now,
/// );
///
/// assert_eq!(report.day_count(), 28);
/// assert_eq!(report.rows[0].totals.absent, 28.0);
/// ```
pub fn build_monthly_report(
    period: &ReportPeriod,
    snapshot: &ReportSnapshot,
    options: &MonthlyReportOptions,
    labels: &MonthlyColumns,
    now: NaiveDateTime,
) -> MonthlyAttendanceReport {
    let start = Instant::now();
    let days = days_in_scope(period, now.date());
    let employees = select_employees(period, snapshot, options);

    info!(
        year = period.year(),
        month = period.month(),
        employees = employees.len(),
        days = days.len(),
        "Building monthly attendance report"
    );

    let mut rows = Vec::with_capacity(employees.len());
    let mut warnings = Vec::new();
    for employee in employees {
        let (row, row_warnings) =
            build_employee_row(employee, &days, snapshot, now, &options.thresholds);
        rows.push(row);
        warnings.extend(row_warnings);
    }

    info!(
        rows = rows.len(),
        warnings = warnings.len(),
        duration_us = start.elapsed().as_micros() as u64,
        "Monthly attendance report built"
    );

    MonthlyAttendanceReport {
        period: *period,
        as_of: now,
        columns: build_columns(&days, labels),
        rows,
        warnings,
    }
}

/// Builds the monthly attendance sheet with one task per employee row.
///
/// The snapshot is shared read-only by every task. Rows are re-sorted by
/// employee identifier after collection, so the output equals that of
/// [`build_monthly_report`] for the same inputs.
///
/// # Errors
///
/// `CalculationError` if a row task panics or is cancelled.
pub async fn build_monthly_report_concurrent(
    period: ReportPeriod,
    snapshot: Arc<ReportSnapshot>,
    options: MonthlyReportOptions,
    labels: MonthlyColumns,
    now: NaiveDateTime,
) -> EngineResult<MonthlyAttendanceReport> {
    let start = Instant::now();
    let days: Arc<[NaiveDate]> = days_in_scope(&period, now.date()).into();
    let employees: Vec<Employee> = select_employees(&period, &snapshot, &options)
        .into_iter()
        .cloned()
        .collect();

    info!(
        year = period.year(),
        month = period.month(),
        employees = employees.len(),
        days = days.len(),
        "Building monthly attendance report concurrently"
    );

    let mut tasks = JoinSet::new();
    for employee in employees {
        let snapshot = Arc::clone(&snapshot);
        let days = Arc::clone(&days);
        let thresholds = options.thresholds;
        tasks.spawn(async move {
            build_employee_row(&employee, &days, &snapshot, now, &thresholds)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let result = joined.map_err(|e| EngineError::CalculationError {
            message: format!("employee row task failed: {}", e),
        })?;
        results.push(result);
    }
    results.sort_by(|(a, _), (b, _)| a.employee_id.cmp(&b.employee_id));

    let mut rows = Vec::with_capacity(results.len());
    let mut warnings = Vec::new();
    for (row, row_warnings) in results {
        rows.push(row);
        warnings.extend(row_warnings);
    }

    info!(
        rows = rows.len(),
        warnings = warnings.len(),
        duration_us = start.elapsed().as_micros() as u64,
        "Monthly attendance report built"
    );

    Ok(MonthlyAttendanceReport {
        period,
        as_of: now,
        columns: build_columns(&days, &labels),
        rows,
        warnings,
    })
}
