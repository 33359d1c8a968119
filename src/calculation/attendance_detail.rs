//! Attendance detail listing.
//!
//! One row per submitted attendance record in a date range, with the swipe
//! times and the time between them.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::DetailColumns;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceDetailReport, AttendanceDetailRow, AttendanceRecord, ColumnType, Employee,
    ReportColumn,
};

/// Filters for the detail listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDetailFilters {
    /// First day of the range (inclusive).
    pub from_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub to_date: NaiveDate,
    /// Restrict the listing to one employee.
    #[serde(default)]
    pub employee: Option<String>,
}

fn detail_columns(labels: &DetailColumns) -> Vec<ReportColumn> {
    vec![
        ReportColumn::new(
            labels.employee_name.label.clone(),
            ColumnType::Data,
            labels.employee_name.width,
        ),
        ReportColumn::new(labels.date.label.clone(), ColumnType::Date, labels.date.width),
        ReportColumn::new(
            labels.in_time.label.clone(),
            ColumnType::Time,
            labels.in_time.width,
        ),
        ReportColumn::new(
            labels.out_time.label.clone(),
            ColumnType::Time,
            labels.out_time.width,
        ),
        ReportColumn::new(
            labels.total_time.label.clone(),
            ColumnType::Data,
            labels.total_time.width,
        ),
    ]
}

fn worked_hours(seconds: i64) -> Decimal {
    (Decimal::from(seconds) / Decimal::from(3600)).round_dp(2)
}

/// Builds the detail listing for the filtered range.
///
/// Rows are ordered by employee, then date. The employee name falls back to
/// the identifier when the employee is not in the snapshot.
///
/// # Errors
///
/// `InvalidInput` if `from_date` is after `to_date`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{AttendanceDetailFilters, build_attendance_detail};
/// use attendance_engine::config::DetailColumns;
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus, DocStatus};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// let records = vec![AttendanceRecord {
///     employee_id: "EMP-0001".to_string(),
///     date,
///     status: AttendanceStatus::Present,
///     swipe_in: NaiveTime::from_hms_opt(9, 0, 0),
///     swipe_out: NaiveTime::from_hms_opt(17, 45, 0),
///     docstatus: DocStatus::Submitted,
/// }];
/// let filters = AttendanceDetailFilters { from_date: date, to_date: date, employee: None };
///
/// let report = build_attendance_detail(&filters, &[], &records, &DetailColumns::default()).unwrap();
/// assert_eq!(report.rows[0].employee_name, "EMP-0001");
/// assert_eq!(report.rows[0].worked_hours, Some(Decimal::new(875, 2)));
/// ```
pub fn build_attendance_detail(
    filters: &AttendanceDetailFilters,
    employees: &[Employee],
    records: &[AttendanceRecord],
    labels: &DetailColumns,
) -> EngineResult<AttendanceDetailReport> {
    if filters.from_date > filters.to_date {
        return Err(EngineError::invalid_input(
            "from_date",
            format!(
                "from_date {} is after to_date {}",
                filters.from_date, filters.to_date
            ),
        ));
    }

    let mut names: HashMap<&str, &str> = HashMap::with_capacity(employees.len());
    for employee in employees {
        names
            .entry(employee.id.as_str())
            .or_insert(employee.name.as_str());
    }

    let mut rows: Vec<AttendanceDetailRow> = records
        .iter()
        .filter(|r| r.is_submitted())
        .filter(|r| r.date >= filters.from_date && r.date <= filters.to_date)
        .filter(|r| {
            filters
                .employee
                .as_deref()
                .is_none_or(|id| id == r.employee_id)
        })
        .map(|r| {
            let total_seconds = r.recorded_seconds();
            AttendanceDetailRow {
                employee_id: r.employee_id.clone(),
                employee_name: names
                    .get(r.employee_id.as_str())
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| r.employee_id.clone()),
                date: r.date,
                swipe_in: r.swipe_in,
                swipe_out: r.swipe_out,
                total_seconds,
                worked_hours: total_seconds.map(worked_hours),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.employee_id
            .cmp(&b.employee_id)
            .then_with(|| a.date.cmp(&b.date))
    });

    info!(
        from_date = %filters.from_date,
        to_date = %filters.to_date,
        rows = rows.len(),
        "Built attendance detail listing"
    );

    Ok(AttendanceDetailReport {
        from_date: filters.from_date,
        to_date: filters.to_date,
        columns: detail_columns(labels),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, DocStatus};
    use chrono::NaiveTime;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn record(
        id: &str,
        date: &str,
        swipe_in: Option<&str>,
        swipe_out: Option<&str>,
        docstatus: DocStatus,
    ) -> AttendanceRecord {
        let time = |t: &str| NaiveTime::parse_from_str(t, "%H:%M").unwrap();
        AttendanceRecord {
            employee_id: id.to_string(),
            date: make_date(date),
            status: AttendanceStatus::Present,
            swipe_in: swipe_in.map(time),
            swipe_out: swipe_out.map(time),
            docstatus,
        }
    }

    fn filters(from: &str, to: &str, employee: Option<&str>) -> AttendanceDetailFilters {
        AttendanceDetailFilters {
            from_date: make_date(from),
            to_date: make_date(to),
            employee: employee.map(str::to_string),
        }
    }

    fn employees() -> Vec<Employee> {
        vec![Employee {
            id: "EMP-0001".to_string(),
            name: "Ada Lovelace".to_string(),
            date_of_joining: make_date("2020-01-01"),
            relieving_date: None,
        }]
    }

    #[test]
    fn test_from_after_to_is_invalid() {
        let err = build_attendance_detail(
            &filters("2025-03-10", "2025-03-01", None),
            &[],
            &[],
            &DetailColumns::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput { ref field, .. } if field == "from_date"));
    }

    #[test]
    fn test_rows_filtered_and_sorted() {
        let records = vec![
            record("EMP-0002", "2025-03-02", Some("09:00"), Some("17:00"), DocStatus::Submitted),
            record("EMP-0001", "2025-03-03", Some("09:00"), Some("17:00"), DocStatus::Submitted),
            record("EMP-0001", "2025-03-01", Some("09:00"), Some("17:00"), DocStatus::Submitted),
            record("EMP-0001", "2025-03-02", Some("09:00"), Some("17:00"), DocStatus::Draft),
            record("EMP-0001", "2025-04-01", Some("09:00"), Some("17:00"), DocStatus::Submitted),
        ];

        let report = build_attendance_detail(
            &filters("2025-03-01", "2025-03-31", None),
            &employees(),
            &records,
            &DetailColumns::default(),
        )
        .unwrap();

        let keys: Vec<(&str, NaiveDate)> = report
            .rows
            .iter()
            .map(|r| (r.employee_id.as_str(), r.date))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("EMP-0001", make_date("2025-03-01")),
                ("EMP-0001", make_date("2025-03-03")),
                ("EMP-0002", make_date("2025-03-02")),
            ]
        );
        assert_eq!(report.rows[0].employee_name, "Ada Lovelace");
        assert_eq!(report.rows[2].employee_name, "EMP-0002");
    }

    #[test]
    fn test_employee_filter() {
        let records = vec![
            record("EMP-0001", "2025-03-01", Some("09:00"), Some("17:00"), DocStatus::Submitted),
            record("EMP-0002", "2025-03-01", Some("09:00"), Some("17:00"), DocStatus::Submitted),
        ];

        let report = build_attendance_detail(
            &filters("2025-03-01", "2025-03-01", Some("EMP-0002")),
            &employees(),
            &records,
            &DetailColumns::default(),
        )
        .unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].employee_id, "EMP-0002");
    }

    #[test]
    fn test_total_time_and_hours() {
        let records = vec![
            record("EMP-0001", "2025-03-01", Some("09:00"), Some("17:20"), DocStatus::Submitted),
            record("EMP-0001", "2025-03-02", Some("09:00"), None, DocStatus::Submitted),
        ];

        let report = build_attendance_detail(
            &filters("2025-03-01", "2025-03-02", None),
            &employees(),
            &records,
            &DetailColumns::default(),
        )
        .unwrap();

        assert_eq!(report.rows[0].total_seconds, Some(30_000));
        assert_eq!(report.rows[0].worked_hours, Some(Decimal::new(833, 2)));
        assert_eq!(report.rows[1].total_seconds, None);
        assert_eq!(report.rows[1].worked_hours, None);

        let table = report.to_table();
        assert_eq!(
            table[0],
            vec![
                crate::models::ReportCell::Text("Ada Lovelace".to_string()),
                crate::models::ReportCell::Text("2025-03-01".to_string()),
                crate::models::ReportCell::Text("09:00:00".to_string()),
                crate::models::ReportCell::Text("17:20:00".to_string()),
                crate::models::ReportCell::Text("8:20:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_columns() {
        let report = build_attendance_detail(
            &filters("2025-03-01", "2025-03-01", None),
            &[],
            &[],
            &DetailColumns::default(),
        )
        .unwrap();
        let descriptors: Vec<String> = report.columns.iter().map(ToString::to_string).collect();
        assert_eq!(
            descriptors,
            vec![
                "Employee Name::140",
                "Date:Date:100",
                "In Time:Time:100",
                "Out Time:Time:100",
                "Total Time::100",
            ]
        );
        assert!(report.rows.is_empty());
    }
}
