//! Report output models for the attendance engine.
//!
//! This module contains the [`MonthlyAttendanceReport`] and the types it is
//! made of (resolved day statuses, totals, rows, columns, warnings), plus the
//! [`AttendanceDetailReport`] listing of individual swipe records.

use std::fmt;
use std::ops::Add;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ReportPeriod;

/// The single status an employee-day resolves to.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ResolvedDayStatus;
///
/// assert_eq!(ResolvedDayStatus::Holiday.code(), "HL");
/// assert_eq!(ResolvedDayStatus::NotApplicable.code(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedDayStatus {
    /// Attended for longer than the half-day ceiling.
    Present,
    /// Absent, or attended for less than the half-day floor.
    Absent,
    /// Partial attendance, split evenly between present and absent.
    HalfDay,
    /// Covered by approved full-day leave or recorded as on leave.
    OnLeave,
    /// An org-wide holiday with no attendance record.
    Holiday,
    /// Outside the employee's employment window; rendered blank.
    #[serde(rename = "none")]
    NotApplicable,
}

impl ResolvedDayStatus {
    /// The grid code rendered for this status.
    pub fn code(self) -> &'static str {
        match self {
            ResolvedDayStatus::Present => "P",
            ResolvedDayStatus::Absent => "A",
            ResolvedDayStatus::HalfDay => "H",
            ResolvedDayStatus::OnLeave => "L",
            ResolvedDayStatus::Holiday => "HL",
            ResolvedDayStatus::NotApplicable => "",
        }
    }

    /// What this day adds to the monthly totals.
    ///
    /// Holidays count as present; a half day splits 0.5/0.5.
    pub fn contribution(self) -> MonthlyTotals {
        match self {
            ResolvedDayStatus::Present | ResolvedDayStatus::Holiday => MonthlyTotals {
                present: 1.0,
                ..MonthlyTotals::default()
            },
            ResolvedDayStatus::Absent => MonthlyTotals {
                absent: 1.0,
                ..MonthlyTotals::default()
            },
            ResolvedDayStatus::OnLeave => MonthlyTotals {
                leave: 1.0,
                ..MonthlyTotals::default()
            },
            ResolvedDayStatus::HalfDay => MonthlyTotals {
                present: 0.5,
                absent: 0.5,
                leave: 0.0,
            },
            ResolvedDayStatus::NotApplicable => MonthlyTotals::default(),
        }
    }
}

impl fmt::Display for ResolvedDayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedDayStatus::Present => write!(f, "Present"),
            ResolvedDayStatus::Absent => write!(f, "Absent"),
            ResolvedDayStatus::HalfDay => write!(f, "Half Day"),
            ResolvedDayStatus::OnLeave => write!(f, "On Leave"),
            ResolvedDayStatus::Holiday => write!(f, "Holiday"),
            ResolvedDayStatus::NotApplicable => write!(f, "None"),
        }
    }
}

/// Fractional monthly totals for one employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Days present (holidays and half days included).
    pub present: f64,
    /// Days on leave.
    pub leave: f64,
    /// Days absent (half days included).
    pub absent: f64,
}

impl Add for MonthlyTotals {
    type Output = MonthlyTotals;

    fn add(self, rhs: MonthlyTotals) -> MonthlyTotals {
        MonthlyTotals {
            present: self.present + rhs.present,
            leave: self.leave + rhs.leave,
            absent: self.absent + rhs.absent,
        }
    }
}

/// A single cell of the rendered report table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportCell {
    /// A text cell.
    Text(String),
    /// A numeric cell.
    Number(f64),
}

/// The kind of data a report column holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Plain text.
    Data,
    /// A reference to a record of the named document type.
    Link(String),
    /// A floating point number.
    Float,
    /// A calendar date.
    Date,
    /// A time of day or a duration.
    Time,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Data => Ok(()),
            ColumnType::Link(doctype) => write!(f, "Link/{}", doctype),
            ColumnType::Float => write!(f, "Float"),
            ColumnType::Date => write!(f, "Date"),
            ColumnType::Time => write!(f, "Time"),
        }
    }
}

/// A column header with a display-width hint.
///
/// `Display` renders the `Label:Type:Width` descriptor used by report
/// front ends.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{ColumnType, ReportColumn};
///
/// let column = ReportColumn::new("Total Present", ColumnType::Float, 80);
/// assert_eq!(column.to_string(), "Total Present:Float:80");
///
/// let day = ReportColumn::new("1", ColumnType::Data, 20);
/// assert_eq!(day.to_string(), "1::20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportColumn {
    /// The header label.
    pub label: String,
    /// The column data type.
    pub field_type: ColumnType,
    /// Display width hint in pixels.
    pub width: u32,
}

impl ReportColumn {
    /// Creates a column.
    pub fn new(label: impl Into<String>, field_type: ColumnType, width: u32) -> Self {
        Self {
            label: label.into(),
            field_type,
            width,
        }
    }
}

impl fmt::Display for ReportColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.label, self.field_type, self.width)
    }
}

/// A recoverable problem found while building a report.
///
/// Warnings never abort the report; the affected day is degraded and the
/// warning explains why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
    /// The employee concerned.
    pub employee_id: String,
    /// The day concerned.
    pub date: NaiveDate,
}

/// One output row: an employee's status grid and totals for the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeMonthRow {
    /// The employee identifier.
    pub employee_id: String,
    /// The employee display name.
    pub employee_name: String,
    /// The employee's joining date.
    pub date_of_joining: NaiveDate,
    /// One status code per in-scope day, in day order.
    pub codes: Vec<String>,
    /// Monthly totals folded over the same days as `codes`.
    pub totals: MonthlyTotals,
}

impl EmployeeMonthRow {
    /// Renders the row as table cells, in column order.
    pub fn cells(&self) -> Vec<ReportCell> {
        let mut cells = Vec::with_capacity(self.codes.len() + 6);
        cells.push(ReportCell::Text(self.employee_id.clone()));
        cells.push(ReportCell::Text(self.employee_name.clone()));
        cells.push(ReportCell::Text(self.date_of_joining.to_string()));
        cells.extend(self.codes.iter().cloned().map(ReportCell::Text));
        cells.push(ReportCell::Number(self.totals.present));
        cells.push(ReportCell::Number(self.totals.leave));
        cells.push(ReportCell::Number(self.totals.absent));
        cells
    }
}

/// The monthly attendance sheet.
///
/// The report is a pure function of its inputs: building it twice from the
/// same snapshots and `as_of` yields equal values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyAttendanceReport {
    /// The reported month.
    pub period: ReportPeriod,
    /// The "now" the report was resolved against.
    pub as_of: NaiveDateTime,
    /// Column headers: fixed employee columns, one per in-scope day, totals.
    pub columns: Vec<ReportColumn>,
    /// Rows sorted by employee identifier.
    pub rows: Vec<EmployeeMonthRow>,
    /// Recoverable data problems encountered while resolving.
    pub warnings: Vec<ReportWarning>,
}

impl MonthlyAttendanceReport {
    /// Number of day columns in the grid.
    pub fn day_count(&self) -> usize {
        // Three fixed leading columns and three trailing total columns.
        self.columns.len().saturating_sub(6)
    }

    /// Renders every row as table cells.
    pub fn to_table(&self) -> Vec<Vec<ReportCell>> {
        self.rows.iter().map(EmployeeMonthRow::cells).collect()
    }
}

/// One swipe record in the attendance detail listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDetailRow {
    /// The employee identifier.
    pub employee_id: String,
    /// The employee display name (falls back to the identifier).
    pub employee_name: String,
    /// The attendance date.
    pub date: NaiveDate,
    /// Clock-in time.
    pub swipe_in: Option<NaiveTime>,
    /// Clock-out time.
    pub swipe_out: Option<NaiveTime>,
    /// Seconds between the swipes, when both exist.
    pub total_seconds: Option<i64>,
    /// `total_seconds` in hours, rounded to two decimal places.
    pub worked_hours: Option<Decimal>,
}

impl AttendanceDetailRow {
    /// Renders the row as table cells, in column order.
    pub fn cells(&self) -> Vec<ReportCell> {
        let time_cell = |time: Option<NaiveTime>| {
            ReportCell::Text(time.map(|t| t.to_string()).unwrap_or_default())
        };
        vec![
            ReportCell::Text(self.employee_name.clone()),
            ReportCell::Text(self.date.to_string()),
            time_cell(self.swipe_in),
            time_cell(self.swipe_out),
            ReportCell::Text(
                self.total_seconds
                    .map(format_duration)
                    .unwrap_or_default(),
            ),
        ]
    }
}

/// Formats a signed number of seconds as `H:MM:SS`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::format_duration;
///
/// assert_eq!(format_duration(30_600), "8:30:00");
/// assert_eq!(format_duration(-90), "-0:01:30");
/// ```
pub fn format_duration(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let seconds = seconds.unsigned_abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// The attendance detail listing for a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDetailReport {
    /// First day of the range (inclusive).
    pub from_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub to_date: NaiveDate,
    /// Column headers.
    pub columns: Vec<ReportColumn>,
    /// Rows ordered by employee, then date.
    pub rows: Vec<AttendanceDetailRow>,
}

impl AttendanceDetailReport {
    /// Renders every row as table cells.
    pub fn to_table(&self) -> Vec<Vec<ReportCell>> {
        self.rows.iter().map(AttendanceDetailRow::cells).collect()
    }
}
