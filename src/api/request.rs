//! Request types for the attendance engine API.
//!
//! Each request carries the already-loaded snapshots the engine works on;
//! the API never fetches data itself.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calculation::AttendanceDetailFilters;
use crate::models::{AttendanceRecord, Employee, Holiday, LeaveApplication, ReportMonth};

/// Filters of the monthly attendance sheet.
///
/// `year` and `month` are optional at the wire level so a missing value can
/// be reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthlyAttendanceFilters {
    /// The report year.
    #[serde(default)]
    pub year: Option<i32>,
    /// The report month, as index (1-12) or English name.
    #[serde(default)]
    pub month: Option<ReportMonth>,
    /// Restrict the report to one employee.
    #[serde(default)]
    pub employee: Option<String>,
}

/// Request body for `POST /reports/monthly-attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAttendanceRequest {
    /// Report filters.
    #[serde(default)]
    pub filters: MonthlyAttendanceFilters,
    /// Employee snapshot.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Attendance snapshot.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Holiday snapshot.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    /// Leave snapshot.
    #[serde(default)]
    pub leave_applications: Vec<LeaveApplication>,
    /// Pins "now"; the server clock is used when omitted.
    #[serde(default)]
    pub as_of: Option<NaiveDateTime>,
    /// Overrides the configured no-records inclusion switch.
    #[serde(default)]
    pub include_employees_with_no_records: Option<bool>,
}

/// Request body for `POST /reports/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDetailRequest {
    /// Date range and optional employee.
    pub filters: AttendanceDetailFilters,
    /// Employee snapshot, used for display names.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Attendance snapshot.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

/// Request body for `POST /attendance/years`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceYearsRequest {
    /// Attendance snapshot.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Pins "now"; the server clock is used when omitted.
    #[serde(default)]
    pub as_of: Option<NaiveDateTime>,
}
