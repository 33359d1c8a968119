//! Core data models for the attendance engine.
//!
//! This module contains the input snapshot types and the report outputs.

mod attendance;
mod employee;
mod leave;
mod report;
mod report_period;

pub use attendance::{AttendanceRecord, AttendanceStatus, DocStatus};
pub use employee::Employee;
pub use leave::{LeaveApplication, LeaveStatus};
pub use report::{
    AttendanceDetailReport, AttendanceDetailRow, ColumnType, EmployeeMonthRow,
    MonthlyAttendanceReport, MonthlyTotals, ReportCell, ReportColumn, ReportWarning,
    ResolvedDayStatus, format_duration,
};
pub use report_period::{Holiday, ReportMonth, ReportPeriod};
