//! Calculation logic for the attendance engine.
//!
//! This module contains the pure engine: the calendar utility, the
//! employment window filter, day-status resolution with duration
//! reclassification, monthly aggregation, snapshot indexes, the monthly
//! report row builder and the attendance detail listing.

mod aggregation;
mod attendance_detail;
mod calendar;
mod day_status;
mod employment_window;
mod monthly_report;
mod snapshot;

pub use aggregation::{DayAggregate, aggregate_month};
pub use attendance_detail::{AttendanceDetailFilters, build_attendance_detail};
pub use calendar::{attendance_years, days_in_month, days_in_scope, days_in_scope_for};
pub use day_status::{
    DEFAULT_HALF_DAY_FROM_SECONDS, DEFAULT_PRESENT_ABOVE_SECONDS, DayContext, DurationThresholds,
    classify_by_duration, resolve_day_status, worked_seconds,
};
pub use employment_window::{employee_in_scope, in_window};
pub use monthly_report::{
    DATA_INCONSISTENCY_WARNING, MonthlyReportOptions, build_columns, build_employee_row,
    build_monthly_report, build_monthly_report_concurrent,
};
pub use snapshot::{AttendanceIndex, HolidayCalendar, LeaveCalendar, ReportSnapshot};
