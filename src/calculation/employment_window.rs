//! Employment window checks.
//!
//! Two levels: whether an employee belongs in a month's report at all, and
//! whether a particular day of that month is applicable to them. An employee
//! who joins mid-month is in the report, with the days before joining blank.

use chrono::NaiveDate;

/// Returns true if `date` is inside `[join, relieving]` (open-ended when the
/// employee has not been relieved).
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::in_window;
/// use chrono::NaiveDate;
///
/// let join = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let relieve = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
///
/// assert!(!in_window(join, Some(relieve), NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()));
/// assert!(in_window(join, Some(relieve), NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()));
/// assert!(!in_window(join, Some(relieve), NaiveDate::from_ymd_opt(2025, 3, 21).unwrap()));
/// assert!(in_window(join, None, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()));
/// ```
pub fn in_window(join: NaiveDate, relieving: Option<NaiveDate>, date: NaiveDate) -> bool {
    date >= join && relieving.is_none_or(|relieving| date <= relieving)
}

/// Returns true if the employment window overlaps `[month_start, month_end]`.
pub fn employee_in_scope(
    join: NaiveDate,
    relieving: Option<NaiveDate>,
    month_start: NaiveDate,
    month_end: NaiveDate,
) -> bool {
    join <= month_end && relieving.is_none_or(|relieving| relieving >= month_start)
}
