//! Calendar utilities.
//!
//! This module produces the in-scope day list for a report month, clipped at
//! "today" when the month is current, and the list of years with attendance.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, ReportPeriod};

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// `InvalidInput` if `month` is outside 1-12 or the year is out of chrono's
/// range.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert_eq!(days_in_month(2025, 2).unwrap(), 28);
/// assert_eq!(days_in_month(2025, 12).unwrap(), 31);
/// assert!(days_in_month(2025, 0).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::invalid_input(
            "month",
            format!("{} is outside 1-12", month),
        ));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| EngineError::invalid_input("year", format!("{} is out of range", year)))?;

    match first.checked_add_months(Months::new(1)) {
        Some(next) => Ok((next - first).num_days() as u32),
        // December of the last year chrono represents.
        None => Ok(31),
    }
}

/// Returns the in-scope days of `period`, ascending.
///
/// Stops at `min(last day of month, today)`. A month that starts after
/// `today` yields no days.
pub fn days_in_scope(period: &ReportPeriod, today: NaiveDate) -> Vec<NaiveDate> {
    let last = period.end().min(today);
    period
        .start()
        .iter_days()
        .take_while(|day| *day <= last)
        .collect()
}

/// Validates `year`/`month` and returns the in-scope days.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::days_in_scope_for;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
///
/// // Current month stops at today.
/// assert_eq!(days_in_scope_for(2025, 3, today).unwrap().len(), 12);
/// // Past month is complete.
/// assert_eq!(days_in_scope_for(2025, 2, today).unwrap().len(), 28);
/// // Future month is empty.
/// assert!(days_in_scope_for(2025, 4, today).unwrap().is_empty());
/// ```
pub fn days_in_scope_for(year: i32, month: u32, today: NaiveDate) -> EngineResult<Vec<NaiveDate>> {
    let period = ReportPeriod::new(year, month)?;
    Ok(days_in_scope(&period, today))
}

/// Returns the distinct years with attendance, newest first.
///
/// Falls back to the current year when there is no attendance at all, so a
/// year picker always has an entry.
pub fn attendance_years(records: &[AttendanceRecord], today: NaiveDate) -> Vec<i32> {
    let mut years: Vec<i32> = records.iter().map(|r| r.date.year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();

    if years.is_empty() {
        years.push(today.year());
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, DocStatus};
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_on(day: NaiveDate) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "EMP-0001".to_string(),
            date: day,
            status: AttendanceStatus::Absent,
            swipe_in: None,
            swipe_out: None,
            docstatus: DocStatus::Submitted,
        }
    }

    // ==========================================================================
    // CAL-001: Past month renders every day
    // ==========================================================================
    #[test]
    fn test_cal_001_past_month_is_complete() {
        let days = days_in_scope_for(2025, 1, date(2025, 6, 1)).unwrap();
        assert_eq!(days.len(), 31);
        assert_eq!(days[0], date(2025, 1, 1));
        assert_eq!(days[30], date(2025, 1, 31));
    }

    // ==========================================================================
    // CAL-002: Current month stops at today
    // ==========================================================================
    #[test]
    fn test_cal_002_current_month_clipped_at_today() {
        let days = days_in_scope_for(2025, 3, date(2025, 3, 17)).unwrap();
        assert_eq!(days.len(), 17);
        assert_eq!(*days.last().unwrap(), date(2025, 3, 17));
    }

    // ==========================================================================
    // CAL-003: Future month is empty
    // ==========================================================================
    #[test]
    fn test_cal_003_future_month_is_empty() {
        assert!(days_in_scope_for(2026, 1, date(2025, 12, 31)).unwrap().is_empty());
    }

    // ==========================================================================
    // CAL-004: Month outside 1-12 is InvalidInput
    // ==========================================================================
    #[test]
    fn test_cal_004_invalid_month() {
        for month in [0, 13, 99] {
            assert!(matches!(
                days_in_scope_for(2025, month, date(2025, 1, 1)),
                Err(EngineError::InvalidInput { .. })
            ));
        }
    }

    // ==========================================================================
    // CAL-005: Unrepresentable year is InvalidInput, not an overflow
    // ==========================================================================
    #[test]
    fn test_cal_005_year_out_of_range() {
        for month in [1, 11, 12] {
            assert!(matches!(
                days_in_month(i32::MAX, month),
                Err(EngineError::InvalidInput { ref field, .. }) if field == "year"
            ));
        }
        assert!(matches!(
            days_in_month(i32::MIN, 12),
            Err(EngineError::InvalidInput { ref field, .. }) if field == "year"
        ));
        assert!(matches!(
            ReportPeriod::new(i32::MAX, 12),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_last_representable_december() {
        let last_year = NaiveDate::MAX.year();
        assert_eq!(days_in_month(last_year, 12).unwrap(), 31);
        assert_eq!(days_in_month(last_year, 11).unwrap(), 30);
        assert_eq!(days_in_month(NaiveDate::MIN.year(), 1).unwrap(), 31);
    }

    #[test]
    fn test_first_day_of_month_as_today() {
        let days = days_in_scope_for(2025, 3, date(2025, 3, 1)).unwrap();
        assert_eq!(days, vec![date(2025, 3, 1)]);
    }

    #[test]
    fn test_leap_february() {
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
    }

    #[test]
    fn test_attendance_years_distinct_newest_first() {
        let records = vec![
            record_on(date(2023, 5, 1)),
            record_on(date(2025, 1, 2)),
            record_on(date(2023, 7, 9)),
            record_on(date(2024, 2, 2)),
        ];
        assert_eq!(attendance_years(&records, date(2025, 6, 1)), vec![2025, 2024, 2023]);
    }

    #[test]
    fn test_attendance_years_defaults_to_current_year() {
        assert_eq!(attendance_years(&[], date(2025, 6, 1)), vec![2025]);
    }

    proptest! {
        #[test]
        fn prop_day_count_matches_clip(year in 1990i32..2100, month in 1u32..=12, today_offset in -40i64..80) {
            let period = ReportPeriod::new(year, month).unwrap();
            let today = period.start() + chrono::Duration::days(today_offset);
            let days = days_in_scope(&period, today);

            let expected = if today < period.start() {
                0
            } else if today > period.end() {
                period.days_in_month() as usize
            } else {
                today.day() as usize
            };
            prop_assert_eq!(days.len(), expected);
            prop_assert!(days.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
