//! Day-status resolution.
//!
//! This module maps the facts known about one employee-day (attendance record,
//! holiday flag, leave flag, employment window flag) to a single
//! [`ResolvedDayStatus`]. Checks run in a fixed precedence order and the first
//! match wins:
//!
//! 1. Outside the employment window → `NotApplicable`
//! 2. Attendance record present → its status, with `Present` (and `Approved`)
//!    reclassified by worked duration
//! 3. Holiday → `Holiday`
//! 4. Approved full-day leave → `OnLeave`
//! 5. Otherwise → `Absent`

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, ResolvedDayStatus};

/// Worked seconds below which a present day counts as absent (4 hours).
pub const DEFAULT_HALF_DAY_FROM_SECONDS: i64 = 14_400;

/// Worked seconds above which a present day counts as a full day (8.5 hours).
pub const DEFAULT_PRESENT_ABOVE_SECONDS: i64 = 30_600;

/// Duration bands used to reclassify present days.
///
/// `< half_day_from_seconds` is absent, `half_day_from_seconds ..=
/// present_above_seconds` is a half day, anything longer is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationThresholds {
    /// Lower bound (inclusive) of the half-day band.
    pub half_day_from_seconds: i64,
    /// Upper bound (inclusive) of the half-day band.
    pub present_above_seconds: i64,
}

impl Default for DurationThresholds {
    fn default() -> Self {
        Self {
            half_day_from_seconds: DEFAULT_HALF_DAY_FROM_SECONDS,
            present_above_seconds: DEFAULT_PRESENT_ABOVE_SECONDS,
        }
    }
}

/// Everything known about one employee-day.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    /// The submitted attendance record for the day, if any.
    pub record: Option<&'a AttendanceRecord>,
    /// Whether the day is an org-wide holiday.
    pub is_holiday: bool,
    /// Whether approved full-day leave covers the day.
    pub is_on_leave: bool,
    /// Whether the day is inside the employment window.
    pub in_window: bool,
}

/// Classifies a worked duration into a day status.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{DurationThresholds, classify_by_duration};
/// use attendance_engine::models::ResolvedDayStatus;
///
/// let thresholds = DurationThresholds::default();
/// assert_eq!(classify_by_duration(12_600, &thresholds), ResolvedDayStatus::Absent);
/// assert_eq!(classify_by_duration(18_000, &thresholds), ResolvedDayStatus::HalfDay);
/// assert_eq!(classify_by_duration(32_400, &thresholds), ResolvedDayStatus::Present);
/// ```
pub fn classify_by_duration(seconds: i64, thresholds: &DurationThresholds) -> ResolvedDayStatus {
    if seconds < thresholds.half_day_from_seconds {
        ResolvedDayStatus::Absent
    } else if seconds <= thresholds.present_above_seconds {
        ResolvedDayStatus::HalfDay
    } else {
        ResolvedDayStatus::Present
    }
}

/// Computes the worked seconds of a record as of `now`.
///
/// A record dated today is measured against the current time of day instead
/// of its swipe-out, since the day is still in progress.
///
/// # Errors
///
/// `DataInconsistency` if swipe-in is missing, or swipe-out is missing on a
/// day that is not today.
pub fn worked_seconds(record: &AttendanceRecord, now: NaiveDateTime) -> EngineResult<i64> {
    let inconsistency = |message: &str| EngineError::DataInconsistency {
        employee_id: record.employee_id.clone(),
        date: record.date,
        message: message.to_string(),
    };

    let swipe_in = record
        .swipe_in
        .ok_or_else(|| inconsistency("present without swipe-in time"))?;

    let swipe_out = if record.date == now.date() {
        now.time()
    } else {
        record
            .swipe_out
            .ok_or_else(|| inconsistency("present without swipe-out time"))?
    };

    Ok(swipe_out.signed_duration_since(swipe_in).num_seconds())
}

/// Resolves one employee-day to a single status.
///
/// # Errors
///
/// `DataInconsistency` when a present record lacks the swipe times needed
/// to measure it. Callers are expected to degrade that day to `Absent` and
/// carry on with the rest of the report.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{DayContext, DurationThresholds, resolve_day_status};
/// use attendance_engine::models::ResolvedDayStatus;
/// use chrono::NaiveDateTime;
///
/// let now = NaiveDateTime::parse_from_str("2025-03-31 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let holiday_with_leave = DayContext {
///     record: None,
///     is_holiday: true,
///     is_on_leave: true,
///     in_window: true,
/// };
///
/// let status = resolve_day_status(&holiday_with_leave, now, &DurationThresholds::default()).unwrap();
/// assert_eq!(status, ResolvedDayStatus::Holiday);
/// ```
pub fn resolve_day_status(
    context: &DayContext<'_>,
    now: NaiveDateTime,
    thresholds: &DurationThresholds,
) -> EngineResult<ResolvedDayStatus> {
    if !context.in_window {
        return Ok(ResolvedDayStatus::NotApplicable);
    }

    if let Some(record) = context.record {
        let status = match record.status.normalized() {
            AttendanceStatus::Present => {
                classify_by_duration(worked_seconds(record, now)?, thresholds)
            }
            AttendanceStatus::Absent => ResolvedDayStatus::Absent,
            AttendanceStatus::HalfDay => ResolvedDayStatus::HalfDay,
            AttendanceStatus::OnLeave => ResolvedDayStatus::OnLeave,
            // `normalized` never yields Approved.
            AttendanceStatus::Approved => ResolvedDayStatus::Present,
        };
        return Ok(status);
    }

    if context.is_holiday {
        Ok(ResolvedDayStatus::Holiday)
    } else if context.is_on_leave {
        Ok(ResolvedDayStatus::OnLeave)
    } else {
        Ok(ResolvedDayStatus::Absent)
    }
}
