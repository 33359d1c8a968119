//! Attendance record model and related types.
//!
//! This module defines the swipe-based [`AttendanceRecord`] together with its
//! raw [`AttendanceStatus`] and document lifecycle [`DocStatus`].

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The raw status recorded on an attendance document.
///
/// Display spellings (`"Half Day"`, `"On Leave"`) are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Marked present; still subject to the worked-duration check.
    #[serde(alias = "Present")]
    Present,
    /// Marked absent.
    #[serde(alias = "Absent")]
    Absent,
    /// Marked as a half day.
    #[serde(alias = "Half Day")]
    HalfDay,
    /// Marked as on leave.
    #[serde(alias = "On Leave")]
    OnLeave,
    /// Approved attendance, equivalent to `Present`.
    #[serde(alias = "Approved")]
    Approved,
}

impl AttendanceStatus {
    /// Folds `Approved` into `Present`; every other status is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::AttendanceStatus;
    ///
    /// assert_eq!(AttendanceStatus::Approved.normalized(), AttendanceStatus::Present);
    /// assert_eq!(AttendanceStatus::HalfDay.normalized(), AttendanceStatus::HalfDay);
    /// ```
    pub fn normalized(self) -> Self {
        match self {
            AttendanceStatus::Approved => AttendanceStatus::Present,
            other => other,
        }
    }
}

/// Document lifecycle state of a source record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocStatus {
    /// Saved but not finalized.
    Draft,
    /// Finalized. Snapshots are fetched submitted-only, so this is the default.
    #[default]
    Submitted,
    /// Cancelled after submission.
    Cancelled,
}

/// A single day's attendance for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The raw recorded status.
    pub status: AttendanceStatus,
    /// Clock-in time on `date`.
    #[serde(default)]
    pub swipe_in: Option<NaiveTime>,
    /// Clock-out time on `date`.
    #[serde(default)]
    pub swipe_out: Option<NaiveTime>,
    /// Document lifecycle state.
    #[serde(default)]
    pub docstatus: DocStatus,
}

impl AttendanceRecord {
    /// Returns true if the record is finalized and may influence resolution.
    pub fn is_submitted(&self) -> bool {
        self.docstatus == DocStatus::Submitted
    }

    /// Seconds between swipe-in and swipe-out, when both are recorded.
    ///
    /// Unlike the resolver's worked-duration check this never substitutes
    /// the current time; it reports exactly what was swiped.
    pub fn recorded_seconds(&self) -> Option<i64> {
        match (self.swipe_in, self.swipe_out) {
            (Some(swipe_in), Some(swipe_out)) => {
                Some(swipe_out.signed_duration_since(swipe_in).num_seconds())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn create_test_record(status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "EMP-0001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            status,
            swipe_in: Some(time(9, 0)),
            swipe_out: Some(time(18, 0)),
            docstatus: DocStatus::Submitted,
        }
    }

    #[test]
    fn test_deserialize_record_with_display_status() {
        let json = r#"{
            "employee_id": "EMP-0001",
            "date": "2025-03-04",
            "status": "Half Day",
            "swipe_in": "09:00:00",
            "swipe_out": "13:30:00"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, AttendanceStatus::HalfDay);
        assert_eq!(record.swipe_in, Some(time(9, 0)));
        assert_eq!(record.docstatus, DocStatus::Submitted);
    }

    #[test]
    fn test_deserialize_snake_case_status_and_draft() {
        let json = r#"{
            "employee_id": "EMP-0001",
            "date": "2025-03-04",
            "status": "on_leave",
            "docstatus": "draft"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, AttendanceStatus::OnLeave);
        assert!(!record.is_submitted());
        assert!(record.swipe_in.is_none());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::HalfDay).unwrap(),
            "\"half_day\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
    }

    #[test]
    fn test_normalized_only_changes_approved() {
        assert_eq!(AttendanceStatus::Approved.normalized(), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::Present.normalized(), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::Absent.normalized(), AttendanceStatus::Absent);
        assert_eq!(AttendanceStatus::OnLeave.normalized(), AttendanceStatus::OnLeave);
    }

    #[test]
    fn test_recorded_seconds() {
        let record = create_test_record(AttendanceStatus::Present);
        assert_eq!(record.recorded_seconds(), Some(9 * 3600));

        let mut missing_out = record.clone();
        missing_out.swipe_out = None;
        assert_eq!(missing_out.recorded_seconds(), None);
    }

    #[test]
    fn test_cancelled_record_is_not_submitted() {
        let mut record = create_test_record(AttendanceStatus::Present);
        record.docstatus = DocStatus::Cancelled;
        assert!(!record.is_submitted());
    }
}
