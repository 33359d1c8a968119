//! Leave application model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approval state of a leave application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting approval.
    Open,
    /// Approved. Snapshots carry approved applications, so this is the default.
    #[default]
    Approved,
    /// Rejected by the approver.
    Rejected,
    /// Withdrawn after submission.
    Cancelled,
}

/// A leave application spanning an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// The employee requesting leave.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub from_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub to_date: NaiveDate,
    /// Whether this is a half-day application.
    #[serde(default)]
    pub half_day: bool,
    /// Approval state.
    #[serde(default)]
    pub status: LeaveStatus,
}

impl LeaveApplication {
    /// Returns true if the application resolves covered days as `OnLeave`.
    ///
    /// Half-day applications never do, even when approved: half-day leave is
    /// not modelled as leave by the resolver.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{LeaveApplication, LeaveStatus};
    /// use chrono::NaiveDate;
    ///
    /// let mut leave = LeaveApplication {
    ///     employee_id: "EMP-0001".to_string(),
    ///     from_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
    ///     to_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
    ///     half_day: false,
    ///     status: LeaveStatus::Approved,
    /// };
    /// assert!(leave.counts_as_full_leave());
    ///
    /// leave.half_day = true;
    /// assert!(!leave.counts_as_full_leave());
    /// ```
    pub fn counts_as_full_leave(&self) -> bool {
        self.status == LeaveStatus::Approved && !self.half_day
    }
}
