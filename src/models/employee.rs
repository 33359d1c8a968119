//! Employee model.
//!
//! This module defines the [`Employee`] struct as supplied by the employee
//! snapshot: identity plus the employment window bounds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{employee_in_scope, in_window};

/// Represents an employee whose attendance is being reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The date the employee joined.
    pub date_of_joining: NaiveDate,
    /// The last working date, if the employee has been relieved.
    #[serde(default)]
    pub relieving_date: Option<NaiveDate>,
}

impl Employee {
    /// Returns true if `date` falls inside the employee's employment window.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "EMP-0001".to_string(),
    ///     name: "Asha Rao".to_string(),
    ///     date_of_joining: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
    ///     relieving_date: None,
    /// };
    /// assert!(!employee.is_employed_on(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()));
    /// assert!(employee.is_employed_on(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));
    /// ```
    pub fn is_employed_on(&self, date: NaiveDate) -> bool {
        in_window(self.date_of_joining, self.relieving_date, date)
    }

    /// Returns true if the employment window overlaps `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        employee_in_scope(self.date_of_joining, self.relieving_date, start, end)
    }
}
