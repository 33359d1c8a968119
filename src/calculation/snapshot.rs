//! Indexed input snapshots.
//!
//! The four input snapshots (employees, attendance, holidays, leave) are
//! indexed once into a [`ReportSnapshot`] before any resolution starts, so
//! every per-day lookup is a map or set query rather than a list scan, and
//! every row sees the same "as of" view.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::models::{AttendanceRecord, Employee, Holiday, LeaveApplication};

/// Set of org-wide holiday dates.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Builds the calendar from a holiday list.
    pub fn from_holidays(holidays: &[Holiday]) -> Self {
        Self {
            dates: holidays.iter().map(|h| h.date).collect(),
        }
    }

    /// Returns true if `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Per-employee approved full-day leave, as merged sorted intervals.
#[derive(Debug, Clone, Default)]
pub struct LeaveCalendar {
    by_employee: HashMap<String, Vec<(NaiveDate, NaiveDate)>>,
}

impl LeaveCalendar {
    /// Builds the calendar, keeping only applications that count as full leave.
    pub fn from_applications(applications: &[LeaveApplication]) -> Self {
        let mut by_employee: HashMap<String, Vec<(NaiveDate, NaiveDate)>> = HashMap::new();
        for application in applications
            .iter()
            .filter(|a| a.counts_as_full_leave() && a.from_date <= a.to_date)
        {
            by_employee
                .entry(application.employee_id.clone())
                .or_default()
                .push((application.from_date, application.to_date));
        }

        for intervals in by_employee.values_mut() {
            *intervals = merge_intervals(std::mem::take(intervals));
        }

        Self { by_employee }
    }

    /// Returns true if approved full-day leave covers `date` for the employee.
    pub fn covers(&self, employee_id: &str, date: NaiveDate) -> bool {
        let Some(intervals) = self.by_employee.get(employee_id) else {
            return false;
        };
        let idx = intervals.partition_point(|(from, _)| *from <= date);
        idx > 0 && intervals[idx - 1].1 >= date
    }
}

fn merge_intervals(mut intervals: Vec<(NaiveDate, NaiveDate)>) -> Vec<(NaiveDate, NaiveDate)> {
    intervals.sort_unstable();
    let mut merged: Vec<(NaiveDate, NaiveDate)> = Vec::with_capacity(intervals.len());
    for (from, to) in intervals {
        match merged.last_mut() {
            Some(last) if from <= last.1.succ_opt().unwrap_or(last.1) => {
                last.1 = last.1.max(to);
            }
            _ => merged.push((from, to)),
        }
    }
    merged
}

/// Submitted attendance keyed by employee, then date.
///
/// When the snapshot holds more than one record for an employee-day, the one
/// appearing last wins.
#[derive(Debug, Clone, Default)]
pub struct AttendanceIndex {
    by_employee: HashMap<String, BTreeMap<NaiveDate, AttendanceRecord>>,
}

impl AttendanceIndex {
    /// Indexes the submitted records of `records`.
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let mut by_employee: HashMap<String, BTreeMap<NaiveDate, AttendanceRecord>> =
            HashMap::new();
        for record in records.iter().filter(|r| r.is_submitted()) {
            by_employee
                .entry(record.employee_id.clone())
                .or_default()
                .insert(record.date, record.clone());
        }
        Self { by_employee }
    }

    /// The record for an employee-day, if any.
    pub fn get(&self, employee_id: &str, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.by_employee.get(employee_id)?.get(&date)
    }

    /// Number of records the employee has in `[start, end]`.
    pub fn count_between(&self, employee_id: &str, start: NaiveDate, end: NaiveDate) -> usize {
        if start > end {
            return 0;
        }
        self.by_employee
            .get(employee_id)
            .map(|days| days.range(start..=end).count())
            .unwrap_or(0)
    }
}

/// The fully materialized inputs of one report run.
#[derive(Debug, Clone, Default)]
pub struct ReportSnapshot {
    employees: Vec<Employee>,
    attendance: AttendanceIndex,
    holidays: HolidayCalendar,
    leave: LeaveCalendar,
}

impl ReportSnapshot {
    /// Indexes the four input snapshots.
    pub fn new(
        employees: Vec<Employee>,
        attendance: &[AttendanceRecord],
        holidays: &[Holiday],
        leave_applications: &[LeaveApplication],
    ) -> Self {
        Self {
            employees,
            attendance: AttendanceIndex::from_records(attendance),
            holidays: HolidayCalendar::from_holidays(holidays),
            leave: LeaveCalendar::from_applications(leave_applications),
        }
    }

    /// The employee snapshot, in input order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// The attendance index.
    pub fn attendance(&self) -> &AttendanceIndex {
        &self.attendance
    }

    /// The holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// The leave calendar.
    pub fn leave(&self) -> &LeaveCalendar {
        &self.leave
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, DocStatus, LeaveStatus};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn leave(from: u32, to: u32, half_day: bool, status: LeaveStatus) -> LeaveApplication {
        LeaveApplication {
            employee_id: "EMP-0001".to_string(),
            from_date: date(from),
            to_date: date(to),
            half_day,
            status,
        }
    }

    fn attendance(day: u32, status: AttendanceStatus, docstatus: DocStatus) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "EMP-0001".to_string(),
            date: date(day),
            status,
            swipe_in: None,
            swipe_out: None,
            docstatus,
        }
    }

    #[test]
    fn test_holiday_membership() {
        let calendar = HolidayCalendar::from_holidays(&[Holiday {
            date: date(14),
            description: None,
        }]);
        assert!(calendar.contains(date(14)));
        assert!(!calendar.contains(date(15)));
    }

    #[test]
    fn test_leave_covers_inclusive_range() {
        let calendar =
            LeaveCalendar::from_applications(&[leave(3, 5, false, LeaveStatus::Approved)]);
        assert!(!calendar.covers("EMP-0001", date(2)));
        assert!(calendar.covers("EMP-0001", date(3)));
        assert!(calendar.covers("EMP-0001", date(5)));
        assert!(!calendar.covers("EMP-0001", date(6)));
        assert!(!calendar.covers("EMP-0002", date(4)));
    }

    #[test]
    fn test_leave_ignores_half_day_and_unapproved() {
        let calendar = LeaveCalendar::from_applications(&[
            leave(3, 3, true, LeaveStatus::Approved),
            leave(4, 4, false, LeaveStatus::Open),
            leave(5, 5, false, LeaveStatus::Rejected),
        ]);
        for day in 3..=5 {
            assert!(!calendar.covers("EMP-0001", date(day)));
        }
    }

    #[test]
    fn test_overlapping_and_adjacent_leave_merged() {
        let calendar = LeaveCalendar::from_applications(&[
            leave(10, 12, false, LeaveStatus::Approved),
            leave(2, 4, false, LeaveStatus::Approved),
            leave(3, 6, false, LeaveStatus::Approved),
            leave(7, 7, false, LeaveStatus::Approved),
        ]);
        assert_eq!(
            calendar.by_employee["EMP-0001"],
            vec![(date(2), date(7)), (date(10), date(12))]
        );
        assert!(calendar.covers("EMP-0001", date(7)));
        assert!(!calendar.covers("EMP-0001", date(8)));
        assert!(calendar.covers("EMP-0001", date(11)));
    }

    #[test]
    fn test_attendance_index_skips_unsubmitted() {
        let index = AttendanceIndex::from_records(&[
            attendance(3, AttendanceStatus::Absent, DocStatus::Draft),
            attendance(4, AttendanceStatus::Absent, DocStatus::Cancelled),
            attendance(5, AttendanceStatus::Absent, DocStatus::Submitted),
        ]);
        assert!(index.get("EMP-0001", date(3)).is_none());
        assert!(index.get("EMP-0001", date(4)).is_none());
        assert!(index.get("EMP-0001", date(5)).is_some());
    }

    #[test]
    fn test_attendance_index_last_duplicate_wins() {
        let index = AttendanceIndex::from_records(&[
            attendance(5, AttendanceStatus::Absent, DocStatus::Submitted),
            attendance(5, AttendanceStatus::OnLeave, DocStatus::Submitted),
        ]);
        assert_eq!(
            index.get("EMP-0001", date(5)).map(|r| r.status),
            Some(AttendanceStatus::OnLeave)
        );
    }

    #[test]
    fn test_attendance_count_between() {
        let index = AttendanceIndex::from_records(&[
            attendance(1, AttendanceStatus::Absent, DocStatus::Submitted),
            attendance(15, AttendanceStatus::Absent, DocStatus::Submitted),
            attendance(31, AttendanceStatus::Absent, DocStatus::Submitted),
        ]);
        assert_eq!(index.count_between("EMP-0001", date(1), date(31)), 3);
        assert_eq!(index.count_between("EMP-0001", date(2), date(30)), 1);
        assert_eq!(index.count_between("EMP-0404", date(1), date(31)), 0);
    }
}
