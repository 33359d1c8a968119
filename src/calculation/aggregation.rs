//! Monthly aggregation of resolved day statuses.

use serde::{Deserialize, Serialize};

use crate::models::{MonthlyTotals, ResolvedDayStatus};

/// The grid codes and totals for one employee's month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAggregate {
    /// One code per day, in day order.
    pub codes: Vec<String>,
    /// Totals folded over the same days.
    pub totals: MonthlyTotals,
}

/// Folds a day-ordered status sequence into grid codes and totals.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::aggregate_month;
/// use attendance_engine::models::ResolvedDayStatus;
///
/// let aggregate = aggregate_month(&[
///     ResolvedDayStatus::NotApplicable,
///     ResolvedDayStatus::Present,
///     ResolvedDayStatus::HalfDay,
///     ResolvedDayStatus::Holiday,
/// ]);
///
/// assert_eq!(aggregate.codes, vec!["", "P", "H", "HL"]);
/// assert_eq!(aggregate.totals.present, 2.5);
/// assert_eq!(aggregate.totals.absent, 0.5);
/// ```
pub fn aggregate_month(statuses: &[ResolvedDayStatus]) -> DayAggregate {
    let codes = statuses.iter().map(|s| s.code().to_string()).collect();
    let totals = statuses
        .iter()
        .fold(MonthlyTotals::default(), |totals, status| {
            totals + status.contribution()
        });

    DayAggregate { codes, totals }
}
