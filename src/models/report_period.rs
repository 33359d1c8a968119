//! Report period and holiday models.
//!
//! This module contains the [`ReportPeriod`] (a validated year/month pair),
//! the [`ReportMonth`] input form it is built from, and the org-wide
//! [`Holiday`] type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::days_in_month;
use crate::error::{EngineError, EngineResult};

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// An org-wide holiday.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     description: Some("Holi".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// Optional description (e.g., "Christmas Day").
    #[serde(default)]
    pub description: Option<String>,
}

/// A month as supplied by a caller: a 1-based index or a month name.
///
/// Names match case-insensitively against full English month names and
/// their three-letter abbreviations. Numeric strings are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportMonth {
    /// A month index, 1 = January.
    Index(u32),
    /// A month name such as `"Mar"` or `"March"`.
    Name(String),
}

impl ReportMonth {
    /// Resolves the month to its 1-based number.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::ReportMonth;
    ///
    /// assert_eq!(ReportMonth::Name("Mar".to_string()).number().unwrap(), 3);
    /// assert_eq!(ReportMonth::Name("december".to_string()).number().unwrap(), 12);
    /// assert_eq!(ReportMonth::Index(7).number().unwrap(), 7);
    /// assert!(ReportMonth::Index(13).number().is_err());
    /// ```
    pub fn number(&self) -> EngineResult<u32> {
        match self {
            ReportMonth::Index(index) => validate_month(*index),
            ReportMonth::Name(name) => {
                let name = name.trim().to_lowercase();
                if let Ok(index) = name.parse::<u32>() {
                    return validate_month(index);
                }
                MONTH_NAMES
                    .iter()
                    .position(|full| {
                        *full == name || (name.len() == 3 && full.starts_with(name.as_str()))
                    })
                    .map(|position| position as u32 + 1)
                    .ok_or_else(|| {
                        EngineError::invalid_input("month", format!("unknown month name '{}'", name))
                    })
            }
        }
    }
}

fn validate_month(month: u32) -> EngineResult<u32> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(EngineError::invalid_input(
            "month",
            format!("{} is outside 1-12", month),
        ))
    }
}

/// A validated calendar month to report on.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod::new(2024, 2).unwrap();
/// assert_eq!(period.days_in_month(), 29);
/// assert_eq!(period.end(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    year: i32,
    month: u32,
    #[serde(skip)]
    days: u32,
}

impl ReportPeriod {
    /// Creates a period, failing with `InvalidInput` for a month outside 1-12
    /// or a year chrono cannot represent.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let days = days_in_month(year, month)?;
        Ok(Self { year, month, days })
    }

    /// Creates a period from optional caller inputs.
    ///
    /// A missing year or month is the fatal "nothing selected" case.
    pub fn from_inputs(year: Option<i32>, month: Option<&ReportMonth>) -> EngineResult<Self> {
        match (year, month) {
            (Some(year), Some(month)) => Self::new(year, month.number()?),
            (None, _) => Err(EngineError::invalid_input(
                "year",
                "Please select month and year",
            )),
            (_, None) => Err(EngineError::invalid_input(
                "month",
                "Please select month and year",
            )),
        }
    }

    /// The report year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The report month, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of calendar days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.days
    }

    /// First day of the month.
    pub fn start(&self) -> NaiveDate {
        self.day(1)
    }

    /// Last day of the month.
    pub fn end(&self) -> NaiveDate {
        self.day(self.days)
    }

    fn day(&self, day: u32) -> NaiveDate {
        // Year and month were validated in `new`, and `day` never exceeds `days`.
        NaiveDate::from_ymd_opt(self.year, self.month, day).unwrap_or(NaiveDate::MIN)
    }
}
