//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::calculation::DurationThresholds;

/// Engine settings from `engine.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Human-readable name of the report configuration.
    pub name: String,
    /// Version of the configuration.
    pub version: String,
    /// Duration bands used to reclassify present days.
    #[serde(default)]
    pub duration_thresholds: DurationThresholds,
    /// Whether employees with no submitted attendance in the month get a row.
    #[serde(default = "default_include_employees_with_no_records")]
    pub include_employees_with_no_records: bool,
}

fn default_include_employees_with_no_records() -> bool {
    true
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            name: "Monthly Attendance Sheet".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            duration_thresholds: DurationThresholds::default(),
            include_employees_with_no_records: true,
        }
    }
}

/// A column label with its display width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// The header label.
    pub label: String,
    /// Display width hint in pixels.
    pub width: u32,
}

impl ColumnSpec {
    fn new(label: &str, width: u32) -> Self {
        Self {
            label: label.to_string(),
            width,
        }
    }
}

/// Column labels of the monthly attendance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyColumns {
    /// Employee identifier column.
    pub employee: ColumnSpec,
    /// Employee name column.
    pub employee_name: ColumnSpec,
    /// Date of joining column.
    pub date_of_joining: ColumnSpec,
    /// Width of each day column (labelled by day number).
    pub day_width: u32,
    /// Total present column.
    pub total_present: ColumnSpec,
    /// Total leaves column.
    pub total_leaves: ColumnSpec,
    /// Total absent column.
    pub total_absent: ColumnSpec,
}

impl Default for MonthlyColumns {
    fn default() -> Self {
        Self {
            employee: ColumnSpec::new("Employee", 120),
            employee_name: ColumnSpec::new("Employee Name", 140),
            date_of_joining: ColumnSpec::new("Date of Joining", 120),
            day_width: 20,
            total_present: ColumnSpec::new("Total Present", 80),
            total_leaves: ColumnSpec::new("Total Leaves", 80),
            total_absent: ColumnSpec::new("Total Absent", 80),
        }
    }
}

/// Column labels of the attendance detail listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailColumns {
    /// Employee name column.
    pub employee_name: ColumnSpec,
    /// Attendance date column.
    pub date: ColumnSpec,
    /// Swipe-in column.
    pub in_time: ColumnSpec,
    /// Swipe-out column.
    pub out_time: ColumnSpec,
    /// Total time column.
    pub total_time: ColumnSpec,
}

impl Default for DetailColumns {
    fn default() -> Self {
        Self {
            employee_name: ColumnSpec::new("Employee Name", 140),
            date: ColumnSpec::new("Date", 100),
            in_time: ColumnSpec::new("In Time", 100),
            out_time: ColumnSpec::new("Out Time", 100),
            total_time: ColumnSpec::new("Total Time", 100),
        }
    }
}

/// Column configuration from `columns.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnsConfig {
    /// Monthly sheet columns.
    #[serde(default)]
    pub monthly: MonthlyColumns,
    /// Detail listing columns.
    #[serde(default)]
    pub detail: DetailColumns,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    settings: EngineSettings,
    columns: ColumnsConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(settings: EngineSettings, columns: ColumnsConfig) -> Self {
        Self { settings, columns }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the column configuration.
    pub fn columns(&self) -> &ColumnsConfig {
        &self.columns
    }
}
