//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building attendance reports.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the attendance engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "month".to_string(),
///     message: "must be between 1 and 12".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'month': must be between 1 and 12");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A report filter or scalar input was missing or malformed.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending input field.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// An attendance record could not be resolved from its own data.
    ///
    /// Recoverable: the report builder degrades the affected day instead of
    /// aborting the report.
    #[error("Inconsistent attendance for employee '{employee_id}' on {date}: {message}")]
    DataInconsistency {
        /// The employee the record belongs to.
        employee_id: String,
        /// The attendance date.
        date: NaiveDate,
        /// A description of the inconsistency.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or held invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
