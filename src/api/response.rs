//! Response types for the attendance engine API.
//!
//! This module defines the report response bodies, the error response
//! structures and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    AttendanceDetailReport, AttendanceDetailRow, EmployeeMonthRow, MonthlyAttendanceReport,
    ReportCell, ReportWarning,
};

/// Response body of `POST /reports/monthly-attendance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAttendanceResponse {
    /// The report year.
    pub year: i32,
    /// The report month (1-12).
    pub month: u32,
    /// The "now" the report was resolved against.
    pub as_of: NaiveDateTime,
    /// Column descriptors in `Label:Type:Width` form.
    pub columns: Vec<String>,
    /// Structured rows.
    pub rows: Vec<EmployeeMonthRow>,
    /// The rows rendered as table cells, in column order.
    pub data: Vec<Vec<ReportCell>>,
    /// Recoverable data problems.
    pub warnings: Vec<ReportWarning>,
}

impl From<MonthlyAttendanceReport> for MonthlyAttendanceResponse {
    fn from(report: MonthlyAttendanceReport) -> Self {
        let data = report.to_table();
        Self {
            year: report.period.year(),
            month: report.period.month(),
            as_of: report.as_of,
            columns: report.columns.iter().map(ToString::to_string).collect(),
            rows: report.rows,
            data,
            warnings: report.warnings,
        }
    }
}

/// Response body of `POST /reports/attendance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceDetailResponse {
    /// First day of the range.
    pub from_date: NaiveDate,
    /// Last day of the range.
    pub to_date: NaiveDate,
    /// Column descriptors in `Label:Type:Width` form.
    pub columns: Vec<String>,
    /// Structured rows.
    pub rows: Vec<AttendanceDetailRow>,
    /// The rows rendered as table cells, in column order.
    pub data: Vec<Vec<ReportCell>>,
}

impl From<AttendanceDetailReport> for AttendanceDetailResponse {
    fn from(report: AttendanceDetailReport) -> Self {
        let data = report.to_table();
        Self {
            from_date: report.from_date,
            to_date: report.to_date,
            columns: report.columns.iter().map(ToString::to_string).collect(),
            rows: report.rows,
            data,
        }
    }
}

/// Response body of `POST /attendance/years`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceYearsResponse {
    /// Distinct attendance years, newest first.
    pub years: Vec<i32>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Invalid value for field '{}'", field),
                ),
            },
            // Report builders degrade this to a warning, so no handler returns it.
            EngineError::DataInconsistency {
                employee_id,
                date,
                message,
            } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "DATA_INCONSISTENCY",
                    format!(
                        "Inconsistent attendance for employee '{}' on {}",
                        employee_id, date
                    ),
                    message,
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Report calculation failed",
                    message,
                ),
            },
        }
    }
}
