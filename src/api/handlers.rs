//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{Datelike, Local, NaiveDateTime};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    ReportSnapshot, attendance_years, build_attendance_detail, build_monthly_report_concurrent,
};
use crate::models::ReportPeriod;

use super::request::{AttendanceDetailRequest, AttendanceYearsRequest, MonthlyAttendanceRequest};
use super::response::{
    ApiError, ApiErrorResponse, AttendanceDetailResponse, AttendanceYearsResponse,
    MonthlyAttendanceResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/monthly-attendance", post(monthly_attendance_handler))
        .route("/reports/attendance", post(attendance_detail_handler))
        .route("/attendance/years", post(attendance_years_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn current_time() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Handler for POST /reports/monthly-attendance.
///
/// Builds the monthly attendance sheet from the snapshots in the request.
async fn monthly_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyAttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly attendance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let period = match ReportPeriod::from_inputs(
        request.filters.year,
        request.filters.month.as_ref(),
    ) {
        Ok(period) => period,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid report period"
            );
            return error_response(err.into());
        }
    };

    let config = state.config();
    let mut options = config.report_options();
    options.employee = request.filters.employee;
    if let Some(include) = request.include_employees_with_no_records {
        options.include_employees_with_no_records = include;
    }
    let now = request.as_of.unwrap_or_else(current_time);

    let snapshot = Arc::new(ReportSnapshot::new(
        request.employees,
        &request.attendance,
        &request.holidays,
        &request.leave_applications,
    ));

    let start_time = Instant::now();
    match build_monthly_report_concurrent(
        period,
        snapshot,
        options,
        config.columns().monthly.clone(),
        now,
    )
    .await
    {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                year = period.year(),
                month = period.month(),
                rows = report.rows.len(),
                warnings = report.warnings.len(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Monthly attendance report completed"
            );
            json_response(StatusCode::OK, MonthlyAttendanceResponse::from(report))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Monthly attendance report failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /reports/attendance.
///
/// Lists submitted attendance records in a date range.
async fn attendance_detail_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceDetailRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance detail request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match build_attendance_detail(
        &request.filters,
        &request.employees,
        &request.attendance,
        &state.config().columns().detail,
    ) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                rows = report.rows.len(),
                "Attendance detail listing completed"
            );
            json_response(StatusCode::OK, AttendanceDetailResponse::from(report))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Attendance detail listing failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /attendance/years.
///
/// Returns the distinct years present in the attendance snapshot.
async fn attendance_years_handler(
    payload: Result<Json<AttendanceYearsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance years request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let today = request.as_of.unwrap_or_else(current_time).date();
    let years = attendance_years(&request.attendance, today);

    info!(
        correlation_id = %correlation_id,
        records = request.attendance.len(),
        years = years.len(),
        current_year = today.year(),
        "Attendance years completed"
    );
    json_response(StatusCode::OK, AttendanceYearsResponse { years })
}
