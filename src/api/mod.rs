//! HTTP API module for the attendance engine.
//!
//! This module exposes the monthly attendance sheet, the attendance detail
//! listing and the attendance year picker as JSON endpoints. Requests carry
//! their own snapshots; handlers only read the clock when `as_of` is absent.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceDetailRequest, AttendanceYearsRequest, MonthlyAttendanceFilters,
    MonthlyAttendanceRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, AttendanceDetailResponse, AttendanceYearsResponse,
    MonthlyAttendanceResponse,
};
pub use state::AppState;
