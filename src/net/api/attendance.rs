//! Attendance endpoints: clocking and month listings.

#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use crate::net::http::{self, ApiError};
use crate::net::types::AttendanceRecord;

fn records_endpoint(month: &str) -> String {
    format!("/api/attendance/records?month={month}")
}

/// Clock the current user in, returning the opened record.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn clock_in(token: &str) -> Result<AttendanceRecord, ApiError> {
    http::post_json("/api/attendance/clock-in", Some(token), &serde_json::json!({})).await
}

/// Clock the current user out, returning the closed record.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn clock_out(token: &str) -> Result<AttendanceRecord, ApiError> {
    http::post_json("/api/attendance/clock-out", Some(token), &serde_json::json!({})).await
}

/// List the current user's records for `month` (`YYYY-MM`).
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn list_records(token: &str, month: &str) -> Result<Vec<AttendanceRecord>, ApiError> {
    http::get_json(&records_endpoint(month), Some(token)).await
}
