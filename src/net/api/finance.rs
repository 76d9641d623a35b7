//! Financial-reporting endpoints.

#[cfg(test)]
#[path = "finance_test.rs"]
mod finance_test;

use crate::net::http::{self, ApiError};
use crate::net::types::FinanceSummary;

fn daily_endpoint(day: &str) -> String {
    format!("/api/finance/daily?day={day}")
}

fn monthly_endpoint(month: &str) -> String {
    format!("/api/finance/monthly?month={month}")
}

/// Fetch the daily report for `day` (ISO date).
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn daily_report(token: &str, day: &str) -> Result<FinanceSummary, ApiError> {
    http::get_json(&daily_endpoint(day), Some(token)).await
}

/// Fetch the monthly summary for `month` (`YYYY-MM`).
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn monthly_summary(token: &str, month: &str) -> Result<FinanceSummary, ApiError> {
    http::get_json(&monthly_endpoint(month), Some(token)).await
}
