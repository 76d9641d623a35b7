//! Menu-planning endpoints: weekly plans keyed by their Monday.

#[cfg(test)]
#[path = "menus_test.rs"]
mod menus_test;

use crate::net::http::{self, ApiError};
use crate::net::types::MenuDay;

fn week_endpoint(week_of: &str) -> String {
    format!("/api/menus/week?week_of={week_of}")
}

/// Fetch the planned days for the week starting `week_of` (ISO Monday).
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn week_plan(token: &str, week_of: &str) -> Result<Vec<MenuDay>, ApiError> {
    http::get_json(&week_endpoint(week_of), Some(token)).await
}

/// Save a full week of planned days, returning the stored plan.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn save_week_plan(
    token: &str,
    week_of: &str,
    days: &[MenuDay],
) -> Result<Vec<MenuDay>, ApiError> {
    http::put_json(&week_endpoint(week_of), Some(token), &days).await
}
