//! Asset-register endpoints.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use crate::net::http::{self, ApiError};
use crate::net::types::Asset;

fn transfer_endpoint(asset_id: &str) -> String {
    format!("/api/assets/{asset_id}/transfer")
}

/// List all registered assets.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn list_assets(token: &str) -> Result<Vec<Asset>, ApiError> {
    http::get_json("/api/assets", Some(token)).await
}

/// Register a new asset, returning it with its assigned id.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn register_asset(token: &str, asset: &Asset) -> Result<Asset, ApiError> {
    http::post_json("/api/assets", Some(token), asset).await
}

/// Move an asset to a new location.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn transfer_asset(token: &str, asset_id: &str, location: &str) -> Result<Asset, ApiError> {
    http::post_json(
        &transfer_endpoint(asset_id),
        Some(token),
        &serde_json::json!({ "location": location }),
    )
    .await
}
