//! Inventory endpoints: stock levels, adjustments, and stocktakes.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use crate::net::http::{self, ApiError};
use crate::net::types::{InventoryItem, StockAdjustment};

fn adjust_endpoint(item_id: &str) -> String {
    format!("/api/inventory/items/{item_id}/adjust")
}

/// List all stocked items.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn list_items(token: &str) -> Result<Vec<InventoryItem>, ApiError> {
    http::get_json("/api/inventory/items", Some(token)).await
}

/// Post a manual stock correction, returning the updated item.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn adjust_stock(
    token: &str,
    adjustment: &StockAdjustment,
) -> Result<InventoryItem, ApiError> {
    http::post_json(&adjust_endpoint(&adjustment.item_id), Some(token), adjustment).await
}

/// Submit a full stocktake of counted quantities.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn submit_stocktake(
    token: &str,
    counts: &[(String, f64)],
) -> Result<Vec<InventoryItem>, ApiError> {
    let lines: Vec<serde_json::Value> = counts
        .iter()
        .map(|(item_id, quantity)| serde_json::json!({ "item_id": item_id, "quantity": quantity }))
        .collect();
    http::post_json("/api/inventory/stocktake", Some(token), &serde_json::json!({ "lines": lines }))
        .await
}
