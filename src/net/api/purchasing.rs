//! Purchase-order endpoints: drafting, approval, and goods receipt.

#[cfg(test)]
#[path = "purchasing_test.rs"]
mod purchasing_test;

use crate::net::http::{self, ApiError};
use crate::net::types::PurchaseOrder;

fn approve_endpoint(order_id: &str) -> String {
    format!("/api/purchasing/orders/{order_id}/approve")
}

fn receive_endpoint(order_id: &str) -> String {
    format!("/api/purchasing/orders/{order_id}/receive")
}

/// List purchase orders, newest first.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn list_orders(token: &str) -> Result<Vec<PurchaseOrder>, ApiError> {
    http::get_json("/api/purchasing/orders", Some(token)).await
}

/// Create a draft order, returning it with its assigned id.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn create_order(token: &str, order: &PurchaseOrder) -> Result<PurchaseOrder, ApiError> {
    http::post_json("/api/purchasing/orders", Some(token), order).await
}

/// Approve a submitted order.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn approve_order(token: &str, order_id: &str) -> Result<PurchaseOrder, ApiError> {
    http::post_json(&approve_endpoint(order_id), Some(token), &serde_json::json!({})).await
}

/// Mark an approved order as received into stock.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn receive_order(token: &str, order_id: &str) -> Result<PurchaseOrder, ApiError> {
    http::post_json(&receive_endpoint(order_id), Some(token), &serde_json::json!({})).await
}
