//! Delivery-task endpoints for drivers and dispatchers.

#[cfg(test)]
#[path = "delivery_test.rs"]
mod delivery_test;

use crate::net::http::{self, ApiError};
use crate::net::types::{DeliveryStatus, DeliveryTask};

fn tasks_endpoint(day: &str) -> String {
    format!("/api/delivery/tasks?day={day}")
}

fn task_endpoint(task_id: &str) -> String {
    format!("/api/delivery/tasks/{task_id}")
}

fn status_endpoint(task_id: &str) -> String {
    format!("/api/delivery/tasks/{task_id}/status")
}

fn complete_endpoint(task_id: &str) -> String {
    format!("/api/delivery/tasks/{task_id}/complete")
}

/// List the delivery tasks scheduled for `day` (ISO date).
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn list_tasks(token: &str, day: &str) -> Result<Vec<DeliveryTask>, ApiError> {
    http::get_json(&tasks_endpoint(day), Some(token)).await
}

/// Fetch one task with its full note and route detail.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn task_detail(token: &str, task_id: &str) -> Result<DeliveryTask, ApiError> {
    http::get_json(&task_endpoint(task_id), Some(token)).await
}

/// Move a task to `status`, returning the updated task.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn update_status(
    token: &str,
    task_id: &str,
    status: DeliveryStatus,
) -> Result<DeliveryTask, ApiError> {
    http::put_json(&status_endpoint(task_id), Some(token), &serde_json::json!({ "status": status }))
        .await
}

/// Mark a task delivered with a proof-of-delivery note.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn complete_task(token: &str, task_id: &str, note: &str) -> Result<DeliveryTask, ApiError> {
    http::post_json(&complete_endpoint(task_id), Some(token), &serde_json::json!({ "note": note }))
        .await
}
