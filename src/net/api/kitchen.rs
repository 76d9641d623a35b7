//! Kitchen-display endpoints: the day board and ticket stage changes.

#[cfg(test)]
#[path = "kitchen_test.rs"]
mod kitchen_test;

use crate::net::http::{self, ApiError};
use crate::net::types::{KitchenStage, KitchenTicket};

fn board_endpoint(day: &str) -> String {
    format!("/api/kitchen/board?day={day}")
}

fn stage_endpoint(ticket_id: &str) -> String {
    format!("/api/kitchen/tickets/{ticket_id}/stage")
}

/// Fetch the production tickets for `day` (ISO date).
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn board(token: &str, day: &str) -> Result<Vec<KitchenTicket>, ApiError> {
    http::get_json(&board_endpoint(day), Some(token)).await
}

/// Move a ticket to `stage`, returning the updated ticket.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn set_stage(
    token: &str,
    ticket_id: &str,
    stage: KitchenStage,
) -> Result<KitchenTicket, ApiError> {
    http::put_json(&stage_endpoint(ticket_id), Some(token), &serde_json::json!({ "stage": stage }))
        .await
}
