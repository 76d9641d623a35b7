//! Recipe CRUD endpoints.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use crate::net::http::{self, ApiError};
use crate::net::types::Recipe;

fn recipe_endpoint(recipe_id: &str) -> String {
    format!("/api/recipes/{recipe_id}")
}

/// List all recipes.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn list_recipes(token: &str) -> Result<Vec<Recipe>, ApiError> {
    http::get_json("/api/recipes", Some(token)).await
}

/// Fetch one recipe with its ingredient lines.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn recipe_detail(token: &str, recipe_id: &str) -> Result<Recipe, ApiError> {
    http::get_json(&recipe_endpoint(recipe_id), Some(token)).await
}

/// Create a recipe, returning it with its assigned id.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn create_recipe(token: &str, recipe: &Recipe) -> Result<Recipe, ApiError> {
    http::post_json("/api/recipes", Some(token), recipe).await
}

/// Replace a recipe's fields and ingredient lines.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn update_recipe(token: &str, recipe: &Recipe) -> Result<Recipe, ApiError> {
    http::put_json(&recipe_endpoint(&recipe.id), Some(token), recipe).await
}

/// Delete a recipe.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn delete_recipe(token: &str, recipe_id: &str) -> Result<(), ApiError> {
    http::delete(&recipe_endpoint(recipe_id), Some(token)).await
}
