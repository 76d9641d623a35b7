//! Authentication endpoints and the collaborator trait the session store
//! talks to.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::session::Session` drives these calls; it never builds HTTP
//! requests itself. Tests substitute a fake `AuthApi` so session semantics
//! are checked without a browser or a backend.

use crate::net::http::{self, ApiError};
use crate::net::types::{AuthSession, LoginRequest, User};

/// Contract for the remote authentication collaborator.
///
/// Futures here are not `Send` (they run on the browser main thread via
/// `spawn_local`), so the trait deliberately adds no auto-trait bounds.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for an identity plus bearer token.
    async fn login(&self, identifier: &str, secret: &str) -> Result<AuthSession, ApiError>;
    /// Invalidate the session behind `token` on the backend.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
    /// Trade the current token for a fresh identity/token pair.
    async fn refresh(&self, token: &str) -> Result<AuthSession, ApiError>;
    /// Fetch the identity the backend associates with `token`.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;
}

/// REST implementation over the backend's `/api/auth/*` endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn login(&self, identifier: &str, secret: &str) -> Result<AuthSession, ApiError> {
        let body = LoginRequest {
            username: identifier.to_owned(),
            password: secret.to_owned(),
        };
        http::post_json("/api/auth/login", None, &body).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        http::post_empty("/api/auth/logout", Some(token)).await
    }

    async fn refresh(&self, token: &str) -> Result<AuthSession, ApiError> {
        http::post_json("/api/auth/refresh", Some(token), &serde_json::json!({})).await
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        http::get_json("/api/auth/me", Some(token)).await
    }
}
