//! HTTP request plumbing shared by every REST wrapper.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with the bearer
//! credential attached. Server-side (SSR) and native tests: stubs returning
//! `ApiError::Unavailable` since the backend is only reachable from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! All wrappers share one `ApiError` type so pages and the session store can
//! uniformly pick a display message without inspecting transport details.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error produced by any REST wrapper call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (offline, DNS, connection reset).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Display message extracted from the response body.
        message: String,
    },
    /// The response body could not be decoded into the expected type.
    #[error("invalid response: {0}")]
    Decode(String),
    /// A call that needs a credential was made with none held.
    #[error("not signed in")]
    Unauthenticated,
    /// Stub result outside the browser; never seen by real users.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for direct display in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Network(_) => "Network error. Check your connection and try again.".to_owned(),
            Self::Unauthenticated => "Your session has expired. Sign in again.".to_owned(),
            Self::Decode(_) | Self::Unavailable => "Something went wrong. Try again.".to_owned(),
        }
    }
}

/// Extract a display message from an error response body.
///
/// Prefers a JSON `message` field, then `error`, then falls back to the
/// bare status code.
fn error_message_from_body(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                if !msg.trim().is_empty() {
                    return msg.to_owned();
                }
            }
        }
    }
    format!("request failed: {status}")
}

#[cfg(feature = "hydrate")]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn decode_response<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Api { status, message: error_message_from_body(status, &body) });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn check_response(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Api { status, message: error_message_from_body(status, &body) });
    }
    Ok(())
}

/// GET `path` and decode the JSON response.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-success status, or an
/// undecodable body.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(path);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unavailable)
    }
}

/// POST a JSON `body` to `path` and decode the JSON response.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-success status, or an
/// undecodable body.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(path);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::Unavailable)
    }
}

/// POST to `path` with no body, ignoring any response body.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure or non-success status.
pub async fn post_empty(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(path);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        check_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unavailable)
    }
}

/// PUT a JSON `body` to `path` and decode the JSON response.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-success status, or an
/// undecodable body.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::put(path);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::Unavailable)
    }
}

/// DELETE `path`, ignoring any response body.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure or non-success status.
pub async fn delete(path: &str, token: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::delete(path);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        check_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::Unavailable)
    }
}
