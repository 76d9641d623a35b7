use super::*;

// =============================================================
// error_message_from_body
// =============================================================

#[test]
fn error_message_prefers_message_then_error() {
    assert_eq!(
        error_message_from_body(400, r#"{"message":"m1","error":"m2"}"#),
        "m1"
    );
    assert_eq!(error_message_from_body(400, r#"{"error":"m2"}"#), "m2");
}

#[test]
fn error_message_ignores_blank_fields() {
    assert_eq!(
        error_message_from_body(403, r#"{"message":"   ","error":"denied"}"#),
        "denied"
    );
}

#[test]
fn error_message_falls_back_to_status_for_non_json() {
    assert_eq!(error_message_from_body(502, "<html>bad gateway</html>"), "request failed: 502");
    assert_eq!(error_message_from_body(500, ""), "request failed: 500");
}

// =============================================================
// ApiError::user_message
// =============================================================

#[test]
fn api_error_message_passes_through_server_text() {
    let err = ApiError::Api { status: 401, message: "Wrong username or password".to_owned() };
    assert_eq!(err.user_message(), "Wrong username or password");
}

#[test]
fn network_error_message_is_generic() {
    let err = ApiError::Network("fetch failed".to_owned());
    assert_eq!(err.user_message(), "Network error. Check your connection and try again.");
}

#[test]
fn unauthenticated_message_mentions_signing_in() {
    assert_eq!(
        ApiError::Unauthenticated.user_message(),
        "Your session has expired. Sign in again."
    );
}

// =============================================================
// Non-hydrate stubs
// =============================================================

#[test]
fn helpers_are_unavailable_off_browser() {
    let get = futures::executor::block_on(get_json::<serde_json::Value>("/api/x", None));
    assert_eq!(get, Err(ApiError::Unavailable));

    let post = futures::executor::block_on(post_json::<_, serde_json::Value>(
        "/api/x",
        Some("t"),
        &serde_json::json!({}),
    ));
    assert_eq!(post, Err(ApiError::Unavailable));

    let del = futures::executor::block_on(delete("/api/x", Some("t")));
    assert_eq!(del, Err(ApiError::Unavailable));
}
