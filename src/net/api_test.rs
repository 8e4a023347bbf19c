use super::*;
use crate::net::types::User;
use crate::util::token::MemoryTokenStore;

fn issued(token: &str) -> AuthResponse {
    AuthResponse {
        success: true,
        message: "ok".to_owned(),
        token: Some(token.to_owned()),
        user: Some(User {
            id: "1".to_owned(),
            email: "jane@gmail.com".to_owned(),
            full_name: "Jane".to_owned(),
        }),
    }
}

fn rejected(message: &str) -> AuthResponse {
    AuthResponse {
        success: false,
        message: message.to_owned(),
        token: None,
        user: None,
    }
}

// =============================================================
// Endpoints and configuration
// =============================================================

#[test]
fn register_endpoint_formats_expected_path() {
    assert_eq!(
        register_endpoint("http://localhost:5000"),
        "http://localhost:5000/api/auth/register"
    );
}

#[test]
fn login_endpoint_formats_expected_path() {
    assert_eq!(login_endpoint("http://localhost:5000"), "http://localhost:5000/api/auth/login");
}

#[test]
fn me_endpoint_formats_expected_path() {
    assert_eq!(me_endpoint("http://localhost:5000"), "http://localhost:5000/api/auth/me");
}

#[test]
fn api_base_defaults_to_local_dev_server() {
    assert_eq!(api_base(), "http://localhost:5000");
}

// =============================================================
// Normalized failure shapes
// =============================================================

#[test]
fn network_error_response_is_failure_with_fixed_message() {
    let response = network_error_response();
    assert!(!response.success);
    assert_eq!(response.message, "Network error. Please check your connection.");
    assert!(response.token.is_none());
    assert!(response.user.is_none());
}

#[test]
fn missing_token_response_uses_fixed_message() {
    let response = missing_token_response();
    assert!(!response.success);
    assert_eq!(response.message, "No token found");
}

// =============================================================
// Token side effects
// =============================================================

#[test]
fn remember_issued_token_stores_token_on_success() {
    let store = MemoryTokenStore::default();
    remember_issued_token(&store, &issued("abc"));
    assert_eq!(store.get().as_deref(), Some("abc"));
}

#[test]
fn remember_issued_token_overwrites_previous_token() {
    let store = MemoryTokenStore::default();
    store.set("old");
    remember_issued_token(&store, &issued("new"));
    assert_eq!(store.get().as_deref(), Some("new"));
}

#[test]
fn remember_issued_token_ignores_failures() {
    let store = MemoryTokenStore::default();
    let mut response = rejected("Invalid credentials");
    response.token = Some("never".to_owned());
    remember_issued_token(&store, &response);
    assert!(store.get().is_none());
}

#[test]
fn remember_issued_token_ignores_success_without_token() {
    let store = MemoryTokenStore::default();
    let mut response = issued("abc");
    response.token = None;
    remember_issued_token(&store, &response);
    assert!(store.get().is_none());
}

#[test]
fn evict_rejected_token_removes_stored_token_on_failure() {
    let store = MemoryTokenStore::default();
    store.set("stale");
    evict_rejected_token(&store, &rejected("Invalid token"));
    assert!(store.get().is_none());
}

#[test]
fn evict_rejected_token_keeps_token_on_success() {
    let store = MemoryTokenStore::default();
    store.set("abc");
    evict_rejected_token(&store, &issued("abc"));
    assert_eq!(store.get().as_deref(), Some("abc"));
}
