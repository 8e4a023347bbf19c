use super::*;
use crate::net::types::User;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// Derived authentication status
// =============================================================

#[test]
fn anonymous_state_is_not_authenticated() {
    assert!(!AuthState::default().is_authenticated());
}

#[test]
fn state_with_user_is_authenticated() {
    let state = AuthState {
        user: Some(User {
            id: "1".to_owned(),
            email: "jane@gmail.com".to_owned(),
            full_name: "Jane".to_owned(),
        }),
        loading: false,
    };
    assert!(state.is_authenticated());
}
