//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrored into a Leptos context signal so route guards and user-aware
//! components can coordinate login redirects and identity-dependent
//! rendering. `SessionController` owns the authoritative copy.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only while the startup session check is in flight.
/// Whether the visitor is authenticated is derived from `user`, never
/// stored separately.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Whether a verified user is attached to the current session.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
