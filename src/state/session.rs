//! Session lifecycle: the stateful core that owns the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionController` binds a token store to the auth gateway and is the
//! single place that reconciles "token present" with "token still valid".
//! Pages call its operations and mirror `snapshot()` into the shared
//! `AuthState` signal; the controller itself carries no Leptos types so
//! the whole state machine runs under native tests.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded browser execution. Interior borrows are short-lived and
//! never held across awaits; token-store writes are last-write-wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::api::{AuthApi, AuthGateway};
use crate::net::types::{AuthResponse, LoginCredentials, RegisterCredentials};
use crate::state::auth::AuthState;
use crate::util::token::{BrowserTokenStore, TokenStore};

/// Stateful owner of the authenticated session.
pub struct SessionController<S: TokenStore, A: AuthApi> {
    store: S,
    api: A,
    state: RefCell<AuthState>,
}

/// Controller wired to browser storage and the live gateway.
pub type AppSession = SessionController<BrowserTokenStore, AuthGateway>;

/// Build the application's session controller handle.
pub fn app_session() -> Rc<AppSession> {
    Rc::new(SessionController::new(BrowserTokenStore, AuthGateway::default()))
}

impl<S: TokenStore, A: AuthApi> SessionController<S, A> {
    /// Bind a credential store and a gateway. The session starts in the
    /// loading state until the first `check_auth` resolves.
    pub fn new(store: S, api: A) -> Self {
        Self {
            store,
            api,
            state: RefCell::new(AuthState { user: None, loading: true }),
        }
    }

    /// Copy of the current session state for rendering.
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Reconcile the stored token with the remote service.
    ///
    /// Runs once at application start and is safe to re-invoke at any
    /// point: with no stored token it settles to anonymous without a
    /// network call, and a token the server no longer honors is removed
    /// before the state downgrade, so no component can observe a user
    /// backed by a revoked credential. Always resolves the loading flag.
    pub async fn check_auth(&self) {
        if !self.store.has() {
            self.state.borrow_mut().loading = false;
            return;
        }
        let response = self.api.current_user(&self.store).await;
        let mut state = self.state.borrow_mut();
        if response.success && response.user.is_some() {
            state.user = response.user;
        } else {
            // The gateway evicts on rejection; removing again is idempotent
            // and also covers tokens that died without a round-trip.
            self.store.remove();
            state.user = None;
            leptos::logging::log!("session check failed: {}", response.message);
        }
        state.loading = false;
    }

    /// Authenticate with email + password.
    ///
    /// The full response is returned so forms can surface `message` on
    /// failure; session state only changes on success.
    pub async fn login(&self, email: &str, password: &str) -> AuthResponse {
        let credentials = LoginCredentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let response = self.api.login(&self.store, &credentials).await;
        self.adopt_user(&response);
        response
    }

    /// Create an account and start its session.
    pub async fn register(&self, full_name: &str, email: &str, password: &str) -> AuthResponse {
        let credentials = RegisterCredentials {
            full_name: full_name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let response = self.api.register(&self.store, &credentials).await;
        self.adopt_user(&response);
        response
    }

    /// Drop the credential and the user unconditionally. Synchronous; no
    /// server round-trip is required to complete a logout.
    pub fn logout(&self) {
        self.store.remove();
        self.state.borrow_mut().user = None;
    }

    fn adopt_user(&self, response: &AuthResponse) {
        if response.success
            && let Some(user) = &response.user
        {
            self.state.borrow_mut().user = Some(user.clone());
        }
    }
}
