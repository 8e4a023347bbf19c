//! HTTP gateway for the remote authentication service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning the normalized network-failure
//! response since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every transport-level failure (request build, send, body parse) is
//! folded into `AuthResponse { success: false }` before it reaches a
//! caller; nothing here returns a raw error. Token persistence is a side
//! effect of the responses themselves: issued tokens are written before a
//! call returns, rejected tokens are evicted.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, LoginCredentials, RegisterCredentials};
use crate::util::token::TokenStore;

/// Default development address of the MARINOVA API server.
const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Normalized message for any transport-level failure.
const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Returned by `current_user` when no credential is stored.
const MISSING_TOKEN_MESSAGE: &str = "No token found";

/// Base URL of the authentication service, taken from `MARINOVA_API_URL`
/// at build time.
pub fn api_base() -> String {
    option_env!("MARINOVA_API_URL").unwrap_or(DEFAULT_API_URL).to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(base: &str) -> String {
    format!("{base}/api/auth/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/api/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn me_endpoint(base: &str) -> String {
    format!("{base}/api/auth/me")
}

/// Uniform failure shape for unreachable-network and unparsable-body
/// outcomes.
pub(crate) fn network_error_response() -> AuthResponse {
    AuthResponse {
        success: false,
        message: NETWORK_ERROR_MESSAGE.to_owned(),
        token: None,
        user: None,
    }
}

/// Failure returned by `current_user` without touching the network.
pub(crate) fn missing_token_response() -> AuthResponse {
    AuthResponse {
        success: false,
        message: MISSING_TOKEN_MESSAGE.to_owned(),
        token: None,
        user: None,
    }
}

/// Persist a freshly issued bearer token before the response reaches the
/// caller. Responses without a token (or without success) leave the store
/// untouched.
pub(crate) fn remember_issued_token(store: &dyn TokenStore, response: &AuthResponse) {
    if response.success
        && let Some(token) = &response.token
    {
        store.set(token);
    }
}

/// Drop the stored token once the server stops honoring it. Any
/// non-success outcome counts as proof the credential is no longer
/// usable.
pub(crate) fn evict_rejected_token(store: &dyn TokenStore, response: &AuthResponse) {
    if !response.success {
        store.remove();
    }
}

/// Operations offered by the remote authentication service.
///
/// The store is passed per call so implementations can apply the token
/// side effects that keep persisted credentials consistent with
/// responses.
// Single-threaded WASM consumers; Send bounds are intentionally absent.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Create an account via `POST /api/auth/register`.
    async fn register(&self, store: &dyn TokenStore, credentials: &RegisterCredentials) -> AuthResponse;
    /// Authenticate via `POST /api/auth/login`.
    async fn login(&self, store: &dyn TokenStore, credentials: &LoginCredentials) -> AuthResponse;
    /// Resolve the stored token to its account via `GET /api/auth/me`.
    async fn current_user(&self, store: &dyn TokenStore) -> AuthResponse;
}

/// Live gateway talking to the MARINOVA authentication endpoints.
#[derive(Clone, Debug)]
pub struct AuthGateway {
    base: String,
}

impl AuthGateway {
    pub fn new(base: String) -> Self {
        Self { base }
    }
}

impl Default for AuthGateway {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl AuthApi for AuthGateway {
    async fn register(&self, store: &dyn TokenStore, credentials: &RegisterCredentials) -> AuthResponse {
        #[cfg(feature = "hydrate")]
        let response = post_auth_json(&register_endpoint(&self.base), credentials).await;
        #[cfg(not(feature = "hydrate"))]
        let response = {
            let _ = (&self.base, credentials);
            network_error_response()
        };
        remember_issued_token(store, &response);
        response
    }

    async fn login(&self, store: &dyn TokenStore, credentials: &LoginCredentials) -> AuthResponse {
        #[cfg(feature = "hydrate")]
        let response = post_auth_json(&login_endpoint(&self.base), credentials).await;
        #[cfg(not(feature = "hydrate"))]
        let response = {
            let _ = (&self.base, credentials);
            network_error_response()
        };
        remember_issued_token(store, &response);
        response
    }

    async fn current_user(&self, store: &dyn TokenStore) -> AuthResponse {
        // No token, no network call.
        let Some(token) = store.get() else {
            return missing_token_response();
        };
        #[cfg(feature = "hydrate")]
        let response = fetch_me(&me_endpoint(&self.base), &token).await;
        #[cfg(not(feature = "hydrate"))]
        let response = {
            let _ = (&self.base, token);
            network_error_response()
        };
        evict_rejected_token(store, &response);
        response
    }
}

/// POST a JSON credential body and parse the canonical response shape.
///
/// The body is parsed regardless of HTTP status; auth failures arrive as
/// well-formed `success = false` payloads.
#[cfg(feature = "hydrate")]
async fn post_auth_json<T: serde::Serialize>(url: &str, body: &T) -> AuthResponse {
    let result = async {
        gloo_net::http::Request::post(url)
            .json(body)?
            .send()
            .await?
            .json::<AuthResponse>()
            .await
    }
    .await;
    match result {
        Ok(response) => response,
        Err(err) => {
            leptos::logging::warn!("auth request failed: {err}");
            network_error_response()
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_me(url: &str, token: &str) -> AuthResponse {
    let result = async {
        gloo_net::http::Request::get(url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await?
            .json::<AuthResponse>()
            .await
    }
    .await;
    match result {
        Ok(response) => response,
        Err(err) => {
            leptos::logging::warn!("current-user request failed: {err}");
            network_error_response()
        }
    }
}
