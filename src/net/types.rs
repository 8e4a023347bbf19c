//! Wire DTOs for the client/server authentication boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the server's auth payloads so serde
//! round-trips stay lossless. Users are replaced wholesale whenever the
//! server reports one, never patched field by field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated account as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Display name entered at registration.
    #[serde(rename = "fullName")]
    pub full_name: String,
}

/// Canonical response shape shared by the register, login, and me
/// endpoints.
///
/// Failures are data, not errors: transport problems are folded into
/// `success = false` before this type reaches callers, so consumers only
/// ever branch on `success`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    /// Human-readable outcome description; empty when the server omits it.
    #[serde(default)]
    pub message: String,
    /// Bearer token issued on successful register/login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Request body for `POST /api/auth/login`. Transient; lives for the
/// duration of one request.
#[derive(Clone, Debug, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterCredentials {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub password: String,
}
