//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `auth` holds the session snapshot mirrored
//! into the UI, `session` owns the authoritative lifecycle, and
//! `login_form` drives the login/signup/verification view machine.

pub mod auth;
pub mod login_form;
pub mod session;
