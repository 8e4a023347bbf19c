//! Durable bearer-token persistence scoped to the browser origin.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one credential is stored, under a fixed key; absence of the key
//! means "no session". The token is treated as an opaque bearer secret
//! whose confidentiality is the transport layer's concern, not this
//! module's.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths safely
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key holding the session token.
pub const TOKEN_KEY: &str = "marinova_auth_token";

/// Single-slot credential persistence; last write wins.
pub trait TokenStore {
    /// Store `token`, replacing any previous value.
    fn set(&self, token: &str);
    /// Currently stored token, if any.
    fn get(&self) -> Option<String>;
    /// Discard the stored token. Idempotent.
    fn remove(&self);
    /// Whether a token is currently stored.
    fn has(&self) -> bool {
        self.get().is_some()
    }
}

/// Token storage backed by browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// In-memory token slot for native contexts and tests.
///
/// Clones share the same slot, mirroring how every `BrowserTokenStore`
/// sees the one localStorage.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn remove(&self) {
        *self.slot.borrow_mut() = None;
    }
}
