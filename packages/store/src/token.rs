//! # Session token storage
//!
//! The only piece of state the client persists between page loads is the
//! opaque session token issued by the backend at sign-in. It lives under the
//! fixed key [`APP_TOKEN`] and its presence is what the session bootstrap
//! reads to decide whether to fetch the current user.
//!
//! [`TokenStore`] abstracts where that string lives:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStore`] | tests, headless native runs |
//! | [`crate::FileStore`] | native builds (file under the platform data dir) |
//! | `LocalStorageStore` | browser (`window.localStorage`) |

use thiserror::Error;

/// Storage key for the session token.
pub const APP_TOKEN: &str = "APP_TOKEN";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("failed to write token: {0}")]
    Write(String),
    #[error("failed to remove token: {0}")]
    Remove(String),
}

/// Persistent holder for the session token.
pub trait TokenStore: Send + Sync {
    /// The stored token, if any. Empty strings count as absent.
    fn get(&self) -> Option<String>;

    fn set(&self, token: &str) -> Result<(), StoreError>;

    fn clear(&self) -> Result<(), StoreError>;

    fn has_token(&self) -> bool {
        self.get().is_some()
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|t| !t.trim().is_empty())
}
