//! # Browser `localStorage` token store
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used by the web build. It is a
//! zero-size handle: every call looks up `window.localStorage` afresh, so the
//! struct stays `Send + Sync` and clones are free.
//!
//! Reads degrade to "no token" when storage is unavailable (private browsing,
//! sandboxed iframes); writes report [`StoreError::Unavailable`].

use web_sys::Storage;

use crate::token::{non_empty, StoreError, TokenStore, APP_TOKEN};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl TokenStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        let storage = Self::storage().ok()?;
        non_empty(storage.get_item(APP_TOKEN).ok().flatten())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(APP_TOKEN, token)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(APP_TOKEN)
            .map_err(|e| StoreError::Remove(format!("{e:?}")))
    }
}
