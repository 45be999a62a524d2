use std::sync::{Arc, Mutex};

use crate::token::{non_empty, StoreError, TokenStore};

/// In-memory TokenStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already stored.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        let guard = self.token.lock().ok()?;
        non_empty(guard.clone())
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| StoreError::Write(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| StoreError::Remove(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let store = MemoryStore::new();
        assert!(store.get().is_none());
        assert!(!store.has_token());

        store.set("abc").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc"));
        assert!(store.has_token());

        store.clear().unwrap();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clones_share_the_token() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("shared").unwrap();
        assert_eq!(other.get().as_deref(), Some("shared"));

        other.clear().unwrap();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_blank_token_counts_as_absent() {
        let store = MemoryStore::with_token("   ");
        assert!(store.get().is_none());
    }
}
