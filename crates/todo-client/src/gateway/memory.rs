//! In-memory credential store
//!
//! Used by host-side tests and anywhere durable storage is unavailable.

use std::cell::RefCell;

use super::CredentialStore;
use crate::domain::ClientResult;

#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RefCell<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) -> ClientResult<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.get(), None);

        store.set("abc123").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc123"));

        store.set("def456").unwrap();
        assert_eq!(store.get().as_deref(), Some("def456"));

        store.clear();
        assert_eq!(store.get(), None);
    }
}
