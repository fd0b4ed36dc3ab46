//! Local Storage
//!
//! `KeyValueStorage` over `window.localStorage`.

use lms_core::domain::{DomainError, DomainResult};
use lms_core::repository::KeyValueStorage;

/// Handle to `window.localStorage`; unavailable storage reads as empty and
/// fails on write
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("[Storage] localStorage is not available");
        }
        Self { inner }
    }

    fn storage(&self) -> DomainResult<&web_sys::Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| DomainError::Storage("localStorage is not available".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        match &self.inner {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| DomainError::Storage(format!("read {}: {:?}", key, e))),
            None => Ok(None),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| DomainError::Storage(format!("write {}: {:?}", key, e)))
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| DomainError::Storage(format!("remove {}: {:?}", key, e)))
    }
}
