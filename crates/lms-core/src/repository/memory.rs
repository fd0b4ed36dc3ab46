//! In-Memory Storage
//!
//! `KeyValueStorage` backed by a map, used natively and in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use super::traits::KeyValueStorage;
use crate::domain::DomainResult;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    /// Raw stored value, for assertions
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
