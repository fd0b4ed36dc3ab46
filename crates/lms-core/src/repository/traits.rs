//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser local storage, in-memory maps, etc.

use crate::domain::{DomainResult, Lead};

/// Synchronous string key-value storage (the shape of `window.localStorage`)
pub trait KeyValueStorage {
    /// Read the value at `key`, `None` when absent
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write `value` at `key`, replacing any prior value
    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Remove `key` if present
    fn remove_item(&self, key: &str) -> DomainResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        (**self).remove_item(key)
    }
}

/// Whole-collection persistence for leads
///
/// `save` is a full overwrite: concurrent writers clobber each other and
/// the last one wins.
pub trait LeadStore {
    /// Load every stored lead; absent or unreadable data loads as empty
    fn load(&self) -> Vec<Lead>;

    /// Replace the stored collection
    fn save(&self, leads: &[Lead]) -> DomainResult<()>;
}
