//! Lead Store
//!
//! Keeps the whole leads collection as one JSON array under the `leads` key.

use log::{debug, warn};

use super::traits::{KeyValueStorage, LeadStore};
use crate::domain::{DomainResult, Lead};

/// Storage key holding the serialized collection
pub const LEADS_KEY: &str = "leads";

/// `LeadStore` over any key-value storage
#[derive(Debug)]
pub struct JsonLeadStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> JsonLeadStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: KeyValueStorage> LeadStore for JsonLeadStore<S> {
    fn load(&self) -> Vec<Lead> {
        let raw = match self.storage.get_item(LEADS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("[LeadStore] read failed, treating as empty: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Lead>>(&raw) {
            Ok(leads) => {
                debug!("[LeadStore] loaded {} leads", leads.len());
                leads
            }
            Err(e) => {
                warn!("[LeadStore] stored leads are unreadable, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&self, leads: &[Lead]) -> DomainResult<()> {
        let raw = serde_json::to_string(leads)?;
        self.storage.set_item(LEADS_KEY, &raw)?;
        debug!("[LeadStore] saved {} leads", leads.len());
        Ok(())
    }
}
