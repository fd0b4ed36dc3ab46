//! Lead Persistence Wiring
//!
//! Binds the leads service to browser local storage.

use lms_core::domain::ClockIdGenerator;
use lms_core::leads::LeadService;
use lms_core::repository::JsonLeadStore;

use crate::browser::BrowserStorage;

/// Process-wide id source for new leads
pub static LEAD_IDS: ClockIdGenerator = ClockIdGenerator::new();

pub type BrowserLeadService = LeadService<JsonLeadStore<BrowserStorage>>;

/// Leads service over `window.localStorage`
pub fn lead_service() -> BrowserLeadService {
    LeadService::new(JsonLeadStore::new(BrowserStorage::new()))
}
