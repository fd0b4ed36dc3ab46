//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory;
mod lead_store;


pub use traits::{KeyValueStorage, LeadStore};
pub use memory::MemoryStorage;
pub use lead_store::{JsonLeadStore, LEADS_KEY};
