//! Leads
//!
//! The lead form (create/update against the store) and the lead table
//! pipeline (filter -> sort -> paginate). Persistence happens only when the
//! collection is mutated through `LeadService`; rendering never writes.

mod service;
mod form;
mod pipeline;
mod table;

pub use service::{LeadService, FormMode, SubmitOutcome, upsert};
pub use form::LeadForm;
pub use pipeline::{filter_leads, sort_leads, paginate};
pub use table::{LeadColumn, LeadPage, LeadTableState, SortDirection, SortStatus, PAGE_SIZES};
