//! Lead Service
//!
//! Upsert-by-id and removal over a `LeadStore`. Every mutation loads the
//! current snapshot, applies the change and saves the whole collection.

use log::info;

use crate::domain::{DomainError, DomainResult, Entity, Lead};
use crate::repository::LeadStore;

/// Whether a submitted lead is new or replaces an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Lead),
    Updated(Lead),
}

impl SubmitOutcome {
    pub fn lead(&self) -> &Lead {
        match self {
            SubmitOutcome::Created(lead) | SubmitOutcome::Updated(lead) => lead,
        }
    }

    /// Notice shown to the user after submit
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Created(_) => "Lead added successfully!",
            SubmitOutcome::Updated(_) => "Lead updated successfully!",
        }
    }
}

/// Apply one lead to a collection.
///
/// `Edit` replaces the element with the same id in place and fails with
/// `NotFound` when there is none. `Create` appends and refuses an id that is
/// already present.
pub fn upsert(mut leads: Vec<Lead>, lead: Lead, mode: FormMode) -> DomainResult<Vec<Lead>> {
    let existing = leads.iter().position(|l| l.id == lead.id);
    match (mode, existing) {
        (FormMode::Edit, Some(index)) => leads[index] = lead,
        (FormMode::Edit, None) => {
            return Err(DomainError::NotFound(format!("lead {}", lead.id)));
        }
        (FormMode::Create, Some(_)) => {
            return Err(DomainError::Conflict(format!("lead {} already exists", lead.id)));
        }
        (FormMode::Create, None) => leads.push(lead),
    }
    Ok(leads)
}

/// Mutations over the persisted leads collection
#[derive(Debug)]
pub struct LeadService<L> {
    store: L,
}

impl<L: LeadStore> LeadService<L> {
    pub fn new(store: L) -> Self {
        Self { store }
    }

    /// Current snapshot of the collection
    pub fn list(&self) -> Vec<Lead> {
        self.store.load()
    }

    /// Stored copy of one lead
    pub fn find(&self, id: u64) -> Option<Lead> {
        self.store.load().into_iter().find(|lead| lead.id() == id)
    }

    /// Upsert one lead and persist the collection
    pub fn submit(&self, lead: Lead, mode: FormMode) -> DomainResult<SubmitOutcome> {
        let leads = upsert(self.store.load(), lead.clone(), mode)?;
        self.store.save(&leads)?;
        let outcome = match mode {
            FormMode::Create => SubmitOutcome::Created(lead),
            FormMode::Edit => SubmitOutcome::Updated(lead),
        };
        info!("[Leads] {:?} lead {} ({} total)", mode, outcome.lead().id, leads.len());
        Ok(outcome)
    }

    /// Remove a lead by id, returning it
    pub fn remove(&self, id: u64) -> DomainResult<Lead> {
        let mut leads = self.store.load();
        let index = leads
            .iter()
            .position(|lead| lead.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("lead {}", id)))?;
        let removed = leads.remove(index);
        self.store.save(&leads)?;
        info!("[Leads] removed lead {} ({} left)", id, leads.len());
        Ok(removed)
    }

    /// Replace the whole collection
    pub fn replace_all(&self, leads: &[Lead]) -> DomainResult<()> {
        self.store.save(leads)?;
        info!("[Leads] replaced collection with {} leads", leads.len());
        Ok(())
    }
}
