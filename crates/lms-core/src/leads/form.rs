//! Lead Form State
//!
//! Holds the in-progress draft. Field edits touch exactly one field; submit
//! validates, upserts through the service and resets to a fresh draft.

use log::warn;

use super::service::{FormMode, LeadService, SubmitOutcome};
use crate::domain::{DomainResult, IdSource, Lead, LeadField};
use crate::repository::LeadStore;

#[derive(Debug, Clone, PartialEq)]
pub struct LeadForm {
    draft: Lead,
    mode: FormMode,
}

impl LeadForm {
    /// Blank form for a new lead with a freshly assigned id
    pub fn create(ids: &impl IdSource) -> Self {
        Self { draft: Lead::new(ids.next_id()), mode: FormMode::Create }
    }

    /// Form prefilled from an existing lead
    pub fn edit(existing: Lead) -> Self {
        Self { draft: existing, mode: FormMode::Edit }
    }

    pub fn draft(&self) -> &Lead {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.mode == FormMode::Edit
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() { "Edit Lead" } else { "Add New Lead" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update Lead" } else { "Add Lead" }
    }

    pub fn set_field(&mut self, field: LeadField, value: String) {
        self.draft.set_field(field, value);
    }

    /// Validate and persist the draft, then reset to a fresh create form.
    ///
    /// On error the draft is kept so the user can correct it.
    pub fn submit<L: LeadStore>(
        &mut self,
        service: &LeadService<L>,
        ids: &impl IdSource,
    ) -> DomainResult<SubmitOutcome> {
        self.draft.validate()?;
        let outcome = service.submit(self.draft.clone(), self.mode).map_err(|e| {
            warn!("[LeadForm] submit of lead {} failed: {}", self.draft.id, e);
            e
        })?;
        self.reset(ids);
        Ok(outcome)
    }

    /// Discard the draft
    pub fn reset(&mut self, ids: &impl IdSource) {
        self.draft = Lead::new(ids.next_id());
        self.mode = FormMode::Create;
    }
}
