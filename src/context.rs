//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use lms_core::domain::Lead;

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Courses,
    Students,
    Leads,
    LeadForm,
    Certificate,
}

impl Page {
    pub const ALL: &'static [Page] = &[
        Page::Courses,
        Page::Students,
        Page::Leads,
        Page::LeadForm,
        Page::Certificate,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Courses => "Courses",
            Page::Students => "Students",
            Page::Leads => "My Leads",
            Page::LeadForm => "Lead Form",
            Page::Certificate => "Certificates",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after the stored leads change - read
    pub leads_version: ReadSignal<u32>,
    /// Bumped after the stored leads change - write
    set_leads_version: WriteSignal<u32>,
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Lead open in the edit form (None = not editing)
    pub editing_lead: RwSignal<Option<Lead>>,
}

impl AppContext {
    pub fn new(
        leads_version: (ReadSignal<u32>, WriteSignal<u32>),
        page: (ReadSignal<Page>, WriteSignal<Page>),
    ) -> Self {
        Self {
            leads_version: leads_version.0,
            set_leads_version: leads_version.1,
            page: page.0,
            set_page: page.1,
            editing_lead: RwSignal::new(None),
        }
    }

    /// Ask lead views to reload from storage
    pub fn reload_leads(&self) {
        self.set_leads_version.update(|v| *v += 1);
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    pub fn edit_lead(&self, lead: Option<Lead>) {
        self.editing_lead.set(lead);
    }
}
