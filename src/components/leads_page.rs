//! Leads Page
//!
//! Page header, the edit form for the selected lead and the leads table.

use leptos::prelude::*;

use crate::components::{LeadForm, LeadTable};
use crate::context::AppContext;

#[component]
pub fn LeadsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div>
            <div class="panel flex items-center overflow-x-auto whitespace-nowrap p-3 text-primary">
                "My Leads | Sales Sarthi"
            </div>
            {move || ctx.editing_lead.get().map(|lead| view! {
                <div class="mt-6">
                    <LeadForm existing=lead on_close=move |_: ()| ctx.edit_lead(None) />
                </div>
            })}
            <LeadTable />
        </div>
    }
}

/// Stand-alone page for adding a lead
#[component]
pub fn LeadFormPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div>
            <h1 class="text-2xl font-semibold mb-4">"Lead Form"</h1>
            <LeadForm on_close=move |_: ()| {
                log::debug!("[LeadFormPage] form closed");
                ctx.navigate(crate::context::Page::Leads);
            } />
        </div>
    }
}
