//! Lead Table Component
//!
//! Searchable, sortable, paginated view of the stored leads. The table only
//! reads storage; deletes go through the leads service.

use leptos::prelude::*;

use lms_core::domain::{format_display_date, Lead};
use lms_core::leads::{LeadColumn, LeadTableState};

use crate::components::{DeleteConfirmButton, Pagination};
use crate::context::AppContext;
use crate::leads::lead_service;
use crate::store::{store_remove_lead, store_set_leads, use_app_store, AppStateStoreFields};

#[component]
pub fn LeadTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let table = RwSignal::new(LeadTableState::new());

    // Reload the snapshot whenever stored leads change
    Effect::new(move |_| {
        let version = ctx.leads_version.get();
        let leads = lead_service().list();
        log::debug!("[LeadTable] loaded {} leads (version {})", leads.len(), version);
        store_set_leads(&store, leads);
        table.update(|t| t.collection_changed());
    });

    let page = Memo::new(move |_| {
        let leads = store.leads().read();
        table.with(|t| t.view(&leads))
    });

    view! {
        <div class="panel mt-6">
            <div class="mb-5 flex flex-col gap-5 md:flex-row md:items-center">
                <h5 class="text-lg font-semibold dark:text-white-light">"Lead Table"</h5>
                <div class="ltr:ml-auto rtl:mr-auto">
                    <input
                        type="text"
                        class="form-input w-auto"
                        placeholder="Search..."
                        prop:value=move || table.with(|t| t.search().to_string())
                        on:input=move |ev| {
                            let search = event_target_value(&ev);
                            table.update(|t| t.set_search(search));
                        }
                    />
                </div>
            </div>
            <div class="datatables">
                <table class="table-hover whitespace-nowrap">
                    <thead>
                        <tr>
                            {LeadColumn::ALL.iter().map(|&column| view! {
                                <th
                                    class="cursor-pointer select-none"
                                    on:click=move |_| table.update(|t| t.toggle_sort(column))
                                >
                                    {column.title()}
                                    {move || {
                                        let sort = table.with(|t| t.sort());
                                        if sort.column == column { sort.direction.arrow() } else { "" }
                                    }}
                                </th>
                            }).collect_view()}
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || page.with(|p| p.records.clone()).into_iter().map(|lead| view! {
                            <LeadRow lead=lead />
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || page.with(|p| p.records.is_empty())>
                    <div class="py-6 text-center text-gray-500">"No records"</div>
                </Show>
                <Pagination page=page table=table />
            </div>
        </div>
    }
}

/// One table row
#[component]
fn LeadRow(lead: Lead) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let id = lead.id;
    let dob = format_display_date(&lead.date_of_birth);
    let row_copy = lead.clone();

    let delete = move |_: ()| match lead_service().remove(id) {
        Ok(_) => {
            store_remove_lead(&store, id);
            ctx.reload_leads();
        }
        Err(e) => log::warn!("[LeadTable] delete of lead {} failed: {}", id, e),
    };

    view! {
        <tr>
            <td><div>{lead.full_name}</div></td>
            <td>{lead.company_name}</td>
            <td>{lead.lead_status}</td>
            <td>{lead.email}</td>
            <td>{lead.phone_number}</td>
            <td><div>{dob}</div></td>
            <td class="flex gap-2">
                <button
                    type="button"
                    class="text-blue-600 hover:text-blue-800"
                    on:click=move |_| {
                        // Prefer the stored copy over the rendered row
                        let stored = lead_service().find(id).unwrap_or_else(|| row_copy.clone());
                        ctx.edit_lead(Some(stored));
                    }
                >
                    "Edit"
                </button>
                <DeleteConfirmButton on_confirm=delete />
            </td>
        </tr>
    }
}
