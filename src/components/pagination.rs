//! Pagination Footer
//!
//! "Showing x to y of n entries", page-size picker and page buttons.

use leptos::prelude::*;
use lms_core::leads::{LeadPage, LeadTableState, PAGE_SIZES};

#[component]
pub fn Pagination(
    page: Memo<LeadPage>,
    table: RwSignal<LeadTableState>,
) -> impl IntoView {
    let current = move || page.with(|p| p.page);
    let page_count = move || page.with(|p| p.page_count());

    view! {
        <div class="datatable-footer flex flex-wrap items-center justify-between gap-4 mt-4">
            <span class="text-sm">{move || page.with(|p| p.summary())}</span>

            <select
                class="form-select w-auto"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        table.update(|t| t.set_page_size(size));
                    }
                }
            >
                {PAGE_SIZES.iter().map(|&size| view! {
                    <option
                        value=size.to_string()
                        prop:selected=move || table.with(|t| t.page_size() == size)
                    >
                        {size}
                    </option>
                }).collect_view()}
            </select>

            <div class="flex items-center gap-1">
                <button
                    type="button"
                    class="page-btn"
                    disabled=move || current() <= 1
                    on:click=move |_| table.update(|t| t.set_page(t.page() - 1))
                >
                    "‹"
                </button>
                {move || (1..=page_count()).map(|n| view! {
                    <button
                        type="button"
                        class=move || if current() == n { "page-btn active" } else { "page-btn" }
                        on:click=move |_| table.update(|t| t.set_page(n))
                    >
                        {n}
                    </button>
                }).collect_view()}
                <button
                    type="button"
                    class="page-btn"
                    disabled=move || current() >= page_count()
                    on:click=move |_| table.update(|t| t.set_page(t.page() + 1))
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
