//! Delete Confirm Button Component
//!
//! Inline delete with a confirm/cancel step.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a Delete button; clicking it asks "Delete?" with ✓/✗ buttons.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    type="button"
                    class="text-red-600 hover:text-red-800"
                    title="Delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    type="button"
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
