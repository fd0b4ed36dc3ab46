//! Navigation Bar Component
//!
//! Page tabs plus the theme and sidebar toggles of the shell.

use leptos::prelude::*;

use lms_core::theme::ThemeConfig;

use crate::browser::BrowserStorage;
use crate::context::{AppContext, Page};
use crate::store::{use_app_store, AppStateStoreFields};

/// Apply a theme change and persist it
fn update_theme(theme: &mut ThemeConfig, change: impl FnOnce(&mut ThemeConfig)) {
    change(theme);
    if let Err(e) = theme.persist(&BrowserStorage::new()) {
        log::warn!("[Theme] could not persist settings: {}", e);
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let toggle_dark = move |_| update_theme(&mut store.theme().write(), ThemeConfig::toggle_dark);
    let toggle_sidebar = move |_| update_theme(&mut store.theme().write(), ThemeConfig::toggle_sidebar);

    view! {
        <header class="flex items-center gap-2 border-b bg-white px-4 py-2 dark:bg-black">
            <button type="button" class="nav-toggle" title="Toggle sidebar" on:click=toggle_sidebar>
                "☰"
            </button>
            <nav class="flex gap-1">
                {Page::ALL.iter().map(|&page| {
                    let tab_class = move || {
                        if ctx.page.get() == page { "nav-tab active" } else { "nav-tab" }
                    };
                    view! {
                        <button type="button" class=tab_class on:click=move |_| ctx.navigate(page)>
                            {page.title()}
                        </button>
                    }
                }).collect_view()}
            </nav>
            <button type="button" class="ml-auto nav-toggle" title="Toggle theme" on:click=toggle_dark>
                {move || if store.theme().with(|t| t.is_dark()) { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
