//! LMS Admin App
//!
//! Theme shell with the navigation bar and the active page.

use leptos::prelude::*;
use reactive_stores::Store;

use lms_core::theme::ThemeConfig;

use crate::browser::BrowserStorage;
use crate::components::{CertificateGenerator, CourseExplorer, LeadFormPage, LeadsPage, NavBar, StudentsTable};
use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let leads_version = signal(0u32);
    let page = signal(Page::Leads);

    let store = Store::new(AppState::default());
    let config = AppConfig::from_env();
    log::info!("[APP] API base {}", config.api_base_url);

    // Provide context to all children
    provide_context(AppContext::new(leads_version, page));
    provide_context(store);
    provide_context(config);

    // Read persisted shell settings on mount
    Effect::new(move |_| {
        *store.theme().write() = ThemeConfig::load(&BrowserStorage::new());
    });

    let shell_class = move || {
        store.theme().with(|theme| {
            let mut class = theme.shell_class();
            if theme.is_dark() {
                class.push_str(" dark");
            }
            class
        })
    };

    view! {
        <div class=shell_class>
            <NavBar />
            <main class="p-6">
                {move || match page.0.get() {
                    Page::Courses => view! { <CourseExplorer /> }.into_any(),
                    Page::Students => view! { <StudentsTable /> }.into_any(),
                    Page::Leads => view! { <LeadsPage /> }.into_any(),
                    Page::LeadForm => view! { <LeadFormPage /> }.into_any(),
                    Page::Certificate => view! { <CertificateGenerator /> }.into_any(),
                }}
            </main>
        </div>
    }
}
