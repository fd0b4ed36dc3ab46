//! Course Explorer Component
//!
//! Course cards with price and publish status; courses that carry a module
//! outline can be expanded to list their content items.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use lms_core::domain::{Course, CourseModule};

use crate::api;
use crate::config::AppConfig;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CourseExplorer() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = use_app_store();
    let expanded = RwSignal::new(HashSet::<u64>::new());

    // Load courses on mount
    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            match api::list_courses(&config).await {
                Ok(courses) => {
                    log::info!("[Courses] loaded {} courses", courses.len());
                    *store.courses().write() = courses;
                }
                Err(e) => log::error!("[Courses] load failed: {}", e),
            }
        });
    });

    view! {
        <div class="p-6 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            <For
                each=move || store.courses().get()
                key=|course| course.id
                children=move |course| view! { <CourseCard course=course expanded=expanded /> }
            />
        </div>
    }
}

#[component]
fn CourseCard(course: Course, expanded: RwSignal<HashSet<u64>>) -> impl IntoView {
    let id = course.id;
    let is_open = move || expanded.with(|set| set.contains(&id));
    let toggle = move |_| {
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        })
    };
    let badge_class = if course.is_published {
        "inline-block text-xs font-medium mt-2 px-2 py-1 rounded bg-green-100 text-green-700"
    } else {
        "inline-block text-xs font-medium mt-2 px-2 py-1 rounded bg-red-100 text-red-700"
    };
    let has_modules = course.has_modules();
    let modules = course.modules.clone().unwrap_or_default();

    view! {
        <div class="border rounded-lg shadow-md p-4 bg-white">
            <div class="flex justify-between items-center">
                <div>
                    <h3 class="text-lg font-semibold">{course.name.clone()}</h3>
                    <p class="text-sm text-gray-500 mt-1">{course.display_price()}</p>
                    <span class=badge_class>{course.status_label()}</span>
                </div>
                <div class="space-x-2 flex items-center">
                    <Show when=move || has_modules>
                        <button type="button" class="ml-2" on:click=toggle>
                            {move || if is_open() { "▾" } else { "»" }}
                        </button>
                    </Show>
                </div>
            </div>
            <Show when=is_open>
                <div class="mt-4">
                    {modules.clone().into_iter().map(|module| view! { <ModuleOutline module=module /> }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ModuleOutline(module: CourseModule) -> impl IntoView {
    let items = module.content_items;

    view! {
        <div class="mb-3 border-l-2 border-blue-500 pl-3">
            <h4 class="text-sm font-semibold text-blue-600">{module.name}</h4>
            <p class="text-xs text-gray-500 mb-1">{module.description}</p>
            {if items.is_empty() {
                view! { <p class="text-xs text-gray-400 italic">"No content items"</p> }.into_any()
            } else {
                view! {
                    <ul class="list-disc pl-5 text-sm space-y-1">
                        {items.into_iter().map(|item| view! {
                            <li class="flex items-center justify-between">
                                <span>{item.content_type.icon()} " " {item.name}</span>
                                <a
                                    href=item.content_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-blue-500 hover:text-blue-700"
                                >
                                    "Open"
                                </a>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any()
            }}
        </div>
    }
}
