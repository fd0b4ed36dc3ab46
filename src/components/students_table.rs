//! Students Table Component
//!
//! Students with their enrolled courses. Rows expand to list enrollments,
//! remove access and assign another course; a separate form assigns a
//! course to a user who is not in the list yet.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use lms_core::domain::{CourseOption, DomainError, Student};

use crate::api;
use crate::browser;
use crate::config::AppConfig;
use crate::store::{store_update_student, use_app_store, AppStateStoreFields, AppStore};

/// Look up a course option by the id submitted from a select
fn find_option(options: &[CourseOption], raw_id: &str) -> Option<CourseOption> {
    let id = raw_id.parse::<u64>().ok()?;
    options.iter().find(|c| c.id == id).cloned()
}

#[component]
pub fn StudentsTable() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = use_app_store();
    let expanded = RwSignal::new(HashSet::<u64>::new());

    // Load students and course options on mount
    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            match api::list_students(&config).await {
                Ok(students) => {
                    log::info!("[Students] loaded {} students", students.len());
                    *store.students().write() = students;
                }
                Err(e) => log::error!("[Students] load failed: {}", e),
            }
            match api::list_course_options(&config).await {
                Ok(options) => *store.course_options().write() = options,
                Err(e) => log::error!("[Students] course options failed: {}", e),
            }
        });
    });

    view! {
        <div class="p-6">
            <AssignNewUserForm />

            <div class="overflow-x-auto border rounded-lg shadow">
                <table class="min-w-full bg-white">
                    <thead class="bg-gray-50 text-sm font-semibold text-gray-600">
                        <tr>
                            <th class="p-3"></th>
                            <th class="p-3 text-left">"Name"</th>
                            <th class="p-3 text-left">"Email"</th>
                            <th class="p-3 text-left">"Courses"</th>
                            <th class="p-3 text-left">"Last Enrolled"</th>
                        </tr>
                    </thead>
                    <tbody class="text-sm divide-y divide-gray-100">
                        <For
                            each=move || store.students().get()
                            key=|student| (student.id, student.enrolled_courses.len())
                            children=move |student| view! {
                                <StudentRows student=student expanded=expanded store=store />
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn StudentRows(
    student: Student,
    expanded: RwSignal<HashSet<u64>>,
    store: AppStore,
) -> impl IntoView {
    let id = student.id;
    let is_open = move || expanded.with(|set| set.contains(&id));
    let toggle = move |_| {
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        })
    };
    let course_count = format!("{} course(s)", student.enrolled_courses.len());
    let last_enrolled = student.last_enrolled();
    let display_name = student.display_name();
    let email = student.email.clone();
    let enrolled = student.enrolled_courses.clone();

    let remove_access = move |course_id: u64, course_name: String| {
        let email = store.students().with(|list| {
            list.iter().find(|s| s.id == id).map(|s| s.email.clone()).unwrap_or_default()
        });
        if !browser::confirm(&format!("Remove {} from {}?", course_name, email)) {
            return;
        }
        store_update_student(&store, id, |student| match student.remove_course(course_id) {
            Ok(removed) => log::info!("[Students] removed {} from {}", removed.name, student.email),
            Err(e) => log::warn!("[Students] {}", e),
        });
        browser::alert("Removed!");
    };

    let (selected_course, set_selected_course) = signal(String::new());
    let assign = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(course) = store.course_options().with(|options| find_option(options, &selected_course.get())) else {
            return;
        };
        let mut result = Ok(());
        let mut email = String::new();
        store_update_student(&store, id, |student| {
            email = student.email.clone();
            result = student.assign_course(&course, chrono::Utc::now());
        });
        match result {
            Ok(()) => {
                browser::alert(&format!("Assigned! {} assigned to {}", course.name, email));
                set_selected_course.set(String::new());
            }
            Err(DomainError::Conflict(msg)) => browser::alert(&format!("Duplicate! {}", msg)),
            Err(e) => log::warn!("[Students] assign failed: {}", e),
        }
    };

    view! {
        <tr class="hover:bg-gray-50">
            <td class="p-3">
                <button type="button" class="text-gray-500" on:click=toggle>
                    {move || if is_open() { "▾" } else { "›" }}
                </button>
            </td>
            <td class="p-3 font-medium text-gray-800">{display_name}</td>
            <td class="p-3 text-gray-600">{email}</td>
            <td class="p-3">
                <span class="bg-blue-50 text-blue-700 px-2 py-1 text-xs rounded">{course_count}</span>
            </td>
            <td class="p-3 text-gray-500">{last_enrolled}</td>
        </tr>
        <Show when=is_open>
            <tr class="bg-gray-50">
                <td colspan="5" class="p-4">
                    <h4 class="font-medium text-sm mb-2">"Enrolled Courses"</h4>
                    {if enrolled.is_empty() {
                        view! { <p class="text-xs text-gray-500 italic">"No courses enrolled."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="space-y-2">
                                {enrolled.clone().into_iter().map(|course| {
                                    let name = course.name.clone();
                                    view! {
                                        <li class="flex justify-between border px-3 py-2 rounded bg-white shadow-sm">
                                            <span class="text-sm text-gray-700">{course.name}</span>
                                            <button
                                                type="button"
                                                class="text-xs text-red-600 hover:text-red-800"
                                                on:click=move |_| remove_access(course.id, name.clone())
                                            >
                                                "Remove Access"
                                            </button>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        }.into_any()
                    }}

                    <form on:submit=assign class="mt-4 flex gap-2">
                        <CourseSelect selected=selected_course set_selected=set_selected_course />
                        <button type="submit" class="bg-green-600 text-white text-sm px-3 py-1 rounded hover:bg-green-700">
                            "Assign"
                        </button>
                    </form>
                </td>
            </tr>
        </Show>
    }
}

/// Select over the course options in the store
#[component]
fn CourseSelect(
    selected: ReadSignal<String>,
    set_selected: WriteSignal<String>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <select
            class="border px-3 py-1 rounded text-sm w-full sm:w-auto"
            required=true
            prop:value=move || selected.get()
            on:change=move |ev| set_selected.set(event_target_value(&ev))
        >
            <option value="">"Select Course"</option>
            <For
                each=move || store.course_options().get()
                key=|option| option.id
                children=move |option| view! {
                    <option value=option.id.to_string()>{option.name}</option>
                }
            />
        </select>
    }
}

/// Assign a course to a user by email (notice only)
#[component]
fn AssignNewUserForm() -> impl IntoView {
    let store = use_app_store();
    let (email, set_email) = signal(String::new());
    let (selected_course, set_selected_course) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_string();
        let course = store.course_options().with(|options| find_option(options, &selected_course.get()));
        let Some(course) = course.filter(|_| !address.is_empty()) else {
            return;
        };
        browser::alert(&format!("Assigned! {} assigned to {}", course.name, address));
        set_email.set(String::new());
        set_selected_course.set(String::new());
    };

    view! {
        <div class="mb-8 p-4 bg-white rounded-lg shadow border">
            <h2 class="text-lg font-semibold mb-3">"Assign Course to New User"</h2>
            <form on:submit=submit class="flex flex-col sm:flex-row gap-4">
                <input
                    type="email"
                    placeholder="User email"
                    required=true
                    class="flex-1 border rounded px-4 py-2"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <CourseSelect selected=selected_course set_selected=set_selected_course />
                <button type="submit" class="bg-blue-600 text-white rounded px-6 py-2 hover:bg-blue-700">
                    "Assign"
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_option() {
        let options = vec![
            CourseOption { id: 1, name: "Rust".to_string() },
            CourseOption { id: 2, name: "Go".to_string() },
        ];
        assert_eq!(find_option(&options, "2").map(|c| c.name), Some("Go".to_string()));
        assert!(find_option(&options, "").is_none());
        assert!(find_option(&options, "9").is_none());
    }
}
