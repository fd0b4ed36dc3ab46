//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use lms_core::domain::{Course, CourseOption, Lead, Student};
use lms_core::theme::ThemeConfig;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Snapshot of the stored leads collection
    pub leads: Vec<Lead>,
    /// Courses for the course explorer
    pub courses: Vec<Course>,
    /// Students with their enrollments
    pub students: Vec<Student>,
    /// Courses offered in assignment selects
    pub course_options: Vec<CourseOption>,
    /// Shell appearance
    pub theme: ThemeConfig,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the leads snapshot
pub fn store_set_leads(store: &AppStore, leads: Vec<Lead>) {
    *store.leads().write() = leads;
}

/// Remove a lead from the snapshot by ID
pub fn store_remove_lead(store: &AppStore, lead_id: u64) {
    store.leads().write().retain(|lead| lead.id != lead_id);
}

/// Update a student in the store by ID
pub fn store_update_student(store: &AppStore, student_id: u64, f: impl FnOnce(&mut Student)) {
    if let Some(student) = store.students().write().iter_mut().find(|s| s.id == student_id) {
        f(student);
    }
}
