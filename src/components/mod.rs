//! UI Components
//!
//! Leptos components for the admin pages.

mod delete_confirm_button;
mod pagination;
mod lead_form;
mod lead_table;
mod leads_page;
mod course_explorer;
mod students_table;
mod certificate_generator;
mod nav_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use pagination::Pagination;
pub use lead_form::LeadForm;
pub use lead_table::LeadTable;
pub use leads_page::{LeadFormPage, LeadsPage};
pub use course_explorer::CourseExplorer;
pub use students_table::StudentsTable;
pub use certificate_generator::CertificateGenerator;
pub use nav_bar::NavBar;
