//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO storage or browser dependencies.

mod entity;
mod lead;
mod id;
mod date;
mod course;
mod student;

pub use entity::{Entity, DomainError, DomainResult};
pub use lead::{Lead, LeadField, LEAD_STATUSES, GENDERS};
pub use id::{IdSource, ClockIdGenerator};
pub use date::{format_display_date, is_iso_date, date_part};
pub use course::{Course, CourseModule, ContentItem, ContentType, CourseOption};
pub use student::{Student, EnrolledCourse};
