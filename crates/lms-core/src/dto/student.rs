//! Student DTOs
//!
//! `GET users/all` -> `{ success, users: [student] }`.

use log::debug;
use serde::Deserialize;

use super::{decode_each, ApiEnvelope};
use crate::domain::{DomainResult, EnrolledCourse, Student};

#[derive(Debug, Clone, Deserialize)]
pub struct StudentDto {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub enrolled_courses: Option<Vec<EnrolledCourseDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrolledCourseDto {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
}

impl StudentDto {
    pub fn into_domain(self) -> Student {
        Student {
            id: self.id,
            email: self.email,
            username: self.username.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            enrolled_courses: self
                .enrolled_courses
                .unwrap_or_default()
                .into_iter()
                .map(|c| EnrolledCourse {
                    id: c.id,
                    name: c.name.unwrap_or_default(),
                    purchase_date: c.purchase_date.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

/// Decode the students list
pub fn decode_students(body: &str) -> DomainResult<Vec<Student>> {
    let envelope = ApiEnvelope::parse(body)?;
    if !envelope.success {
        debug!("[API] users response reported failure: {:?}", envelope.message);
        return Ok(Vec::new());
    }
    Ok(decode_each::<StudentDto>(envelope.users, "student")
        .into_iter()
        .map(StudentDto::into_domain)
        .collect())
}
