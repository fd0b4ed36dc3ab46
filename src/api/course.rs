//! Course Endpoints

use lms_core::domain::{Course, CourseOption};
use lms_core::dto;

use super::get_text;
use crate::config::AppConfig;

pub async fn list_courses(config: &AppConfig) -> Result<Vec<Course>, String> {
    let body = get_text(&config.api_url("courses/all")).await?;
    dto::decode_courses(&body).map_err(|e| e.to_string())
}

/// Courses as assignment options for the students page
pub async fn list_course_options(config: &AppConfig) -> Result<Vec<CourseOption>, String> {
    let body = get_text(&config.api_url("courses/all")).await?;
    dto::decode_course_options(&body).map_err(|e| e.to_string())
}
