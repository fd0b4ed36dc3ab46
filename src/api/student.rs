//! Student Endpoints

use lms_core::domain::Student;
use lms_core::dto;

use super::get_text;
use crate::config::AppConfig;

pub async fn list_students(config: &AppConfig) -> Result<Vec<Student>, String> {
    let body = get_text(&config.api_url("users/all")).await?;
    dto::decode_students(&body).map_err(|e| e.to_string())
}
