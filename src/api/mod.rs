//! Remote API Wrappers
//!
//! Frontend bindings to the course/student REST API and the certificate
//! endpoint, organized by domain.

mod course;
mod student;
mod certificate;

pub use course::*;
pub use student::*;
pub use certificate::*;

/// GET an endpoint and return the body text
async fn get_text(url: &str) -> Result<String, String> {
    log::debug!("[API] GET {}", url);
    let response = reqwest::get(url).await.map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("GET {} failed with {}", url, response.status()));
    }
    response.text().await.map_err(|e| e.to_string())
}
