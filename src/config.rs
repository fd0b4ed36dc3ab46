//! Application Configuration
//!
//! Base URLs for the remote API, overridable at build time through
//! `LMS_API_BASE_URL` and `LMS_CERTIFICATE_BASE_URL`.

const DEFAULT_API_BASE_URL: &str = "https://api.codingwise.in/";
const DEFAULT_CERTIFICATE_BASE_URL: &str = "http://localhost/codingwise-lms/public/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub certificate_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_CERTIFICATE_BASE_URL)
    }
}

impl AppConfig {
    pub fn new(api_base_url: &str, certificate_base_url: &str) -> Self {
        Self {
            api_base_url: with_trailing_slash(api_base_url),
            certificate_base_url: with_trailing_slash(certificate_base_url),
        }
    }

    /// Build-time overrides, falling back to the defaults
    pub fn from_env() -> Self {
        Self::new(
            option_env!("LMS_API_BASE_URL").filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL),
            option_env!("LMS_CERTIFICATE_BASE_URL").filter(|v| !v.is_empty()).unwrap_or(DEFAULT_CERTIFICATE_BASE_URL),
        )
    }

    /// Full URL of an API endpoint such as `courses/all`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path.trim_start_matches('/'))
    }

    pub fn certificate_url(&self, path: &str) -> String {
        format!("{}{}", self.certificate_base_url, path.trim_start_matches('/'))
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
