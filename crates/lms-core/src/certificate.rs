//! Certificate Generation
//!
//! Helpers for the bulk certificate upload: the CSV sample offered for
//! download, the archive name taken from the response, and error messages.

use percent_encoding::percent_decode_str;
use serde::Deserialize;

/// Multipart field carrying the CSV
pub const CSV_FIELD: &str = "csvFile";

/// Endpoint path relative to the certificate base URL
pub const BULK_PATH: &str = "courses/bulk";

pub const SAMPLE_CSV_NAME: &str = "sample.csv";
pub const SAMPLE_CSV: &str = "studentName,courseName\nJohn Doe,React Basics";
pub const DEFAULT_ARCHIVE_NAME: &str = "certificates.zip";
pub const DEFAULT_ERROR: &str = "Failed to generate certificates";
pub const MISSING_FILE: &str = "Please select a CSV file";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// File name from a `Content-Disposition` header, defaulting to
/// `certificates.zip`
pub fn archive_name(content_disposition: Option<&str>) -> String {
    content_disposition
        .and_then(|header| header.split("filename=").nth(1))
        .map(|name| name.split(';').next().unwrap_or(name).trim().replace('"', ""))
        .map(|name| percent_decode_str(&name).decode_utf8_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_ARCHIVE_NAME.to_string())
}

/// Message from a failed response body, or the generic failure text
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_name() {
        assert_eq!(archive_name(None), "certificates.zip");
        assert_eq!(archive_name(Some("attachment")), "certificates.zip");
        assert_eq!(archive_name(Some(r#"attachment; filename="batch-7.zip""#)), "batch-7.zip");
        assert_eq!(archive_name(Some("attachment; filename=my%20certs.zip; size=10")), "my certs.zip");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"message":"Invalid CSV header"}"#), "Invalid CSV header");
        assert_eq!(error_message(r#"{"error":true}"#), DEFAULT_ERROR);
        assert_eq!(error_message("<html>"), DEFAULT_ERROR);
    }
}
