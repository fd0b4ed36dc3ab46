//! Certificate Endpoint
//!
//! Uploads a CSV of `studentName,courseName` rows and receives an archive.

use lms_core::certificate::{archive_name, error_message, BULK_PATH, CSV_FIELD};
use reqwest::multipart::{Form, Part};

use crate::config::AppConfig;

/// Archive returned by the certificate endpoint
pub struct CertificateArchive {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub async fn generate_certificates(
    config: &AppConfig,
    csv_name: &str,
    csv: Vec<u8>,
) -> Result<CertificateArchive, String> {
    let part = Part::bytes(csv)
        .file_name(csv_name.to_string())
        .mime_str("text/csv")
        .map_err(|e| e.to_string())?;
    let form = Form::new().part(CSV_FIELD, part);

    let url = config.certificate_url(BULK_PATH);
    log::info!("[API] POST {} ({})", url, csv_name);
    let response = reqwest::Client::new()
        .post(&url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(&body));
    }

    let file_name = archive_name(
        response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok()),
    );
    let bytes = response.bytes().await.map_err(|e| e.to_string())?.to_vec();
    Ok(CertificateArchive { file_name, bytes })
}
