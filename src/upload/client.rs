use reqwest::multipart;
use serde::Deserialize;
use thiserror::Error;

use crate::upload::types::SelectedFile;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("upload request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upload rejected with status: {0}")]
    Rejected(reqwest::StatusCode),
}

/// Response body of an accepted upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    pub job_id: String,
}

/// Performs the form submission the widget gates: one multipart POST
/// carrying the file and email fields. No retry; a failure goes back to
/// the caller to surface.
#[derive(Clone)]
pub struct UploadClient {
    client: reqwest::Client,
    base_url: String,
}

impl UploadClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn submit(
        &self,
        file: &SelectedFile,
        email: &str,
    ) -> Result<UploadReceipt, UploadError> {
        let bytes = tokio::fs::read(&file.path).await?;
        let part = multipart::Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = multipart::Form::new()
            .text("email", email.to_string())
            .part("file", part);

        tracing::info!(file = %file.name, size = file.size_bytes, "submitting upload");
        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, "upload rejected by server");
            return Err(UploadError::Rejected(status));
        }

        Ok(response.json::<UploadReceipt>().await?)
    }
}
