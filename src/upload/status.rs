use serde_json::Value;
use thiserror::Error;

/// Failure while checking a processing job's status. Logged at the call
/// site and propagated; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("status request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Parsed status payload. The schema belongs to the backend; callers
/// read the fields they understand and ignore the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct JobStatus(pub Value);

impl JobStatus {
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }
}

/// Single-shot status check for an asynchronous processing job. Each
/// call is an independent request with no shared mutable state, so
/// callers may overlap or sequence calls at will.
#[derive(Clone)]
pub struct StatusPoller {
    client: reqwest::Client,
    base_url: String,
}

impl StatusPoller {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// One GET against the status endpoint. The body is parsed as JSON
    /// whatever the HTTP status code; only a network or parse failure is
    /// an error, and it is re-raised after logging rather than mapped to
    /// a default value. No retry, no backoff, no timeout.
    pub async fn fetch_status(&self, job_id: &str) -> Result<JobStatus, StatusError> {
        let url = format!("{}/status/{}", self.base_url, job_id);
        let result = self.request(&url).await;
        if let Err(e) = &result {
            tracing::error!(job_id, error = %e, "status check failed");
        }
        result
    }

    async fn request(&self, url: &str) -> Result<JobStatus, StatusError> {
        let response = self.client.get(url).send().await?;
        let body = response.json::<Value>().await?;
        Ok(JobStatus(body))
    }
}
