use std::env;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";

/// Where the upload and status endpoints live.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads `UPLOADER_BASE_URL`, falling back to the local development
    /// server.
    pub fn from_env() -> Self {
        let base_url =
            env::var("UPLOADER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
