use std::fmt;

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;

use super::types::MenuItem;

/// Errors that can occur at the fetch boundary.
/// Every variant resolves to a renderable state; none is fatal.
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, timeout). Retryable.
    Transport(String),
    /// The backend answered with a non-success status. Retryable.
    Status { status: u16, message: String },
    /// The body was not valid JSON. Not retryable until the backend changes.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { status, message } => {
                write!(f, "backend error (HTTP {status}): {message}")
            }
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The data-fetching seam.
///
/// The event loop only ever talks to this trait, so tests can substitute a
/// canned source and the backend transport stays swappable.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches the navigation menu (called once at startup, retryable).
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, ApiError>;

    /// Fetches the payload backing a view, by resource key.
    async fn fetch_resource(&self, key: &str) -> Result<Value, ApiError>;
}

/// `DataSource` over HTTP against the backend base address.
pub struct HttpDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json(&self, url: String) -> Result<Value, ApiError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("GET {url} failed with HTTP {status}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        let payload = self
            .get_json(format!("{}/api/getMenu", self.base_url))
            .await?;
        serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn fetch_resource(&self, key: &str) -> Result<Value, ApiError> {
        self.get_json(format!("{}/api/rules/{key}", self.base_url))
            .await
    }
}
