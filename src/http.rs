use reqwest::header::{HeaderMap, ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("network error: {0}")]
    Io(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Io(e.to_string()))?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json(&self, path: &str) -> Result<Value, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HttpError::Io(e.to_string()))?;
        let status_code = response.status();
        info!("GET {} -> {}", path, status_code);
        if !status_code.is_success() {
            return Err(HttpError::Status(status_code.as_u16()));
        }
        let text = response
            .text()
            .await
            .map_err(|e| HttpError::Io(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| HttpError::Malformed(e.to_string()))
    }

    // Returns the response headers regardless of status code.
    pub async fn preflight(&self, path: &str, origin: &str) -> Result<HeaderMap, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("OPTIONS {}", url);
        let response = self
            .client
            .request(Method::OPTIONS, &url)
            .header(ORIGIN, origin)
            .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .send()
            .await
            .map_err(|e| HttpError::Io(e.to_string()))?;
        info!("OPTIONS {} -> {}", path, response.status());
        Ok(response.headers().clone())
    }
}
