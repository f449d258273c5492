//! HTTP client for the directory REST API.

use crate::models::CoopRecord;
use crate::search::CoopSource;
use crate::{Error, Result};

/// reqwest-backed [`CoopSource`] for the `/coops/` endpoint.
#[derive(Debug, Clone)]
pub struct CoopApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl CoopApiClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the normalized base URL search URLs are built against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CoopSource for CoopApiClient {
    async fn fetch_coops(&self, url: &str) -> Result<Vec<CoopRecord>> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: error_excerpt(&body),
            });
        }

        parse_records(&body)
    }
}

/// Parse a `/coops/` response body.
///
/// Kept separate from the request so parsing can be exercised without a server.
pub fn parse_records(payload: &str) -> Result<Vec<CoopRecord>> {
    Ok(serde_json::from_str(payload)?)
}

/// Trim and validate an API base URL, dropping any trailing `/`.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Config("API base URL must not be empty".to_string()));
    }
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(Error::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

/// First 180 characters of an error response body, for logs.
fn error_excerpt(body: &str) -> String {
    body.trim().chars().take(180).collect()
}
