//! reqwest-backed resource fetcher.

use crate::api::fetcher::ResourceFetcher;
use crate::domain::error::{ExplorerError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use std::collections::BTreeMap;

/// HTTP fetcher bound to one base URL and one set of auth headers.
///
/// Built fresh whenever credentials change, so headers are fixed for the
/// fetcher's lifetime.
///
/// # Example
///
/// ```rust,no_run
/// use reactor_explorer::api::{HttpFetcher, ResourceFetcher};
/// use reactor_explorer::domain::Credentials;
///
/// # async fn example() -> reactor_explorer::Result<()> {
/// let creds = Credentials::from_form("token", "org", "client", "secret");
/// let fetcher = HttpFetcher::new("https://reactor.adobe.io", &creds.auth_headers())?;
/// let companies = fetcher.get("/companies").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    base_url: String,
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher that sends `headers` on every request.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Validation`] if a header name or value cannot be
    /// sent (control characters in a pasted token, for instance) and
    /// [`ExplorerError::Http`] if the client cannot be built.
    pub fn new(base_url: &str, headers: &BTreeMap<&'static str, String>) -> Result<Self> {
        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ExplorerError::Validation(format!("invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ExplorerError::Validation(format!("invalid value for header {name}: {e}")))?;
            header_map.insert(name, value);
        }

        let client = Client::builder().default_headers(header_map).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "request failed");
            ExplorerError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = %url, status = status.as_u16(), "non-success response");
            return Err(ExplorerError::Transport {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        let value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(url = %url, error = %e, "response body is not JSON");
            ExplorerError::Decode(format!("{url}: {e}"))
        })?;

        tracing::debug!(url = %url, bytes = body.len(), "fetched");
        Ok(value)
    }
}
