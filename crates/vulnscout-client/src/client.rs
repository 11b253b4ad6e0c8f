//! Main CVE search client implementation.

use crate::api::SearchApi;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use vulnscout_core::{LookupOutcome, Result, VulnScoutError, VulnerabilitySource};

/// The public CIRCL CVE search instance
pub const DEFAULT_BASE_URL: &str = "https://cve.circl.lu";

/// CVE search API client
#[derive(Clone)]
pub struct CveClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: Url,
}

impl CveClient {
    /// Create a client for the public instance using default settings
    pub fn new() -> Result<Self> {
        CveClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> CveClientBuilder {
        CveClientBuilder::new()
    }

    /// Access search endpoints
    #[must_use]
    pub const fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Base URL requests are made against
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Perform a GET request on the given path segments.
    ///
    /// Each segment is percent-encoded on its own, so free-text queries with
    /// spaces or slashes stay a single path segment.
    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| VulnScoutError::Http(e.to_string()))?;

        Self::handle_response(response).await
    }

    fn build_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| VulnScoutError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Only a 200 carries results; any other status is a failed lookup
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), body = %body, "search request rejected");
            return Err(VulnScoutError::RemoteService {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| VulnScoutError::Http(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| VulnScoutError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl VulnerabilitySource for CveClient {
    async fn lookup(&self, service: &str, version: &str) -> LookupOutcome {
        match self.search().service(service, version).await {
            Ok(records) => {
                debug!(service, version, count = records.len(), "vulnerability lookup complete");
                LookupOutcome::Found(records)
            }
            Err(e) => {
                warn!(service, version, kind = %e.kind(), error = %e, "vulnerability lookup failed");
                LookupOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Builder for configuring a [`CveClient`]
pub struct CveClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for CveClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CveClientBuilder {
    /// Create a new builder pointed at the public instance
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("vulnscout/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (self-hosted instances, tests)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout; without one the HTTP library default applies
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<CveClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| VulnScoutError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(VulnScoutError::InvalidUrl(self.base_url));
        }

        let mut http = HttpClient::builder().user_agent(&self.user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| VulnScoutError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(CveClient {
            inner: Arc::new(ClientInner { http, base_url }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_one_encoded_segment() {
        let client = CveClient::builder()
            .base_url("http://localhost:5000")
            .build()
            .unwrap();
        let url = client.build_url(&["api", "search", "ssh openssh 8.2/p1"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/search/ssh%20openssh%208.2%2Fp1"
        );
    }

    #[test]
    fn base_path_is_kept() {
        let client = CveClient::builder()
            .base_url("https://example.org/cve/")
            .build()
            .unwrap();
        let url = client.build_url(&["api", "search", "x"]).unwrap();
        assert_eq!(url.as_str(), "https://example.org/cve/api/search/x");
    }

    #[test]
    fn rejects_bad_base_url() {
        let err = CveClient::builder().base_url("not a url").build().err().unwrap();
        assert!(matches!(err, VulnScoutError::InvalidUrl(_)));

        let err = CveClient::builder().base_url("mailto:me@example.org").build().err().unwrap();
        assert!(matches!(err, VulnScoutError::InvalidUrl(_)));
    }
}
