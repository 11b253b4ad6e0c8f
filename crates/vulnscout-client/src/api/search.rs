//! Search API endpoints.

use crate::CveClient;
use vulnscout_core::{search_query, Result, SearchResponse, Vulnerability};

/// Search API endpoints
pub struct SearchApi<'a> {
    client: &'a CveClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) const fn new(client: &'a CveClient) -> Self {
        Self { client }
    }

    /// Free-text search, keeping the first [`vulnscout_core::MAX_RESULTS`]
    /// records in the service's order
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let vulns = client.search().query("apache 2.4.49").await?;
    /// for v in &vulns {
    ///     println!("{}: {}", v.id, v.summary);
    /// }
    /// ```
    pub async fn query(&self, query: &str) -> Result<Vec<Vulnerability>> {
        let response: SearchResponse = self.client.get(&["api", "search", query]).await?;
        Ok(response.into_top())
    }

    /// Search for a detected service, using the lower-cased
    /// `service version` query
    pub async fn service(&self, service: &str, version: &str) -> Result<Vec<Vulnerability>> {
        self.query(&search_query(service, version)).await
    }
}
