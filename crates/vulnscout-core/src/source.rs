//! Seam between the aggregator and whatever answers vulnerability queries.

use crate::types::LookupOutcome;
use async_trait::async_trait;

/// Something that can look up known vulnerabilities for a service version.
///
/// Implementations never fail outright: every error is folded into
/// [`LookupOutcome::Failed`] so one bad lookup cannot stop a run.
#[async_trait]
pub trait VulnerabilitySource: Send + Sync {
    /// Look up vulnerabilities for `service` at `version`
    async fn lookup(&self, service: &str, version: &str) -> LookupOutcome;
}

#[async_trait]
impl<T: VulnerabilitySource + ?Sized> VulnerabilitySource for &T {
    async fn lookup(&self, service: &str, version: &str) -> LookupOutcome {
        (**self).lookup(service, version).await
    }
}
