//! Per-host analysis: fingerprint services, then look each one up.

use crate::fingerprint::ServiceFingerprinter;
use crate::runner::ToolRunner;
use futures_util::stream::{self, Stream, StreamExt};
use std::sync::Arc;
use tracing::{debug, warn};
use vulnscout_core::{HostAddress, HostAnalysis, ServiceFinding, ServiceRecord, VulnerabilitySource};

/// Stage events raised by [`Analyzer::analyze`] as they happen.
///
/// Lookup events are only raised for hosts whose scan succeeded, in the
/// same order as the resulting findings.
pub trait AnalysisObserver: Send + Sync {
    /// Fingerprinting of `host` is about to start
    fn host_started(&self, _host: &HostAddress) {}

    /// A lookup for `service` is about to start
    fn lookup_started(&self, _host: &HostAddress, _service: &ServiceRecord) {}

    /// A lookup finished
    fn lookup_finished(&self, _host: &HostAddress, _finding: &ServiceFinding) {}
}

/// Combines service fingerprinting with vulnerability lookups
pub struct Analyzer<R, V> {
    fingerprinter: ServiceFingerprinter<R>,
    source: V,
    observer: Option<Arc<dyn AnalysisObserver>>,
}

impl<R: ToolRunner, V: VulnerabilitySource> Analyzer<R, V> {
    /// Create an analyzer from its two collaborators
    pub const fn new(fingerprinter: ServiceFingerprinter<R>, source: V) -> Self {
        Self {
            fingerprinter,
            source,
            observer: None,
        }
    }

    /// Report stage events to `observer`
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn AnalysisObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Analyse one host.
    ///
    /// Makes exactly one lookup per fingerprinted service, in scanner order.
    /// A failed scan is recorded in `scan_error` and produces no findings.
    pub async fn analyze(&self, host: HostAddress) -> HostAnalysis {
        if let Some(observer) = &self.observer {
            observer.host_started(&host);
        }
        let mut analysis = HostAnalysis::new(host);

        let services = match self.fingerprinter.fingerprint(&analysis.host).await {
            Ok(services) => services,
            Err(e) => {
                warn!(host = %analysis.host, kind = %e.kind(), error = %e, "skipping host");
                analysis.scan_error = Some(e.to_string());
                return analysis;
            }
        };

        for service in services {
            debug!(host = %analysis.host, service = %service, "looking up vulnerabilities");
            if let Some(observer) = &self.observer {
                observer.lookup_started(&analysis.host, &service);
            }
            let outcome = self.source.lookup(&service.name, &service.version).await;
            let finding = ServiceFinding { service, outcome };
            if let Some(observer) = &self.observer {
                observer.lookup_finished(&analysis.host, &finding);
            }
            analysis.findings.push(finding);
        }

        analysis
    }

    /// Analyse hosts with at most `jobs` in flight.
    ///
    /// Items come out in the order of `hosts`, whatever order the scans
    /// finish in. `jobs` of 0 is treated as 1.
    pub fn analyses(
        &self,
        hosts: Vec<HostAddress>,
        jobs: usize,
    ) -> impl Stream<Item = HostAnalysis> + '_ {
        stream::iter(hosts)
            .map(move |host| self.analyze(host))
            .buffered(jobs.max(1))
    }

    /// Collect [`analyses`](Self::analyses) into a vector
    pub async fn analyze_all(&self, hosts: Vec<HostAddress>, jobs: usize) -> Vec<HostAnalysis> {
        self.analyses(hosts, jobs).collect().await
    }
}
