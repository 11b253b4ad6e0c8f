//! Ping-sweep host discovery.

use crate::error::ReconResult;
use crate::parser::parse_hosts;
use crate::runner::{check_target, ToolRunner};
use tracing::{info, warn};
use vulnscout_core::HostAddress;

/// Finds responding hosts in a network range with a no-port ping sweep
pub struct HostDiscovery<R> {
    runner: R,
}

impl<R: ToolRunner> HostDiscovery<R> {
    /// Create a discovery stage on top of a scanner
    pub const fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Scanner arguments for a sweep of `range`
    #[must_use]
    pub fn args_for(range: &str) -> Vec<String> {
        vec!["-sn".to_string(), range.to_string()]
    }

    /// Sweep `range` (CIDR or anything else the scanner accepts)
    pub async fn discover(&self, range: &str) -> ReconResult<Vec<HostAddress>> {
        check_target(range)?;
        let output = self.runner.run(&Self::args_for(range)).await?;
        let hosts = parse_hosts(&output);
        info!(range, count = hosts.len(), "host discovery complete");
        Ok(hosts)
    }

    /// Like [`discover`](Self::discover), but a failed sweep yields no hosts
    pub async fn discover_hosts(&self, range: &str) -> Vec<HostAddress> {
        match self.discover(range).await {
            Ok(hosts) => hosts,
            Err(e) => {
                warn!(range, tool = self.runner.name(), error = %e, "host discovery failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeRunner;

    #[tokio::test]
    async fn sweeps_range_with_ping_only() {
        let runner = FakeRunner::ok("Nmap scan report for 10.0.0.1\nNmap scan report for 10.0.0.7\n");
        let discovery = HostDiscovery::new(&runner);

        let hosts = discovery.discover("10.0.0.0/29").await.unwrap();

        assert_eq!(hosts, vec![HostAddress::from("10.0.0.1"), HostAddress::from("10.0.0.7")]);
        assert_eq!(runner.calls(), vec![vec!["-sn".to_string(), "10.0.0.0/29".to_string()]]);
    }

    #[tokio::test]
    async fn scanner_failure_yields_no_hosts() {
        let runner = FakeRunner::failing(1);
        let discovery = HostDiscovery::new(&runner);

        assert!(discovery.discover("10.0.0.0/24").await.is_err());
        assert!(discovery.discover_hosts("10.0.0.0/24").await.is_empty());
    }

    #[tokio::test]
    async fn option_like_range_never_reaches_scanner() {
        let runner = FakeRunner::ok("");
        let discovery = HostDiscovery::new(&runner);

        assert!(discovery.discover_hosts("-iL/etc/passwd").await.is_empty());
        assert!(runner.calls().is_empty());
    }
}
