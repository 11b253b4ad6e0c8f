//! Version-detection scans of a single host.

use crate::error::ReconResult;
use crate::parser::parse_services;
use crate::runner::{check_target, ToolRunner};
use tracing::{info, warn};
use vulnscout_core::{HostAddress, ServiceRecord};

/// Which ports a version scan probes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSpec {
    /// The N most common ports
    Top(u16),
    /// Specific list of ports
    List(Vec<u16>),
    /// Whatever the scanner scans when not told
    ScannerDefault,
}

impl Default for PortSpec {
    fn default() -> Self {
        Self::Top(100)
    }
}

impl PortSpec {
    /// Scanner arguments selecting these ports
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        match self {
            Self::Top(n) => vec!["--top-ports".to_string(), n.to_string()],
            Self::List(ports) => {
                let list: Vec<String> = ports.iter().map(u16::to_string).collect();
                vec!["-p".to_string(), list.join(",")]
            }
            Self::ScannerDefault => Vec::new(),
        }
    }
}

/// Detects services and versions on a host
pub struct ServiceFingerprinter<R> {
    runner: R,
    ports: PortSpec,
}

impl<R: ToolRunner> ServiceFingerprinter<R> {
    /// Create a fingerprinter probing the default port set
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            ports: PortSpec::default(),
        }
    }

    /// Set the ports to probe
    #[must_use]
    pub fn ports(mut self, ports: PortSpec) -> Self {
        self.ports = ports;
        self
    }

    /// Scanner arguments for a version scan of `target`
    #[must_use]
    pub fn args_for(&self, target: &str) -> Vec<String> {
        let mut args = vec!["-sV".to_string()];
        args.extend(self.ports.to_args());
        args.push(target.to_string());
        args
    }

    /// Scan `host` and return its open services in output order
    pub async fn fingerprint(&self, host: &HostAddress) -> ReconResult<Vec<ServiceRecord>> {
        let target = host.scan_target();
        check_target(target)?;
        let output = self.runner.run(&self.args_for(target)).await?;
        let services = parse_services(&output);
        info!(host = %host, count = services.len(), "service fingerprinting complete");
        Ok(services)
    }

    /// Like [`fingerprint`](Self::fingerprint), but a failed scan yields no services
    pub async fn fingerprint_services(&self, host: &HostAddress) -> Vec<ServiceRecord> {
        match self.fingerprint(host).await {
            Ok(services) => services,
            Err(e) => {
                warn!(host = %host, tool = self.runner.name(), error = %e, "service fingerprinting failed");
                Vec::new()
            }
        }
    }
}
