use super::{HostAddress, LookupOutcome, ServiceRecord, Vulnerability};
use std::collections::HashMap;

/// One fingerprinted service together with its vulnerability lookup
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceFinding {
    /// Service as reported by the scanner
    pub service: ServiceRecord,

    /// Result of the vulnerability lookup for this service
    pub outcome: LookupOutcome,
}

/// Everything learned about one host
#[derive(Debug, Clone, PartialEq)]
pub struct HostAnalysis {
    /// Host that was analysed
    pub host: HostAddress,

    /// Set when fingerprinting failed; `findings` is then empty
    pub scan_error: Option<String>,

    /// Findings in the order the scanner reported the services
    pub findings: Vec<ServiceFinding>,
}

impl HostAnalysis {
    /// Create an empty analysis for a host
    #[must_use]
    pub const fn new(host: HostAddress) -> Self {
        Self {
            host,
            scan_error: None,
            findings: Vec::new(),
        }
    }

    /// Returns true if no services were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Total vulnerability records across all services
    #[must_use]
    pub fn vulnerability_count(&self) -> usize {
        self.findings.iter().map(|f| f.outcome.records().len()).sum()
    }

    /// Number of lookups that failed
    #[must_use]
    pub fn failed_lookups(&self) -> usize {
        self.findings.iter().filter(|f| f.outcome.is_failed()).count()
    }

    /// Map from `name (version)` label to the records found for it.
    ///
    /// Two services sharing a name and version collapse into one entry; the
    /// one reported last wins. `findings` keeps both.
    #[must_use]
    pub fn vulnerability_map(&self) -> HashMap<String, Vec<Vulnerability>> {
        self.findings
            .iter()
            .map(|f| (f.service.label(), f.outcome.records().to_vec()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(port: u16, ids: &[&str]) -> ServiceFinding {
        ServiceFinding {
            service: ServiceRecord::new(port, "http", "nginx 1.18.0"),
            outcome: LookupOutcome::Found(ids.iter().map(|id| Vulnerability::new(*id, "")).collect()),
        }
    }

    #[test]
    fn duplicate_labels_keep_last_in_map() {
        let mut analysis = HostAnalysis::new("10.0.0.2".into());
        analysis.findings.push(finding(80, &["CVE-A"]));
        analysis.findings.push(finding(8080, &["CVE-B", "CVE-C"]));

        let map = analysis.vulnerability_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map["http (nginx 1.18.0)"].len(), 2);
        assert_eq!(analysis.findings.len(), 2);
        assert_eq!(analysis.vulnerability_count(), 3);
    }

    #[test]
    fn counts_failed_lookups() {
        let mut analysis = HostAnalysis::new("10.0.0.3".into());
        analysis.findings.push(ServiceFinding {
            service: ServiceRecord::new(22, "ssh", "OpenSSH 7.4"),
            outcome: LookupOutcome::Failed {
                reason: "HTTP 500".into(),
            },
        });
        assert_eq!(analysis.failed_lookups(), 1);
        assert_eq!(analysis.vulnerability_count(), 0);
        assert!(analysis.vulnerability_map()["ssh (OpenSSH 7.4)"].is_empty());
    }
}
