use serde::{Deserialize, Serialize};

/// A responding host as reported by the scanner.
///
/// Holds the text that followed the scanner's report marker verbatim. That is
/// usually a bare IP, but when reverse DNS succeeds it has the form
/// `name (ip)`; [`HostAddress::scan_target`] picks the part that can be
/// handed back to the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostAddress(String);

impl HostAddress {
    /// Wrap a reported address
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The address exactly as reported
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The address to scan: the parenthesised IP of a `name (ip)` report,
    /// otherwise the reported text
    #[must_use]
    pub fn scan_target(&self) -> &str {
        self.0
            .strip_suffix(')')
            .and_then(|rest| rest.rsplit_once(" ("))
            .map_or(self.0.as_str(), |(_, ip)| ip)
    }
}

impl std::fmt::Display for HostAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for HostAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for HostAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for HostAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_ip_is_its_own_target() {
        let host = HostAddress::from("192.168.0.5");
        assert_eq!(host.as_str(), "192.168.0.5");
        assert_eq!(host.scan_target(), "192.168.0.5");
    }

    #[test]
    fn named_host_targets_parenthesised_ip() {
        let host = HostAddress::from("router.lan (192.168.0.1)");
        assert_eq!(host.as_str(), "router.lan (192.168.0.1)");
        assert_eq!(host.scan_target(), "192.168.0.1");
        assert_eq!(host.to_string(), "router.lan (192.168.0.1)");
    }

    #[test]
    fn serializes_as_plain_string() {
        let host = HostAddress::from("10.0.0.1");
        assert_eq!(serde_json::to_string(&host).unwrap(), "\"10.0.0.1\"");
    }
}
