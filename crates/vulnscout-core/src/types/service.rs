/// An open TCP port with the service and version the scanner detected on it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceRecord {
    /// Port number
    pub port: u16,

    /// Service name token (e.g. `http`, `ssh`)
    pub name: String,

    /// Free-text version information (e.g. `Apache httpd 2.4.41`)
    pub version: String,
}

impl ServiceRecord {
    /// Create a new service record
    #[must_use]
    pub fn new(port: u16, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            port,
            name: name.into(),
            version: version.into(),
        }
    }

    /// Port with protocol, as the scanner prints it (`80/tcp`)
    #[must_use]
    pub fn port_label(&self) -> String {
        format!("{}/tcp", self.port)
    }

    /// Key used in analysis maps: `name (version)`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.version)
    }

    /// Free-text search query for this service
    #[must_use]
    pub fn search_query(&self) -> String {
        search_query(&self.name, &self.version)
    }
}

impl std::fmt::Display for ServiceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.port_label(), self.name, self.version)
    }
}

/// Build the lower-cased `service version` query sent to the search service
#[must_use]
pub fn search_query(service: &str, version: &str) -> String {
    format!("{service} {version}").to_lowercase()
}
