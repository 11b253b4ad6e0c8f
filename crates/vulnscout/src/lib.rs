//! Discover hosts on a network, fingerprint their services and report the
//! known CVEs for each detected service version.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vulnscout::recon::{Analyzer, HostDiscovery, Nmap, ServiceFingerprinter};
//! use vulnscout::CveClient;
//!
//! #[tokio::main]
//! async fn main() -> vulnscout::Result<()> {
//!     let client = CveClient::new()?;
//!     let hosts = HostDiscovery::new(Nmap::new())
//!         .discover_hosts("192.168.0.0/24")
//!         .await;
//!
//!     let analyzer = Analyzer::new(ServiceFingerprinter::new(Nmap::new()), client);
//!     for analysis in analyzer.analyze_all(hosts, 1).await {
//!         for (label, vulns) in analysis.vulnerability_map() {
//!             println!("{}: {label} -> {} CVEs", analysis.host, vulns.len());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - `rustls` and `recon`
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS
//! - `recon` - Scanner-driven discovery, fingerprinting and analysis

#![doc(html_root_url = "https://docs.rs/vulnscout/0.1.0")]

// Re-export core types
pub use vulnscout_core::*;

// Re-export client
pub use vulnscout_client::{CveClient, CveClientBuilder, DEFAULT_BASE_URL};

// Re-export recon if enabled
#[cfg(feature = "recon")]
pub use vulnscout_recon as recon;

// Re-export runtime for convenience
pub use tokio;
