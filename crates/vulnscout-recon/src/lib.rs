//! Nmap-driven reconnaissance for vulnscout.
//!
//! This crate runs the external scanner, parses its output and ties the
//! results to a [`vulnscout_core::VulnerabilitySource`]:
//!
//! - [`discovery::HostDiscovery`] - ping sweep of a network range
//! - [`fingerprint::ServiceFingerprinter`] - version scan of one host
//! - [`analysis::Analyzer`] - fingerprint plus one lookup per service
//!
//! The scanner sits behind [`runner::ToolRunner`], and the parsers in
//! [`parser`] are plain functions over the scanner's text.

#![doc(html_root_url = "https://docs.rs/vulnscout-recon/0.1.0")]

mod error;

pub mod analysis;
pub mod discovery;
pub mod fingerprint;
pub mod parser;
pub mod runner;

#[cfg(test)]
mod testing;

pub use analysis::{AnalysisObserver, Analyzer};
pub use discovery::HostDiscovery;
pub use error::{ReconError, ReconResult};
pub use fingerprint::{PortSpec, ServiceFingerprinter};
pub use runner::{Nmap, ToolRunner};
