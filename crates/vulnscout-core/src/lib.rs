//! Core types and traits for the vulnscout pipeline.
//!
//! This crate provides the foundational types shared by every stage:
//!
//! - **Types**: hosts, service records, vulnerability records and the
//!   per-host analysis produced by the aggregator
//! - **Errors**: the failure taxonomy with [`VulnScoutError`] and [`ErrorKind`]
//! - **Sources**: the [`VulnerabilitySource`] seam between the aggregator and
//!   the remote CVE search service
//!
//! # Example
//!
//! ```rust,ignore
//! use vulnscout_core::{HostAnalysis, Result};
//!
//! fn summarize(analysis: &HostAnalysis) -> Result<()> {
//!     println!("Host: {}", analysis.host);
//!     println!("Services: {}", analysis.findings.len());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/vulnscout-core/0.1.0")]

mod error;
mod source;
pub mod types;

pub use error::{ErrorKind, Result, VulnScoutError};
pub use source::VulnerabilitySource;
pub use types::*;
