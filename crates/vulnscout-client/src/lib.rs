//! HTTP client for the CIRCL CVE search API.
//!
//! This crate provides [`CveClient`], which answers "which known
//! vulnerabilities match this service and version?" and implements
//! [`VulnerabilitySource`] for the analysis pipeline.

#![doc(html_root_url = "https://docs.rs/vulnscout-client/0.1.0")]

mod client;
pub mod api;

pub use client::{CveClient, CveClientBuilder, DEFAULT_BASE_URL};
pub use vulnscout_core::{Result, VulnScoutError, VulnerabilitySource};
