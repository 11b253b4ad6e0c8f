//! # vulnscout-cli
//!
//! Command-line front end for the vulnscout pipeline.
//!
//! ## Features
//!
//! - **Host discovery**: ping sweep of a range given as an argument or at a prompt
//! - **Service fingerprinting**: version scan of every live host
//! - **CVE lookup**: up to five known vulnerabilities per service version
//! - **Configuration**: persistent defaults in `config.toml`

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
