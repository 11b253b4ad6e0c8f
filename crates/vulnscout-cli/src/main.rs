//! vulnscout - network triage from the command line
//!
//! Sweeps a network range, fingerprints every live host and reports the
//! known CVEs for each detected service version.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    vulnscout_cli::run().await
}
