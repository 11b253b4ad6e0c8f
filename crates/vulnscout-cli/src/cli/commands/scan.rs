//! `vulnscout [RANGE]` - sweep a range, fingerprint live hosts, report CVEs.

use anyhow::{Context as _, Result};
use colored::Colorize;
use dialoguer::Input;
use futures_util::StreamExt;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;
use tracing::info;
use vulnscout::recon::{Analyzer, HostDiscovery, Nmap, ServiceFingerprinter};

use super::Context;
use crate::cli::args::ScanArgs;
use crate::config::Settings;
use crate::output::{self, LiveReport, Totals};

pub async fn execute(ctx: Context, args: ScanArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let settings = Settings::resolve(&args, &config);
    let client = settings.client()?;

    if ctx.verbose > 0 {
        eprintln!(
            "{}",
            format!(
                "api: {}  nmap: {}  ports: {:?}  jobs: {}",
                settings.api_url, settings.nmap, settings.ports, settings.jobs
            )
            .dimmed()
        );
    }

    let range = match args.range {
        Some(range) => range,
        None => prompt_range()?,
    };
    let range = range.trim().to_string();
    if range.is_empty() {
        anyhow::bail!("No network range given");
    }

    let nmap = Nmap::with_binary(&settings.nmap);
    let mut stdout = io::stdout();

    output::print_sweep_start(&mut stdout, &range)?;
    let hosts = match HostDiscovery::new(&nmap).discover(&range).await {
        Ok(hosts) => hosts,
        Err(e) => {
            output::print_discovery_failure(&mut stdout, &e.to_string())?;
            Vec::new()
        }
    };
    output::print_discovery(&mut stdout, &hosts)?;

    let fingerprinter = ServiceFingerprinter::new(&nmap).ports(settings.ports.clone());
    let analyzer = Analyzer::new(fingerprinter, client);

    let mut totals = Totals::default();
    if settings.jobs == 1 {
        // One host at a time: stream each section as its stages run
        let live = Arc::new(LiveReport::new(io::stdout(), settings.summary_width));
        let analyzer = analyzer.observer(live.clone());
        for host in hosts {
            let analysis = analyzer.analyze(host).await;
            live.finish(&analysis)?;
            totals.add(&analysis);
        }
    } else {
        let mut analyses = std::pin::pin!(analyzer.analyses(hosts, settings.jobs));
        while let Some(analysis) = analyses.next().await {
            output::print_host(&mut stdout, &analysis, settings.summary_width)?;
            stdout.flush()?;
            totals.add(&analysis);
        }
    }

    output::print_totals(&mut stdout, &totals)?;
    info!(
        hosts = totals.hosts,
        vulnerabilities = totals.vulnerabilities,
        "scan complete"
    );

    Ok(())
}

/// Ask for the range interactively, or take the first line of piped input.
fn prompt_range() -> Result<String> {
    if io::stdin().is_terminal() {
        return Input::<String>::new()
            .with_prompt("Network range to scan (e.g. 192.168.0.0/24)")
            .interact_text()
            .context("Failed to read network range");
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read network range from stdin")?;
    Ok(line)
}
