//! Console report.
//!
//! Everything here writes to a caller-supplied writer so the report can be
//! captured; nothing printed depends on timing, which keeps reruns against
//! the same network byte-for-byte comparable.

use colored::Colorize;
use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;
use vulnscout::recon::AnalysisObserver;
use vulnscout::{HostAddress, HostAnalysis, LookupOutcome, ServiceFinding, ServiceRecord};

const RULE_WIDTH: usize = 40;

/// Running totals for the closing summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub hosts: usize,
    pub services: usize,
    pub vulnerabilities: usize,
    pub failed_lookups: usize,
    pub failed_scans: usize,
}

impl Totals {
    /// Fold one host into the totals.
    pub fn add(&mut self, analysis: &HostAnalysis) {
        self.hosts += 1;
        self.services += analysis.findings.len();
        self.vulnerabilities += analysis.vulnerability_count();
        self.failed_lookups += analysis.failed_lookups();
        if analysis.scan_error.is_some() {
            self.failed_scans += 1;
        }
    }
}

/// Announce the sweep.
pub fn print_sweep_start(out: &mut impl Write, range: &str) -> io::Result<()> {
    writeln!(out, "{} {}...", "Discovering live hosts in".bold(), range.cyan())
}

/// List the hosts found by the sweep.
pub fn print_discovery(out: &mut impl Write, hosts: &[HostAddress]) -> io::Result<()> {
    let list: Vec<&str> = hosts.iter().map(HostAddress::as_str).collect();
    writeln!(
        out,
        "{} {} host(s) up: [{}]",
        "✓".green(),
        hosts.len(),
        list.join(", ")
    )
}

/// Report a sweep that could not run.
pub fn print_discovery_failure(out: &mut impl Write, error: &str) -> io::Result<()> {
    writeln!(out, "{} {} {}", "✗".red(), "Host discovery failed:".red().bold(), error)
}

/// Report everything learned about one host.
pub fn print_host(out: &mut impl Write, analysis: &HostAnalysis, summary_width: usize) -> io::Result<()> {
    print_host_header(out, &analysis.host)?;
    for finding in &analysis.findings {
        print_service_header(out, &finding.service)?;
        print_outcome(out, &finding.outcome, summary_width)?;
    }
    print_host_tail(out, analysis)
}

fn print_host_header(out: &mut impl Write, host: &HostAddress) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {}", "Analyzing".bold(), host.as_str().cyan().bold())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn print_service_header(out: &mut impl Write, service: &ServiceRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "  {} → {} {}",
        service.port_label().bold(),
        service.name,
        service.version
    )
}

fn print_outcome(out: &mut impl Write, outcome: &LookupOutcome, summary_width: usize) -> io::Result<()> {
    match outcome {
        LookupOutcome::Failed { reason } => {
            writeln!(out, "    {} {}", "⚠ CVE lookup failed:".yellow(), reason)?;
        }
        LookupOutcome::Found(records) if records.is_empty() => {
            writeln!(out, "    {}", "No CVEs found.".green())?;
        }
        LookupOutcome::Found(records) => {
            for vuln in records {
                writeln!(
                    out,
                    "    {} {}: {}",
                    "-".red(),
                    vuln.id.red().bold(),
                    truncate(&vuln.summary, summary_width)
                )?;
            }
        }
    }
    Ok(())
}

/// Lines that can only be written once the host is done
fn print_host_tail(out: &mut impl Write, analysis: &HostAnalysis) -> io::Result<()> {
    if let Some(error) = &analysis.scan_error {
        writeln!(out, "{} {}", "✗ Service scan failed:".red(), error)?;
    } else if analysis.findings.is_empty() {
        writeln!(out, "{}", "⚠ No services found.".yellow())?;
    }
    Ok(())
}

/// Writes a host's report while it is being analysed.
///
/// Attached to an [`vulnscout::recon::Analyzer`] that handles one host at a
/// time, the bytes written equal [`print_host`] for each host once
/// [`finish`](Self::finish) has run.
pub struct LiveReport<W> {
    out: Mutex<W>,
    summary_width: usize,
}

impl<W: Write + Send> LiveReport<W> {
    pub const fn new(out: W, summary_width: usize) -> Self {
        Self {
            out: Mutex::new(out),
            summary_width,
        }
    }

    /// Close the section of a host whose analysis has returned.
    pub fn finish(&self, analysis: &HostAnalysis) -> io::Result<()> {
        let mut out = self.lock();
        print_host_tail(&mut *out, analysis)?;
        out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, write: impl FnOnce(&mut W) -> io::Result<()>) {
        let mut out = self.lock();
        if let Err(e) = write(&mut *out).and_then(|()| out.flush()) {
            warn!(error = %e, "failed to write report");
        }
    }
}

impl<W: Write + Send> AnalysisObserver for LiveReport<W> {
    fn host_started(&self, host: &HostAddress) {
        self.emit(|out| print_host_header(out, host));
    }

    fn lookup_started(&self, _host: &HostAddress, service: &ServiceRecord) {
        self.emit(|out| print_service_header(out, service));
    }

    fn lookup_finished(&self, _host: &HostAddress, finding: &ServiceFinding) {
        self.emit(|out| print_outcome(out, &finding.outcome, self.summary_width));
    }
}

/// Closing summary line.
pub fn print_totals(out: &mut impl Write, totals: &Totals) -> io::Result<()> {
    writeln!(out)?;
    let mut line = format!(
        "Done: {} host(s), {} service(s), {} CVE(s)",
        totals.hosts, totals.services, totals.vulnerabilities
    );
    if totals.failed_lookups > 0 {
        line.push_str(&format!(", {} failed lookup(s)", totals.failed_lookups));
    }
    if totals.failed_scans > 0 {
        line.push_str(&format!(", {} failed scan(s)", totals.failed_scans));
    }
    writeln!(out, "{}", line.dimmed())
}

/// Cut `text` to `width` characters, marking the cut with `...`.
pub fn truncate(text: &str, width: usize) -> Cow<'_, str> {
    match text.char_indices().nth(width) {
        Some((end, _)) => Cow::Owned(format!("{}...", text[..end].trim_end())),
        None => Cow::Borrowed(text),
    }
}
