//! Command-line argument definitions using clap.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Discover hosts on a network, fingerprint their services and report
/// known CVEs for each service version.
///
/// Requires nmap. Only scan networks you are authorised to audit.
#[derive(Parser, Debug)]
#[command(name = "vulnscout")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of the default location
    #[arg(long, env = "VULNSCOUT_CONFIG", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Scan (default action)
// ============================================================================

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Network range to sweep, e.g. 192.168.0.0/24 (prompted for when omitted)
    pub range: Option<String>,

    /// Version-scan the N most common ports
    #[arg(long, value_name = "N", conflicts_with_all = ["ports", "default_ports"])]
    pub top_ports: Option<u16>,

    /// Version-scan only these ports (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "PORTS", conflicts_with = "default_ports")]
    pub ports: Vec<u16>,

    /// Let nmap pick the ports to version-scan
    #[arg(long)]
    pub default_ports: bool,

    /// Base URL of the CVE search service
    #[arg(long, env = "VULNSCOUT_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to the nmap binary
    #[arg(long, env = "VULNSCOUT_NMAP", value_name = "PATH")]
    pub nmap: Option<String>,

    /// Hosts analysed at the same time (output order is unaffected)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Cut vulnerability summaries to this many characters
    #[arg(long, value_name = "N")]
    pub summary_width: Option<usize>,

    /// HTTP timeout for CVE lookups, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key (api_url, nmap_path, top_ports, summary_width, jobs, timeout_secs)
        key: String,
        /// Value
        value: String,
    },

    /// Print the config file path
    Path,
}
