//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Create context for commands
    let ctx = commands::Context {
        config_path: cli.config,
        verbose: cli.verbose,
    };

    // Dispatch to appropriate command
    match cli.command {
        Some(Commands::Config(args)) => commands::config::execute(ctx, args).await,
        None => commands::scan::execute(ctx, cli.scan).await,
    }
}

/// Diagnostics go to stderr so they never interleave with the report.
///
/// `RUST_LOG` wins when set. Otherwise only errors are logged, since the
/// report already shows warnings; each `-v` adds a level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
