//! `vulnscout config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::{DEFAULT_SUMMARY_WIDTH, DEFAULT_TOP_PORTS};
use vulnscout::DEFAULT_BASE_URL;

pub async fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&ctx, &key, &value),
        ConfigCommands::Path => show_path(&ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;

    println!("{}", "Current Configuration:".bold());
    println!();

    let default = |value: String| format!("{} {}", value, "(default)".dimmed());

    println!(
        "  {} {}",
        "api_url:".bold(),
        config
            .api_url
            .clone()
            .unwrap_or_else(|| default(DEFAULT_BASE_URL.to_string()))
    );
    println!(
        "  {} {}",
        "nmap_path:".bold(),
        config
            .nmap_path
            .clone()
            .unwrap_or_else(|| default("nmap".to_string()))
    );
    println!(
        "  {} {}",
        "top_ports:".bold(),
        config
            .top_ports
            .map_or_else(|| default(DEFAULT_TOP_PORTS.to_string()), |n| n.to_string())
    );
    println!(
        "  {} {}",
        "summary_width:".bold(),
        config
            .summary_width
            .map_or_else(|| default(DEFAULT_SUMMARY_WIDTH.to_string()), |n| n.to_string())
    );
    println!(
        "  {} {}",
        "jobs:".bold(),
        config
            .jobs
            .map_or_else(|| default("1".to_string()), |n| n.to_string())
    );
    println!(
        "  {} {}",
        "timeout_secs:".bold(),
        config
            .timeout_secs
            .map_or_else(|| "(not set)".dimmed().to_string(), |n| n.to_string())
    );

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let path = ctx.config_file()?;
    let mut config = ctx.load_config()?;

    config.set(key, value)?;
    config.save_to(&path)?;

    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.config_file()?.display());
    Ok(())
}
