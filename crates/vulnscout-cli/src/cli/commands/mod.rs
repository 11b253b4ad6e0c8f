//! Command implementations.

pub mod config;
pub mod scan;

use std::path::PathBuf;

use crate::config::Config;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Config file given with `--config`, if any
    pub config_path: Option<PathBuf>,

    /// Verbosity level
    pub verbose: u8,
}

impl Context {
    /// The config file this run reads and writes.
    pub fn config_file(&self) -> anyhow::Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Config::path(),
        }
    }

    /// Load the config file, falling back to defaults when there is none.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}
