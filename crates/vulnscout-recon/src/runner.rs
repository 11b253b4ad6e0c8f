//! Invocation of the external scanner.
//!
//! Everything downstream only sees the text the scanner printed, so any
//! [`ToolRunner`] that produces nmap-style normal output can stand in for
//! the real binary.

use crate::error::{ReconError, ReconResult};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

/// Runs the scanner with a set of arguments and returns its standard output
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Run to completion; a non-zero exit is an error
    async fn run(&self, args: &[String]) -> ReconResult<String>;
}

#[async_trait]
impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn run(&self, args: &[String]) -> ReconResult<String> {
        (**self).run(args).await
    }
}

/// The nmap binary
#[derive(Debug, Clone)]
pub struct Nmap {
    binary: String,
}

impl Default for Nmap {
    fn default() -> Self {
        Self::new()
    }
}

impl Nmap {
    /// Use `nmap` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self::with_binary("nmap")
    }

    /// Use a specific binary
    #[must_use]
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl ToolRunner for Nmap {
    fn name(&self) -> &str {
        &self.binary
    }

    async fn run(&self, args: &[String]) -> ReconResult<String> {
        debug!(binary = %self.binary, ?args, "running scanner");

        let output = Command::new(&self.binary)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ReconError::ToolUnavailable {
                tool: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ReconError::ToolFailed {
                tool: self.binary.clone(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Reject targets the scanner would read as options
pub(crate) fn check_target(target: &str) -> ReconResult<()> {
    let trimmed = target.trim();
    if trimmed.is_empty() || trimmed.starts_with('-') {
        return Err(ReconError::InvalidTarget(target.to_string()));
    }
    Ok(())
}
