use thiserror::Error;
use vulnscout_core::ErrorKind;

/// Result type alias for reconnaissance operations
pub type ReconResult<T> = std::result::Result<T, ReconError>;

/// Errors from driving the external scanner
#[derive(Error, Debug)]
pub enum ReconError {
    /// Scanner exited unsuccessfully
    #[error("{tool} exited with {}: {stderr}", exit_text(.status))]
    ToolFailed {
        /// Tool name or path
        tool: String,
        /// Exit code, `None` when killed by a signal
        status: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// Scanner could not be spawned (not installed, not executable)
    #[error("failed to run {tool}: {source}")]
    ToolUnavailable {
        /// Tool name or path
        tool: String,
        /// Spawn error
        #[source]
        source: std::io::Error,
    },

    /// Target would not be passed to the scanner as a target
    #[error("invalid scan target: {0:?}")]
    InvalidTarget(String),
}

fn exit_text(status: &Option<i32>) -> String {
    status.map_or_else(|| "a signal".to_string(), |code| format!("status {code}"))
}

impl ReconError {
    /// Failure category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ToolFailed { .. } | Self::ToolUnavailable { .. } => ErrorKind::ExternalToolFailure,
            Self::InvalidTarget(_) => ErrorKind::InvalidInput,
        }
    }
}

impl From<ReconError> for vulnscout_core::VulnScoutError {
    fn from(err: ReconError) -> Self {
        match err {
            ReconError::ToolFailed {
                tool,
                status,
                stderr,
            } => Self::ExternalTool {
                tool,
                status,
                stderr,
            },
            ReconError::ToolUnavailable { tool, source } => Self::ToolUnavailable {
                tool,
                reason: source.to_string(),
            },
            ReconError::InvalidTarget(target) => Self::InvalidTarget(target),
        }
    }
}
