use thiserror::Error;

/// Result type alias for vulnscout operations
pub type Result<T> = std::result::Result<T, VulnScoutError>;

/// Errors that can occur anywhere in the pipeline
#[derive(Error, Debug)]
pub enum VulnScoutError {
    /// The external scanner exited with a non-zero status
    #[error("{tool} exited with {}: {stderr}", exit_text(.status))]
    ExternalTool {
        /// Name of the tool that failed
        tool: String,
        /// Exit code, if the process was not killed by a signal
        status: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// The external scanner could not be started
    #[error("failed to run {tool}: {reason}")]
    ToolUnavailable {
        /// Name or path of the tool
        tool: String,
        /// Why the process could not be spawned
        reason: String,
    },

    /// The vulnerability service answered with something other than 200
    #[error("vulnerability service returned HTTP {status}")]
    RemoteService {
        /// HTTP status code
        status: u16,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Response body was not the JSON shape we expect
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Target or network range rejected before invoking the scanner
    #[error("invalid scan target: {0:?}")]
    InvalidTarget(String),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

fn exit_text(status: &Option<i32>) -> String {
    status.map_or_else(|| "a signal".to_string(), |code| format!("status {code}"))
}

/// Coarse failure categories used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The scanner subprocess failed or could not be spawned
    ExternalToolFailure,
    /// The vulnerability endpoint failed or could not be reached
    RemoteServiceFailure,
    /// The vulnerability endpoint answered with an unexpected body
    MalformedResponse,
    /// Input rejected before any collaborator was called
    InvalidInput,
    /// Anything else
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExternalToolFailure => write!(f, "external tool failure"),
            Self::RemoteServiceFailure => write!(f, "remote service failure"),
            Self::MalformedResponse => write!(f, "malformed response"),
            Self::InvalidInput => write!(f, "invalid input"),
            Self::Internal => write!(f, "internal error"),
        }
    }
}

impl VulnScoutError {
    /// Returns the failure category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ExternalTool { .. } | Self::ToolUnavailable { .. } => {
                ErrorKind::ExternalToolFailure
            }
            Self::RemoteService { .. } | Self::Http(_) => ErrorKind::RemoteServiceFailure,
            Self::MalformedResponse(_) | Self::Json(_) => ErrorKind::MalformedResponse,
            Self::InvalidTarget(_) | Self::InvalidUrl(_) | Self::Config(_) => {
                ErrorKind::InvalidInput
            }
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Returns the HTTP status code if the remote service answered
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RemoteService { status } => Some(*status),
            _ => None,
        }
    }
}
