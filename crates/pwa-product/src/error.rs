//! Remote call error types.

use thiserror::Error;

/// Failure of a named remote pipeline call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The remote side answered with an error.
    #[error("Pipeline '{name}' failed with {code}: {message}")]
    Remote {
        name: String,
        code: String,
        message: String,
    },

    /// The call did not reach the remote side or got no answer.
    #[error("Pipeline '{name}' could not be reached: {reason}")]
    Transport { name: String, reason: String },

    /// The answer could not be understood.
    #[error("Pipeline '{name}' returned an invalid response: {reason}")]
    InvalidResponse { name: String, reason: String },
}

impl PipelineError {
    /// Name of the pipeline that failed.
    pub fn pipeline(&self) -> &str {
        match self {
            Self::Remote { name, .. }
            | Self::Transport { name, .. }
            | Self::InvalidResponse { name, .. } => name,
        }
    }

    /// Whether retrying the same call may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Result type alias for pipeline calls.
pub type Result<T> = std::result::Result<T, PipelineError>;
