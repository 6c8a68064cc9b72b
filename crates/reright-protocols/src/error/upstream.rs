//! Upstream model errors, as seen by the relay.

use thiserror::Error;

use super::CompletionError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    /// The upstream answered 2xx but the body could not be used.
    #[error("{0}")]
    InvalidResponse(String),
}

impl UpstreamError {
    /// The upstream status to pass through, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<UpstreamError> for CompletionError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Api { message, .. } => CompletionError::BackendError(message),
            UpstreamError::Transport(message) => CompletionError::Network(message),
            UpstreamError::Timeout(secs) => CompletionError::Timeout(secs),
            UpstreamError::InvalidResponse(message) => CompletionError::BackendError(message),
        }
    }
}
