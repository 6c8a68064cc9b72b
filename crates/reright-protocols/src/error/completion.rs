//! Completion backend errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// No backend can serve the request; carries the hint shown to the user.
    #[error("{0}")]
    BackendUnavailable(String),

    #[error("{0}")]
    BackendError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),
}
