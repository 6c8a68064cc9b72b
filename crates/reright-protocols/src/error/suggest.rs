//! Pipeline-level error.

use thiserror::Error;

use super::{CompletionError, ParseError, ValidationError};

/// Any failure of one suggestion request, from validation to parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SuggestError {
    /// Whether the request failed before any backend call was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, SuggestError::Validation(_))
    }
}
