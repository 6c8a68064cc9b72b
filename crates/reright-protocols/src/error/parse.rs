//! Suggestion parsing errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid response format")]
    NoJsonArrayFound,

    #[error("Malformed suggestion list: {0}")]
    MalformedJson(String),

    #[error("AI response did not contain valid suggestions.")]
    EmptyList,
}
