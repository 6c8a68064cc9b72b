//! Input validation errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Text is required")]
    EmptyInput,

    #[error("Please select {limit} words or fewer")]
    TooManyWords { limit: usize },
}
