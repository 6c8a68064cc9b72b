//! Input validation.
//!
//! Runs before any network call. Pure.

use reright_protocols::{SuggestionRequest, ValidationError};

/// Count whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Trim `text` and check it against `word_limit`.
pub fn validate(text: &str, word_limit: usize) -> Result<SuggestionRequest, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if count_words(trimmed) > word_limit {
        return Err(ValidationError::TooManyWords { limit: word_limit });
    }

    Ok(SuggestionRequest {
        text: trimmed.to_string(),
        word_limit,
    })
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
