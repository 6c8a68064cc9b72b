//! Suggestion parsing.
//!
//! Models wrap their answer in prose often enough that the array is located
//! first: the span from the first `[` to the last `]`. That span must be a
//! JSON array of non-blank strings. A failure here is terminal for the request.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use reright_protocols::{ParseError, RawCompletion, SuggestionList};

static ARRAY_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("array span pattern is valid"));

/// Locate the greedy bracket-delimited span in `raw`.
pub fn extract_array(raw: &str) -> Option<&str> {
    ARRAY_SPAN.find(raw).map(|m| m.as_str())
}

/// Parse the array span of `raw` into a non-empty suggestion list.
pub fn parse_list(raw: &str) -> Result<SuggestionList, ParseError> {
    let span = extract_array(raw).ok_or(ParseError::NoJsonArrayFound)?;

    let items: Vec<String> =
        serde_json::from_str(span).map_err(|e| ParseError::MalformedJson(e.to_string()))?;

    SuggestionList::try_from_vec(items)
}

/// Parse a raw completion into a suggestion list.
///
/// A length other than `expected_count` is accepted and only logged.
pub fn parse_suggestions(
    raw: &RawCompletion,
    expected_count: usize,
) -> Result<SuggestionList, ParseError> {
    let list = parse_list(raw.as_str())?;

    if list.len() != expected_count {
        warn!(
            expected = expected_count,
            actual = list.len(),
            "Suggestion count differs from the prompt's declared count"
        );
    }

    Ok(list)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
