//! Request-scoped data carried through the pipeline.
//!
//! Nothing here outlives a single suggestion request.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Phrase the Prompt Builder appends to the system prompt for inline backends.
pub const TRANSFORM_PREAMBLE: &str = "Transform this phrase:";

/// Built-in system prompt styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptVariant {
    /// Ruthless editor, banned corporate words, 3 suggestions.
    Punchy,
    /// Plain, concrete, unhurried, 3 suggestions.
    Stoic,
    /// Writing coach with meaning and length preservation, 5 suggestions.
    Coach,
    /// Coach that branches on single terms versus phrases, 5 suggestions.
    #[default]
    Adaptive,
}

/// Validated user text.
///
/// Produced by the input validator: `text` is trimmed, non-empty and holds at
/// most `word_limit` words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub text: String,
    pub word_limit: usize,
}

/// Everything a backend needs to issue one completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptPayload {
    /// Fixed instruction for the deployment's prompt variant.
    pub system_prompt: String,

    /// The validated user text, unmodified.
    pub user_text: String,

    /// Sampling temperature (0.0 - 2.0).
    pub temperature: f32,

    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
}

impl PromptPayload {
    /// Single-string rendering for backends without a separate system slot.
    pub fn inline_prompt(&self) -> String {
        format!(
            "{}\n\n{} \"{}\"",
            self.system_prompt, TRANSFORM_PREAMBLE, self.user_text
        )
    }
}

/// Untouched text returned by a backend.
///
/// May wrap the suggestion array in arbitrary prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCompletion(String);

impl RawCompletion {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for RawCompletion {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for RawCompletion {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// Ordered, non-empty list of non-blank suggestions.
///
/// Either the whole list is present or construction fails; there are no
/// partial lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuggestionList(Vec<String>);

impl SuggestionList {
    /// Build a list, rejecting empty input and blank entries.
    pub fn try_from_vec(items: Vec<String>) -> Result<Self, ParseError> {
        if items.is_empty() {
            return Err(ParseError::EmptyList);
        }
        if let Some(index) = items.iter().position(|s| s.trim().is_empty()) {
            return Err(ParseError::MalformedJson(format!(
                "suggestion at index {} is blank",
                index
            )));
        }
        Ok(Self(items))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl IntoIterator for SuggestionList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SuggestionList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
