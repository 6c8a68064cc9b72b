//! Extension messaging contract.
//!
//! Wire shapes exchanged between the content script, the background broker
//! and the popup. Serialized with a `type` tag in camelCase.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SuggestError;
use crate::types::SuggestionList;

/// Browser tab identifier.
pub type TabId = u32;

/// Messages routed between extension contexts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExtensionMessage {
    /// Floating icon clicked in a tab.
    TriggerReright { text: String },

    /// Request answered directly with a [`SuggestionResponse`].
    GetSuggestions { text: String },

    /// Popup request brokered through the background context.
    GetSuggestionsViaOffscreen { text: String },

    ShowLoading,

    ShowError { message: String },

    #[serde(rename_all = "camelCase")]
    ShowSuggestions {
        suggestions: Vec<String>,
        original_text: String,
    },
}

/// Reply to a suggestion request: `{success, suggestions}` or `{success, error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SuggestionResponse {
    pub fn ok(suggestions: SuggestionList) -> Self {
        Self {
            success: true,
            suggestions: Some(suggestions.into_vec()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            suggestions: None,
            error: Some(error.into()),
        }
    }

    /// Split back into suggestions or the error message.
    pub fn into_result(self) -> Result<Vec<String>, String> {
        match (self.success, self.suggestions) {
            (true, Some(suggestions)) => Ok(suggestions),
            _ => Err(self.error.unwrap_or_default()),
        }
    }
}

impl From<Result<SuggestionList, SuggestError>> for SuggestionResponse {
    fn from(result: Result<SuggestionList, SuggestError>) -> Self {
        match result {
            Ok(list) => Self::ok(list),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// Delivers broadcast messages to a tab's content script.
#[async_trait]
pub trait TabSink: Send + Sync {
    async fn send(&self, tab: TabId, message: ExtensionMessage);
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
