//! The suggestion pipeline.

use std::sync::Arc;

use tracing::{debug, warn};

use reright_protocols::{CompletionBackend, SuggestError, SuggestionList};

use crate::parser::parse_suggestions;
use crate::prompt::PromptBuilder;
use crate::validator::validate;

/// Validate, prompt, complete, parse.
///
/// Stateless between calls. Concurrent calls are not coordinated: each
/// resolves in its own time, so responses may complete out of request order.
pub struct SuggestionPipeline {
    backend: Arc<dyn CompletionBackend>,
    builder: PromptBuilder,
    word_limit: usize,
}

impl SuggestionPipeline {
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        builder: PromptBuilder,
        word_limit: usize,
    ) -> Self {
        Self {
            backend,
            builder,
            word_limit,
        }
    }

    pub fn word_limit(&self) -> usize {
        self.word_limit
    }

    pub fn backend_id(&self) -> &str {
        self.backend.id()
    }

    pub fn builder(&self) -> &PromptBuilder {
        &self.builder
    }

    /// Run one request end to end.
    pub async fn suggest(&self, text: &str) -> Result<SuggestionList, SuggestError> {
        let request = validate(text, self.word_limit)?;
        let payload = self.builder.build(&request);

        debug!(
            backend = self.backend.id(),
            chars = request.text.len(),
            "Requesting suggestions"
        );

        let raw = self.backend.complete(&payload).await.inspect_err(|e| {
            warn!(backend = self.backend.id(), error = %e, "Completion failed");
        })?;

        let list = parse_suggestions(&raw, self.builder.template().expected_count())
            .inspect_err(|e| {
                warn!(backend = self.backend.id(), error = %e, "Unusable model output");
            })?;

        debug!(count = list.len(), "Suggestions ready");
        Ok(list)
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
