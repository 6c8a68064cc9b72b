//! Relay state.

use std::sync::Arc;

use reright_core::PromptBuilder;
use reright_protocols::UpstreamModel;

/// Default relay word limit.
pub const DEFAULT_WORD_LIMIT: usize = 100;

/// Shared state for relay handlers.
#[derive(Clone)]
pub struct RelayState {
    pub upstream: Arc<dyn UpstreamModel>,
    pub builder: PromptBuilder,
    pub word_limit: usize,
}

impl RelayState {
    pub fn new(upstream: Arc<dyn UpstreamModel>, builder: PromptBuilder) -> Self {
        Self {
            upstream,
            builder,
            word_limit: DEFAULT_WORD_LIMIT,
        }
    }

    pub fn with_word_limit(mut self, word_limit: usize) -> Self {
        self.word_limit = word_limit;
        self
    }
}
