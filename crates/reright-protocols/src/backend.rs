//! Completion backend trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CompletionError;
use crate::types::{PromptPayload, RawCompletion};

/// What a backend can do with a prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendCapabilities {
    /// Accepts a system prompt plus user text and answers freely.
    pub supports_prompting: bool,

    /// Rewrites the user text against a shared context.
    pub supports_rewriting: bool,
}

/// Core trait for anything that turns a prompt into raw model text.
///
/// One call is exactly one outbound model or network call. Implementations
/// do not retry.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Returns the backend ID.
    fn id(&self) -> &str;

    /// Returns the backend capabilities.
    fn capabilities(&self) -> BackendCapabilities;

    /// Issue one completion.
    async fn complete(&self, payload: &PromptPayload) -> Result<RawCompletion, CompletionError>;
}
