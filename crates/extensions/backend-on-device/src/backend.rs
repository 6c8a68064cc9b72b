//! On-device completion backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use reright_core::parse_list;
use reright_protocols::{
    BackendCapabilities, CompletionBackend, CompletionError, PromptCapability, PromptPayload,
    RawCompletion, RewriteCapability,
};

use crate::scoped::Scoped;

/// Shown when the browser exposes neither capability.
pub const NO_AI_HINT: &str = "No AI APIs found. Please enable '#prompt-api-for-gemini-nano' or '#rewriter-api-for-gemini-nano' in chrome://flags.";

/// Local model backend.
///
/// The system prompt configures the session (or is the rewriter's shared
/// context) and the user text is sent raw.
pub struct OnDeviceBackend {
    prompting: Option<Arc<dyn PromptCapability>>,
    rewriting: Option<Arc<dyn RewriteCapability>>,
}

impl OnDeviceBackend {
    /// Create a backend over whichever capabilities the host exposes.
    pub fn new(
        prompting: Option<Arc<dyn PromptCapability>>,
        rewriting: Option<Arc<dyn RewriteCapability>>,
    ) -> Self {
        Self {
            prompting,
            rewriting,
        }
    }

    /// `Ok(None)` when the model is unavailable or its reply holds no
    /// usable suggestion array.
    async fn try_prompting(
        &self,
        capability: &dyn PromptCapability,
        payload: &PromptPayload,
    ) -> Result<Option<String>, CompletionError> {
        if !capability.availability().await?.is_available() {
            debug!("Prompt API unavailable");
            return Ok(None);
        }

        let mut session = Scoped::new(capability.create(&payload.system_prompt).await?);
        let text = session.prompt(&payload.user_text).await?;

        if let Err(e) = parse_list(&text) {
            warn!("Prompt API reply has no suggestions ({}), discarding", e);
            return Ok(None);
        }
        Ok(Some(text))
    }

    async fn rewrite(
        &self,
        capability: &dyn RewriteCapability,
        payload: &PromptPayload,
    ) -> Result<String, CompletionError> {
        let rewriter = capability
            .create(&payload.system_prompt)
            .await
            .map_err(|e| {
                CompletionError::BackendError(format!(
                    "AI initialization failed: {}. Check chrome://components for model updates.",
                    e
                ))
            })?;

        let mut rewriter = Scoped::new(rewriter);
        rewriter.rewrite(&payload.user_text).await
    }
}

#[async_trait]
impl CompletionBackend for OnDeviceBackend {
    fn id(&self) -> &str {
        "on-device"
    }

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities {
            supports_prompting: self.prompting.is_some(),
            supports_rewriting: self.rewriting.is_some(),
        }
    }

    async fn complete(&self, payload: &PromptPayload) -> Result<RawCompletion, CompletionError> {
        if let Some(prompting) = &self.prompting {
            match self.try_prompting(prompting.as_ref(), payload).await {
                Ok(Some(text)) => return Ok(RawCompletion::from(text)),
                Ok(None) => debug!("Prompt API gave no suggestions, trying Rewriter"),
                Err(e) => warn!("Prompt API failed, falling back to Rewriter: {}", e),
            }
        }

        let Some(rewriting) = &self.rewriting else {
            return Err(CompletionError::BackendUnavailable(NO_AI_HINT.to_string()));
        };

        self.rewrite(rewriting.as_ref(), payload)
            .await
            .map(RawCompletion::from)
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
