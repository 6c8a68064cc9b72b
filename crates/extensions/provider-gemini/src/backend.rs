//! Gemini as a completion backend and as the relay upstream.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use reright_protocols::{
    BackendCapabilities, CompletionBackend, CompletionError, PromptPayload, RawCompletion,
    UpstreamError, UpstreamModel,
};

use crate::client::GeminiClient;
use crate::types::GenerateContentRequest;

/// One model on the Gemini API.
pub struct GeminiBackend {
    client: GeminiClient,
    model: String,
}

impl GeminiBackend {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build the client and backend in one step.
    pub fn connect(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        Ok(Self::new(GeminiClient::new(api_key, base_url, timeout)?, model))
    }
}

#[async_trait]
impl UpstreamModel for GeminiBackend {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, payload: &PromptPayload) -> Result<RawCompletion, UpstreamError> {
        let request = GenerateContentRequest::from_payload(payload);
        let response = self.client.generate_content(&self.model, &request).await?;

        match response.text() {
            Some(text) => Ok(RawCompletion::new(text)),
            None => {
                warn!("Gemini returned no usable candidate: model={}", self.model);
                Err(UpstreamError::InvalidResponse(
                    "Gemini returned no candidates".to_string(),
                ))
            }
        }
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    fn id(&self) -> &str {
        "gemini"
    }

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities {
            supports_prompting: true,
            supports_rewriting: false,
        }
    }

    async fn complete(&self, payload: &PromptPayload) -> Result<RawCompletion, CompletionError> {
        self.generate(payload).await.map_err(CompletionError::from)
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
