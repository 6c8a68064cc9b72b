//! Relay HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use reright_protocols::{
    BackendCapabilities, CompletionBackend, CompletionError, PromptPayload, RawCompletion,
};

const DEFAULT_ERROR: &str = "API request failed";

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Remote relay backend.
///
/// The relay owns the system prompt, so only the user text travels. A
/// successful `{suggestions}` body is re-encoded as the raw completion.
pub struct RelayBackend {
    client: Client,
    url: String,
    timeout: Option<Duration>,
}

impl RelayBackend {
    /// Create a backend using the transport's default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout: None,
        }
    }

    /// Create a backend with an explicit request timeout.
    pub fn with_timeout(
        url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompletionError::Network(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
            timeout: Some(timeout),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_send_error(&self, e: reqwest::Error) -> CompletionError {
        match self.timeout {
            Some(t) if e.is_timeout() => CompletionError::Timeout(t.as_secs()),
            _ => CompletionError::Network(e.to_string()),
        }
    }
}

#[async_trait]
impl CompletionBackend for RelayBackend {
    fn id(&self) -> &str {
        "relay"
    }

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities {
            supports_prompting: true,
            supports_rewriting: false,
        }
    }

    async fn complete(&self, payload: &PromptPayload) -> Result<RawCompletion, CompletionError> {
        debug!("Relay request: url={}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&RelayRequest {
                text: &payload.user_text,
            })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<RelayErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR.to_string());
            return Err(CompletionError::BackendError(message));
        }

        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            CompletionError::BackendError(format!("Invalid relay response: {}", e))
        })?;

        match value.get("suggestions") {
            Some(suggestions) => Ok(RawCompletion::new(suggestions.to_string())),
            None => Err(CompletionError::BackendError(
                "Relay response did not include suggestions".to_string(),
            )),
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
