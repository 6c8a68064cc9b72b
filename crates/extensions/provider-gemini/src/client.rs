//! Gemini API client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use reright_protocols::UpstreamError;

use crate::types::*;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_ERROR: &str = "API request failed";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Gemini API client.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a new Gemini client against `base_url`.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generate content (non-streaming).
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, UpstreamError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        debug!("Gemini generate_content: model={}", model);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiError>(&body)
                .ok()
                .and_then(|e| e.error.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR.to_string());
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| UpstreamError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    // reqwest puts the full URL in its error text; the key must not leak.
    fn map_send_error(&self, e: reqwest::Error) -> UpstreamError {
        if e.is_timeout() {
            return self.timeout_error(e.is_connect());
        }
        let message = e.without_url().to_string();
        UpstreamError::Transport(message)
    }

    /// Report the limit that actually expired.
    fn timeout_error(&self, connecting: bool) -> UpstreamError {
        if connecting {
            UpstreamError::Timeout(CONNECT_TIMEOUT.as_secs())
        } else {
            UpstreamError::Timeout(self.timeout.as_secs())
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
