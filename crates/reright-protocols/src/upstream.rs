//! The model the relay forwards to.

use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::types::{PromptPayload, RawCompletion};

/// A hosted model reachable with a server-held credential.
///
/// Unlike [`crate::CompletionBackend`], failures keep the upstream status so
/// the relay can pass it through to its caller.
#[async_trait]
pub trait UpstreamModel: Send + Sync {
    /// Model name, for logging.
    fn model(&self) -> &str;

    /// Issue one generation call.
    async fn generate(&self, payload: &PromptPayload) -> Result<RawCompletion, UpstreamError>;
}
