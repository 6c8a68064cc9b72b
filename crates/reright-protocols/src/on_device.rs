//! On-device language model surfaces exposed by the host browser.
//!
//! Sessions and rewriters hold a local model resource that must be released
//! with [`OnDeviceResource::destroy`] once the single call is done.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CompletionError;

/// Result of a prompting capability availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    Readily,
    AfterDownload,
    No,
}

impl Availability {
    pub fn is_available(self) -> bool {
        self != Availability::No
    }
}

/// A model resource that must be released exactly once.
pub trait OnDeviceResource: Send {
    fn destroy(&mut self);
}

/// Prompting capability (`languageModel`).
#[async_trait]
pub trait PromptCapability: Send + Sync {
    async fn availability(&self) -> Result<Availability, CompletionError>;

    /// Open a session configured with the system prompt.
    async fn create(&self, system_prompt: &str) -> Result<Box<dyn PromptSession>, CompletionError>;
}

#[async_trait]
pub trait PromptSession: OnDeviceResource {
    async fn prompt(&mut self, text: &str) -> Result<String, CompletionError>;
}

/// Rewrite capability (`Rewriter`).
#[async_trait]
pub trait RewriteCapability: Send + Sync {
    /// Open a rewriter with the system prompt as shared context.
    async fn create(&self, shared_context: &str) -> Result<Box<dyn Rewriter>, CompletionError>;
}

#[async_trait]
pub trait Rewriter: OnDeviceResource {
    async fn rewrite(&mut self, text: &str) -> Result<String, CompletionError>;
}
