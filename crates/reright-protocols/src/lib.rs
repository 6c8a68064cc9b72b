//! # Reright Protocols
//!
//! Shared definitions for the Reright suggestion pipeline.
//! Contains only types and interfaces - no backend implementations.
//!
//! ## Core Traits
//!
//! - [`CompletionBackend`] - Turns a [`PromptPayload`] into raw model text
//! - [`PromptCapability`] / [`RewriteCapability`] - On-device model surfaces
//! - [`UpstreamModel`] - The model behind the relay, with status passthrough
//! - [`TabSink`] - Delivers broadcast messages to a browser tab

pub mod backend;
pub mod error;
pub mod message;
pub mod on_device;
pub mod types;
pub mod upstream;

pub use backend::{BackendCapabilities, CompletionBackend};
pub use error::{CompletionError, ParseError, SuggestError, UpstreamError, ValidationError};
pub use message::{ExtensionMessage, SuggestionResponse, TabId, TabSink};
pub use on_device::{
    Availability, OnDeviceResource, PromptCapability, PromptSession, RewriteCapability, Rewriter,
};
pub use types::*;
pub use upstream::UpstreamModel;
