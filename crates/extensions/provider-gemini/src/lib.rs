//! # Reright Provider - Gemini
//!
//! Google Gemini `generateContent` client, usable both as the relay's
//! upstream and as a direct completion backend.

mod backend;
mod client;
mod types;

pub use backend::GeminiBackend;
pub use client::{DEFAULT_BASE_URL, GeminiClient};
pub use types::*;
