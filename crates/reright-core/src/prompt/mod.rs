//! Prompt construction.
//!
//! A [`PromptTemplate`] is the deployment's fixed instruction plus the number
//! of suggestions it asks for. The [`PromptBuilder`] pairs it with validated
//! user text to produce a [`PromptPayload`](reright_protocols::PromptPayload).

mod builder;
mod variants;

pub use builder::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE, PromptBuilder, PromptTemplate};
pub use variants::{ADAPTIVE_PROMPT, COACH_PROMPT, PUNCHY_PROMPT, STOIC_PROMPT, variant_template};
