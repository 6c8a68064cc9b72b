//! # Reright Backend - On-device
//!
//! Completion through the host browser's local model. Tries the prompting
//! capability first and falls back to the rewrite capability.

mod backend;
mod scoped;

pub use backend::{NO_AI_HINT, OnDeviceBackend};
pub use scoped::Scoped;
