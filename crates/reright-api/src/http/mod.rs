//! HTTP relay module.

pub mod relay;
pub mod routes;
