//! # Reright Backend - Relay
//!
//! Sends the user text to a relay that holds the upstream credential.

mod client;

pub use client::RelayBackend;
