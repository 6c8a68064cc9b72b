//! # Reright Relay
//!
//! The HTTP edge that holds the upstream model credential. Clients send
//! `{text}` and receive `{suggestions}` or `{error}`; the key never leaves
//! the server.
//!
//! ```text
//! POST /  ─▶ validate ─▶ prompt ─▶ UpstreamModel ─▶ parse ─▶ {suggestions}
//! ```

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::RelayError;
pub use http::routes::create_router;
pub use server::{RelayServer, RelayServerConfig};
pub use state::RelayState;
