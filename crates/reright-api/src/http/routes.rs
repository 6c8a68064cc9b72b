//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    Router,
    routing::{MethodRouter, post},
};
use tower_http::trace::TraceLayer;

use crate::http::relay::{method_not_allowed, preflight, relay};
use crate::state::RelayState;

/// Create the relay router.
///
/// The relay answers on every path:
///
/// ```text
/// OPTIONS  *  - CORS preflight, empty body
/// POST     *  - {text} -> {suggestions}
/// other    *  - 405 {error: "Method not allowed"}
/// ```
pub fn create_router(state: Arc<RelayState>) -> Router {
    let endpoint: MethodRouter<Arc<RelayState>> = post(relay)
        .options(preflight)
        .fallback(method_not_allowed);

    Router::new()
        .route("/", endpoint.clone())
        .route("/{*path}", endpoint)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
