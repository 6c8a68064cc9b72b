//! Relay handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use reright_core::{parse_suggestions, validate};

use crate::error::RelayError;
use crate::state::RelayState;

/// Successful relay body.
#[derive(Debug, Serialize)]
pub struct SuggestionsBody {
    pub suggestions: Vec<String>,
}

/// Answer a CORS preflight.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

pub async fn method_not_allowed() -> RelayError {
    RelayError::MethodNotAllowed
}

/// Handle `POST {text}`.
pub async fn relay(State(state): State<Arc<RelayState>>, body: Bytes) -> Response {
    let span = info_span!("relay", request_id = %Uuid::new_v4());
    let result = suggest(&state, &body).instrument(span.clone()).await;

    span.in_scope(|| match result {
        Ok(suggestions) => {
            info!(count = suggestions.len(), "Relay request served");
            (
                [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
                Json(SuggestionsBody { suggestions }),
            )
                .into_response()
        }
        Err(e) => {
            warn!(status = e.status_code().as_u16(), error = %e, "Relay request failed");
            e.into_response()
        }
    })
}

async fn suggest(state: &RelayState, body: &[u8]) -> Result<Vec<String>, RelayError> {
    let text = extract_text(body)?;
    let request = validate(&text, state.word_limit)?;
    let payload = state.builder.build(&request);

    debug!(model = state.upstream.model(), "Forwarding to upstream");
    let raw = state.upstream.generate(&payload).await?;

    let list = parse_suggestions(&raw, state.builder.template().expected_count())?;
    Ok(list.into_vec())
}

/// Pull the string `text` field out of a JSON body.
fn extract_text(body: &[u8]) -> Result<String, RelayError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| RelayError::InvalidBody(e.to_string()))?;

    if value.is_null() {
        return Err(RelayError::InvalidBody(
            "Request body must be a JSON object".to_string(),
        ));
    }

    match value.get("text") {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        _ => Err(RelayError::MissingText),
    }
}

#[cfg(test)]
#[path = "relay_tests.rs"]
mod tests;
