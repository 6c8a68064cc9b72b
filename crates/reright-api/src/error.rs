//! Relay error types.
//!
//! Every variant renders as `{error}` JSON with the relay's fixed status
//! codes and `Access-Control-Allow-Origin: *`.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use reright_protocols::{ParseError, UpstreamError, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Text is required")]
    MissingText,

    #[error("Please select {0} words or fewer")]
    TooManyWords(usize),

    /// The body could not be decoded at all.
    #[error("{0}")]
    InvalidBody(String),

    /// Non-success answer from the upstream model, passed through.
    #[error("{message}")]
    UpstreamError { status: u16, message: String },

    #[error("Invalid response format")]
    InvalidUpstreamFormat,

    #[error("{0}")]
    Internal(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingText | Self::TooManyWords(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::InvalidBody(_) | Self::InvalidUpstreamFormat | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Internal(m) | Self::InvalidBody(m) if m.is_empty() => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<ValidationError> for RelayError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyInput => Self::MissingText,
            ValidationError::TooManyWords { limit } => Self::TooManyWords(limit),
        }
    }
}

impl From<UpstreamError> for RelayError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Api { status, message } => Self::UpstreamError { status, message },
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<ParseError> for RelayError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::NoJsonArrayFound | ParseError::EmptyList => Self::InvalidUpstreamFormat,
            ParseError::MalformedJson(message) => Self::Internal(message),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message() });
        (
            self.status_code(),
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(body),
        )
            .into_response()
    }
}
