//! Unified error types for the VRFD feed API
//!
//! This module defines error types for each layer:
//! - `JupiterError`: Jupiter API client errors
//! - `AppError`: Application layer errors (rendered as HTTP responses)
//!
//! Normalization itself never fails; malformed upstream fields degrade to defaults.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Jupiter API client errors
#[derive(Debug, Error)]
pub enum JupiterError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Jupiter API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// Upstream fetch failed. `message` is the fixed text shown to clients.
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: JupiterError,
    },
}

impl AppError {
    pub fn upstream(message: &'static str) -> impl FnOnce(JupiterError) -> AppError {
        move |source| AppError::Upstream { message, source }
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Upstream { message, source } => {
                tracing::error!("{}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, *message)
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
        });

        (status, body).into_response()
    }
}
