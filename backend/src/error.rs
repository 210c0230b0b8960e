//! Error handling for the weather service
//!
//! Two kinds of failure reach the entry points: data-level outcomes
//! (invalid input, provider refusals) and transport failures that prevent a
//! provider answer altogether. Only the latter is an `Err` below the
//! adapters.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{ApiResponse, ValidationError};
use thiserror::Error;

/// Failure to obtain a provider response
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("weather provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather provider returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    #[error("failed to decode weather provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Application error types, rendered as `{success: false, message}`
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The provider answered with a non-success status
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// `message` is what the caller sees; `source` is only logged
    #[error("{message}: {source}")]
    Transport {
        message: &'static str,
        #[source]
        source: TransportError,
    },
}

impl AppError {
    pub fn transport(message: &'static str, source: TransportError) -> Self {
        AppError::Transport { message, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Upstream(_) => StatusCode::BAD_REQUEST,
            AppError::Transport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to callers
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::Upstream(message) => message.clone(),
            AppError::Transport { message, .. } => (*message).to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Transport { .. } => tracing::error!("Error: {:?}", self),
            _ => tracing::warn!("Request rejected: {}", self),
        }

        let body = ApiResponse::<()>::error(self.public_message());
        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
