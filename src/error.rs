//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to the JSON envelope returned by every route.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::constants::messages;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Request errors
    #[error("{0}")]
    Validation(String),

    #[error("{}", messages::AUTHENTICATION_REQUIRED)]
    Unauthorized,

    // Upstream errors
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Holds a bounded excerpt of the body; only the forwarder logs it
    #[error("{}", messages::PARSE_FAILURE)]
    MalformedUpstreamBody(String),

    #[error("Failed to connect to {server} server: {message}")]
    Transport {
        server: &'static str,
        message: String,
    },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Upstream { .. } => "UPSTREAM_FAILURE",
            Self::MalformedUpstreamBody(_) => "MALFORMED_UPSTREAM_BODY",
            Self::Transport { .. } => "TRANSPORT_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::MalformedUpstreamBody(_) | Self::Transport { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        // Upstream diagnostics were already logged by the forwarder
        tracing::debug!(code, status = status.as_u16(), "{}", self);

        let body = ErrorResponse {
            success: false,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
