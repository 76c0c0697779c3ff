//! Error types for the synthetic log emission service.
//!
//! This module defines the central `Error` enum, which captures all
//! reportable error cases within the emission system. It implements
//! [`IntoResponse`] so handler code can surface errors to HTTP clients with
//! appropriate status codes and messages.
//!
//! ## Error Cases
//! - `Channel`: An internal communication failure between tasks.
//! - `Entropy`: The system randomness facility could not supply bytes.
//! - `InvalidRequest`: The client request was malformed or out of bounds.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the emission service.
#[derive(Clone, thiserror::Error, Debug)]
pub enum Error {
    /// Internal channel send/receive failure (e.g., the consumer is gone).
    #[error("channel error: {context}")]
    Channel { context: String },

    /// The system randomness facility could not supply bytes.
    #[error("entropy source unavailable: {reason}")]
    Entropy { reason: String },

    /// The client request was invalid or exceeded constraints.
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidRequest { reason } => (StatusCode::BAD_REQUEST, reason).into_response(),
            Self::Channel { .. } | Self::Entropy { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
            }
        }
    }
}
