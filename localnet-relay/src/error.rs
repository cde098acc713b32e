//! Error types for localnet-relay.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Fixed body of a simulated failure response.
///
/// Tests assert on this literal to tell an injected fault apart from a
/// genuine internal error.
pub const SIMULATED_FAULT_BODY: &str = "Chaos Monkey says no!";

/// Main error type for relay startup and shutdown.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// I/O error (bind, serve).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-request error taxonomy for the HTTP surface.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or out-of-range request input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Injected failure from the chaos interceptor.
    ///
    /// Surfaced as a 500 whose body is exactly [`SIMULATED_FAULT_BODY`].
    #[error("simulated fault")]
    SimulatedFault,

    /// Unexpected failure in a handler. Logged at the boundary and returned
    /// as a generic 500; the relay process must outlive it.
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(detail) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { detail })).into_response()
            }
            ApiError::SimulatedFault => {
                (StatusCode::INTERNAL_SERVER_ERROR, SIMULATED_FAULT_BODY).into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        detail: "internal error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
