//! Error types surfaced by the proxy endpoint

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// The two failure modes of the weather proxy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The caller supplied no city name
    #[error("City parameter is required")]
    MissingParameter,

    /// The outbound provider call failed (network error or non-success status)
    #[error("Failed to fetch weather data: {message}")]
    Upstream { message: String },
}

impl ApiError {
    /// Create an upstream failure carrying the provider's message
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingParameter => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "City parameter is required" })),
            )
                .into_response(),
            ApiError::Upstream { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch weather data",
                    "message": message,
                })),
            )
                .into_response(),
        }
    }
}
