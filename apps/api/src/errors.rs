#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every surfaced failure maps to HTTP 500 with a `{"error": <message>}` body:
/// the optimization pipeline itself never fails (each field degrades to its
/// heuristic fallback), so the only errors that reach the caller are
/// top-level ones such as a malformed request body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidBody(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {self}");

        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
