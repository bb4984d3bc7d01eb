//! Axum route handlers for the optimization API.

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::optimize::models::{OptimizationRequest, OptimizationResult};
use crate::optimize::optimizer::optimize_content;
use crate::state::AppState;

/// POST /api/v1/optimize
///
/// Accepts either a bare request object or a Function-URL-style event whose
/// `body` field holds the request (as a JSON string or an object). The
/// pipeline itself cannot fail, so the only error path is a malformed body.
pub async fn handle_optimize(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<OptimizationResult>, AppError> {
    let event: Value = serde_json::from_str(&body)
        .map_err(|e| AppError::InvalidBody(format!("request body is not valid JSON: {e}")))?;

    let request = unwrap_envelope(event)?;
    debug!(
        platform = %request.platform,
        audience = request.target_audience.as_str(),
        "optimization request received"
    );

    let result = optimize_content(state.inference.as_ref(), &request).await;

    Ok(Json(result))
}

/// Unwraps the optional event envelope: a non-empty `body` string is parsed
/// as JSON, a non-empty `body` object is used directly, anything else means
/// the event itself is the request.
fn unwrap_envelope(event: Value) -> Result<OptimizationRequest, AppError> {
    let body = match event.get("body") {
        Some(Value::String(raw)) if !raw.is_empty() => serde_json::from_str(raw)
            .map_err(|e| AppError::InvalidBody(format!("envelope body is not valid JSON: {e}")))?,
        Some(Value::Object(fields)) if !fields.is_empty() => Value::Object(fields.clone()),
        _ => event,
    };

    serde_json::from_value(body)
        .map_err(|e| AppError::InvalidBody(format!("malformed optimization request: {e}")))
}
