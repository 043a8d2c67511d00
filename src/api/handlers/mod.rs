use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::models::*;

// ============================================================
// Error Handling
// ============================================================

/// Malformed payloads are a client error. The engine is never invoked for
/// them and the reason is safe to show to the caller.
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected request: {}", self);
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

fn malformed(rejection: JsonRejection) -> GatewayError {
    GatewayError::MalformedRequest(rejection.body_text())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Channels
// ============================================================

pub async fn session(
    State(gateway): State<Arc<Gateway>>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, GatewayError> {
    let Json(request) = payload.map_err(malformed)?;
    Ok(Json(gateway.handle_session(request)))
}

pub async fn message(
    State(gateway): State<Arc<Gateway>>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let Json(request) = payload.map_err(malformed)?;
    Ok(Json(gateway.handle_message(request)))
}
