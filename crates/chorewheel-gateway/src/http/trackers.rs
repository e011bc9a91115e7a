//! Tracker endpoints — GET /{tracker}/state and POST /{tracker}/mark-done
//!
//! `{tracker}` is one of the compiled-in rotations (e.g. `water`, `dustbin`).
//!
//! State response:     `{"currentIndex": 0, "history": [{"name": "...", "timestamp": "..."}]}`
//! Mark-done request:  `{"currentIndex": 0, "pin": "1234"}`
//! Mark-done response: `{"success": true}` or `{"success": false, "error": "..."}`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use chorewheel_rotation::{RotationError, TrackerState};

use crate::app::AppState;

#[derive(Deserialize)]
pub struct MarkDoneRequest {
    /// The roster index the caller believes is current.
    #[serde(rename = "currentIndex")]
    pub current_index: i64,
    /// The member's shared PIN, plaintext.
    pub pin: String,
}

#[derive(Serialize)]
pub struct MarkDoneResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct StateError {
    pub error: String,
}

/// GET /{tracker}/state — current index plus full history, newest first.
pub async fn state_handler(
    State(state): State<Arc<AppState>>,
    Path(tracker): Path<String>,
) -> Result<Json<TrackerState>, (StatusCode, Json<StateError>)> {
    match state.rotation.state(&tracker) {
        Ok(s) => Ok(Json(s)),
        Err(e) => {
            warn!(tracker = %tracker, error = %e, "GET state failed");
            Err((
                status_for(&e),
                Json(StateError {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

/// POST /{tracker}/mark-done — claim the current turn with a PIN and advance
/// the rotation.
pub async fn mark_done_handler(
    State(state): State<Arc<AppState>>,
    Path(tracker): Path<String>,
    Json(req): Json<MarkDoneRequest>,
) -> (StatusCode, Json<MarkDoneResponse>) {
    match state.rotation.mark_done(&tracker, req.current_index, &req.pin) {
        Ok(()) => (
            StatusCode::OK,
            Json(MarkDoneResponse {
                success: true,
                error: None,
            }),
        ),
        Err(e) => {
            warn!(tracker = %tracker, error = %e, "POST mark-done failed");
            (
                status_for(&e),
                Json(MarkDoneResponse {
                    success: false,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

/// Map rotation errors onto HTTP status codes.
fn status_for(e: &RotationError) -> StatusCode {
    match e {
        RotationError::UnknownTracker { .. } => StatusCode::NOT_FOUND,
        RotationError::InvalidIndex { .. } => StatusCode::BAD_REQUEST,
        RotationError::InvalidPin => StatusCode::FORBIDDEN,
        RotationError::NotInitialized { .. }
        | RotationError::Config(_)
        | RotationError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
