//! Endpoint handlers for the mock Freelancer API server.
//!
//! Every handler answers in the API's envelope shape:
//! `{"status": "success", "result": ...}` on success, and
//! `{"status": "error", "message": ..., "error_code": ..., "request_id": ...}`
//! on failure.

mod bids;
mod contests;
mod messages;
mod projects;
mod users;

pub use bids::*;
pub use contests::*;
pub use messages::*;
pub use projects::*;
pub use users::*;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;

pub(crate) type SharedState = Arc<RwLock<MockState>>;

/// Success envelope with a `result` payload.
pub(crate) fn success<T: Serialize>(result: T) -> Response {
    (
        StatusCode::OK,
        Json(json!({"status": "success", "result": result})),
    )
        .into_response()
}

/// Success envelope with no payload (DELETE-style acknowledgement).
pub(crate) fn ack() -> Response {
    (StatusCode::OK, Json(json!({"status": "success"}))).into_response()
}

/// Error envelope with message, error code, and a fixed request id.
pub(crate) fn error(status: StatusCode, message: &str, error_code: &str) -> Response {
    (
        status,
        Json(json!({
            "status": "error",
            "message": message,
            "error_code": error_code,
            "request_id": "mock-request-id"
        })),
    )
        .into_response()
}
