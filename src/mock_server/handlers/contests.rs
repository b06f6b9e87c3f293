//! Contest endpoint handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::{error, success, SharedState};
use crate::Contest;

/// Body accepted by the contest creation endpoint.
#[derive(Debug, Deserialize)]
pub struct CreateContestBody {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub contest_type: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub job_ids: Option<Vec<u64>>,
    #[serde(default)]
    pub currency_id: Option<u64>,
    pub prize: f64,
}

/// POST /api/contests/0.1/contests/
pub async fn create_contest(
    State(state): State<SharedState>,
    Json(body): Json<CreateContestBody>,
) -> Response {
    if body.prize <= 0.0 {
        return error(
            StatusCode::BAD_REQUEST,
            "Contest prize must be positive",
            "ExceptionCodes.UNKNOWN_ERROR",
        );
    }

    let mut state = state.write().await;
    let id = state.allocate_id();

    let contest = Contest {
        id: Some(id),
        owner_id: state.self_user_id.or(Some(1)),
        title: Some(body.title),
        description: body.description,
        contest_type: body.contest_type,
        duration: body.duration,
        jobs: body.job_ids.map(|ids| json!(ids)),
        currency: body.currency_id.map(|id| json!({"id": id})),
        prize: Some(body.prize),
        ..Default::default()
    };

    state.contests.insert(id, contest.clone());
    success(contest)
}
