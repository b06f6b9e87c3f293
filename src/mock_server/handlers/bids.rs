//! Bid and milestone endpoint handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::{ack, error, success, SharedState};
use crate::{Bid, Milestone, MilestoneRequest};

/// Body accepted by the bid placement endpoint.
#[derive(Debug, Deserialize)]
pub struct PlaceBidBody {
    pub project_id: u64,
    pub bidder_id: u64,
    pub amount: f64,
    pub period: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub milestone_percentage: Option<f64>,
}

/// Query parameters for listing bids.
#[derive(Debug, Default, Deserialize)]
pub struct BidsQuery {
    pub project_id: Option<u64>,
}

/// Body accepted by the bid update endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateBidBody {
    pub amount: Option<f64>,
    pub period: Option<u64>,
    pub description: Option<String>,
}

/// Body accepted by the milestone creation endpoint.
#[derive(Debug, Deserialize)]
pub struct CreateMilestoneBody {
    pub project_id: u64,
    pub bidder_id: u64,
    pub amount: f64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body accepted by the milestone request endpoint.
#[derive(Debug, Deserialize)]
pub struct CreateMilestoneRequestBody {
    pub project_id: u64,
    pub bid_id: u64,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body accepted by the milestone action endpoint.
#[derive(Debug, Deserialize)]
pub struct MilestoneActionBody {
    pub action: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

/// POST /api/projects/0.1/bids/
pub async fn place_bid(
    State(state): State<SharedState>,
    Json(body): Json<PlaceBidBody>,
) -> Response {
    let mut state = state.write().await;

    if !state.projects.contains_key(&body.project_id) {
        return error(
            StatusCode::NOT_FOUND,
            "Project not found",
            "ExceptionCodes.NOT_FOUND",
        );
    }

    let id = state.allocate_id();
    let bid = Bid {
        id: Some(id),
        project_id: Some(body.project_id),
        bidder_id: Some(body.bidder_id),
        amount: Some(body.amount),
        period: Some(body.period),
        description: body.description,
        milestone_percentage: body.milestone_percentage,
        retracted: Some(false),
        ..Default::default()
    };

    state.bids.insert(id, bid.clone());
    success(bid)
}

/// GET /api/projects/0.1/bids/
pub async fn list_bids(
    State(state): State<SharedState>,
    Query(query): Query<BidsQuery>,
) -> Response {
    let state = state.read().await;
    let bids = state.list_bids(query.project_id);
    success(json!({"bids": bids}))
}

/// PUT /api/projects/0.1/bids/{id}
pub async fn update_bid(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateBidBody>,
) -> Response {
    let mut state = state.write().await;

    match state.bids.get_mut(&id) {
        Some(bid) => {
            if let Some(amount) = body.amount {
                bid.amount = Some(amount);
            }
            if let Some(period) = body.period {
                bid.period = Some(period);
            }
            if let Some(description) = body.description {
                bid.description = Some(description);
            }
            success(&*bid)
        }
        None => error(
            StatusCode::NOT_FOUND,
            "Bid not found",
            "ExceptionCodes.NOT_FOUND",
        ),
    }
}

/// DELETE /api/projects/0.1/bids/{id}
pub async fn retract_bid(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    let mut state = state.write().await;

    if state.retract_bid(id) {
        ack()
    } else {
        error(
            StatusCode::NOT_FOUND,
            "Bid not found",
            "ExceptionCodes.NOT_FOUND",
        )
    }
}

/// POST /api/projects/0.1/milestones/
pub async fn create_milestone(
    State(state): State<SharedState>,
    Json(body): Json<CreateMilestoneBody>,
) -> Response {
    let mut state = state.write().await;

    if !state.projects.contains_key(&body.project_id) {
        return error(
            StatusCode::NOT_FOUND,
            "Project not found",
            "ExceptionCodes.NOT_FOUND",
        );
    }

    let id = state.allocate_id();
    let milestone = Milestone {
        id: Some(id),
        project_id: Some(body.project_id),
        bidder_id: Some(body.bidder_id),
        amount: Some(body.amount),
        reason: body.reason,
        description: body.description,
        status: Some("frozen".to_string()),
        ..Default::default()
    };

    state.milestones.insert(id, milestone.clone());
    success(milestone)
}

/// POST /api/projects/0.1/milestone_requests/
pub async fn create_milestone_request(
    State(state): State<SharedState>,
    Json(body): Json<CreateMilestoneRequestBody>,
) -> Response {
    let mut state = state.write().await;
    let id = state.allocate_id();

    let request = MilestoneRequest {
        id: Some(id),
        project_id: Some(body.project_id),
        bid_id: Some(body.bid_id),
        amount: Some(body.amount),
        description: body.description,
        status: Some("pending".to_string()),
        ..Default::default()
    };

    success(request)
}

/// PUT /api/projects/0.1/milestones/{id}
pub async fn milestone_action(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(body): Json<MilestoneActionBody>,
) -> Response {
    let mut state = state.write().await;

    if body.action != "release" {
        return error(
            StatusCode::BAD_REQUEST,
            "Unsupported milestone action",
            "ExceptionCodes.UNKNOWN_ERROR",
        );
    }

    match state.milestones.get_mut(&id) {
        Some(milestone) => {
            milestone.status = Some("released".to_string());
            ack()
        }
        None => error(
            StatusCode::NOT_FOUND,
            "Milestone not found",
            "ExceptionCodes.NOT_FOUND",
        ),
    }
}
