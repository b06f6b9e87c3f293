//! User endpoint handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::json;

use super::{error, success, SharedState};
use crate::User;

/// GET /api/users/0.1/self/
pub async fn get_self(State(state): State<SharedState>) -> Response {
    let state = state.read().await;

    let user = state
        .self_user_id
        .and_then(|id| state.users.get(&id));
    match user {
        Some(user) => success(user),
        None => error(
            StatusCode::NOT_FOUND,
            "User not found",
            "ExceptionCodes.NOT_FOUND",
        ),
    }
}

/// GET /api/users/0.1/users/{id}
pub async fn get_user(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    let state = state.read().await;

    match state.users.get(&id) {
        Some(user) => success(user),
        None => error(
            StatusCode::NOT_FOUND,
            "User not found",
            "ExceptionCodes.NOT_FOUND",
        ),
    }
}

/// GET /api/users/0.1/users/
pub async fn list_users(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    let users = sorted_users(&state.users);
    success(json!({"users": users}))
}

/// GET /api/users/0.1/users/directory/
pub async fn search_freelancers(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    let users: Vec<&User> = sorted_users(&state.users)
        .into_iter()
        .filter(|u| u.get("role").and_then(|r| r.as_str()) == Some("freelancer"))
        .collect();
    success(json!({"users": users}))
}

/// GET /api/users/0.1/reputations/
pub async fn get_reputations(State(state): State<SharedState>) -> Response {
    let state = state.read().await;

    // Keyed by user id, as the live endpoint answers.
    let reputations: serde_json::Map<String, serde_json::Value> = state
        .users
        .keys()
        .map(|id| {
            (
                id.to_string(),
                json!({"entire_history": {"overall": 4.9, "reviews": 12}}),
            )
        })
        .collect();
    success(reputations)
}

/// GET /api/users/0.1/portfolios/
pub async fn get_portfolios(State(state): State<SharedState>) -> Response {
    let state = state.read().await;

    let portfolios: serde_json::Map<String, serde_json::Value> = state
        .users
        .keys()
        .map(|id| (id.to_string(), json!([])))
        .collect();
    success(json!({"portfolios": portfolios}))
}

fn sorted_users(users: &std::collections::HashMap<u64, User>) -> Vec<&User> {
    let mut users: Vec<&User> = users.values().collect();
    users.sort_by_key(|u| u.id());
    users
}
