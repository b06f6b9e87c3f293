//! Project and job endpoint handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{ack, error, success, SharedState};
use crate::mock_server::fixtures::Fixtures;
use crate::{Budget, Project};

/// Body accepted by the project creation endpoint.
#[derive(Debug, Deserialize)]
pub struct CreateProjectBody {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub currency: Option<Value>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub jobs: Option<Value>,
}

/// Query parameters for listing/searching projects.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    pub query: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Body accepted by the project update endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectBody {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// POST /api/projects/0.1/projects/
pub async fn create_project(
    State(state): State<SharedState>,
    Json(body): Json<CreateProjectBody>,
) -> Response {
    let mut state = state.write().await;
    let id = state.allocate_id();

    let project = Project {
        id: Some(id),
        owner_id: state.self_user_id.or(Some(1)),
        seo_url: Some(Fixtures::seo_url(&body.title, id)),
        title: Some(body.title),
        description: body.description,
        status: Some("active".to_string()),
        currency: body.currency,
        budget: body.budget,
        jobs: body.jobs,
        ..Default::default()
    };

    state.projects.insert(id, project.clone());
    success(project)
}

/// GET /api/projects/0.1/projects/
pub async fn list_projects(
    State(state): State<SharedState>,
    Query(query): Query<ProjectsQuery>,
) -> Response {
    let state = state.read().await;
    let projects = state.list_projects(query.query.as_deref());
    success(json!({"projects": projects, "total_count": projects.len()}))
}

/// GET /api/projects/0.1/projects/active/
pub async fn search_active_projects(
    State(state): State<SharedState>,
    Query(query): Query<ProjectsQuery>,
) -> Response {
    let state = state.read().await;

    let matches = state.list_projects(query.query.as_deref());
    let total = matches.len();
    let offset = query.offset.unwrap_or(0) as usize;
    let limit = query.limit.unwrap_or(10) as usize;

    let projects: Vec<&Project> = matches.into_iter().skip(offset).take(limit).collect();
    success(json!({"projects": projects, "total_count": total}))
}

/// GET /api/projects/0.1/projects/{id}
pub async fn get_project(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    let state = state.read().await;

    match state.get_project(id) {
        Some(project) => success(project),
        None => error(
            StatusCode::NOT_FOUND,
            "Project not found",
            "ExceptionCodes.NOT_FOUND",
        ),
    }
}

/// PUT /api/projects/0.1/projects/{id}
pub async fn update_project(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateProjectBody>,
) -> Response {
    let mut state = state.write().await;

    match state.update_project(id, body.title, body.description) {
        Some(project) => success(project),
        None => error(
            StatusCode::NOT_FOUND,
            "Project not found",
            "ExceptionCodes.NOT_FOUND",
        ),
    }
}

/// DELETE /api/projects/0.1/projects/{id}
pub async fn delete_project(State(state): State<SharedState>, Path(id): Path<u64>) -> Response {
    let mut state = state.write().await;

    if state.delete_project(id) {
        ack()
    } else {
        error(
            StatusCode::NOT_FOUND,
            "Project not found",
            "ExceptionCodes.NOT_FOUND",
        )
    }
}

/// GET /api/projects/0.1/jobs/
pub async fn list_jobs(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    success(&state.jobs)
}
