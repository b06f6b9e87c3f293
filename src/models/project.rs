//! Project model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::FreelancerClient;
use crate::envelope::Envelope;
use crate::error::{ApiFailure, FreelancerError, Result};
use crate::traits::{Create, Delete, Get, Update};

const PROJECTS_PATH: &str = "api/projects/0.1/projects/";
const ACTIVE_PROJECTS_PATH: &str = "api/projects/0.1/projects/active/";

/// A marketplace project.
///
/// Projects are posted by employers and collect bids from freelancers.
/// Every field the API returns that is not declared here lands in `extra`,
/// so the full response survives round-tripping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    /// The project ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// ID of the employer who posted the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// The project title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The project description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Project status (e.g. "active", "closed").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// SEO path segment for the project's public page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_url: Option<String>,

    /// Currency sub-object as returned by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Value>,

    /// Budget range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,

    /// Jobs/skills attached to the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Value>,

    /// When the project was submitted.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub submitdate: Option<DateTime<Utc>>,

    /// Full URL of the project page. Derived from the client's base URL and
    /// `seo_url` after creation; not itself an API field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Response fields outside the declared set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Budget range for a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Currency reference for creation payloads (`{"id": 1}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyRef {
    pub id: u64,
}

/// Parameters for creating a project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectCreateParams {
    pub title: String,
    pub description: String,
    pub currency: CurrencyRef,
    pub budget: Budget,
    /// Job/skill IDs for the project.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<u64>,
}

/// Parameters for updating a project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<u64>>,
}

/// Query parameters for searching active projects.
#[derive(Debug, Clone, Serialize)]
pub struct SearchProjectsQuery {
    /// Search term, e.g. "php development".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Maximum number of results to return.
    pub limit: u32,

    /// Result window offset.
    pub offset: u32,

    /// Additional filters, passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for SearchProjectsQuery {
    fn default() -> Self {
        Self {
            query: None,
            limit: 10,
            offset: 0,
            extra: Map::new(),
        }
    }
}

/// `result` shape for project list endpoints.
#[derive(Debug, Deserialize)]
struct ProjectListResult {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Extract one project from a `result` payload.
///
/// The get-by-id endpoint answers with either a bare project object or a
/// wrapper holding a `projects` array whose first element is the project.
fn project_from_result(result: Value) -> core::result::Result<Project, ApiFailure> {
    let value = match result {
        Value::Object(mut map) if map.contains_key("projects") => match map.remove("projects") {
            Some(Value::Array(mut items)) if !items.is_empty() => items.remove(0),
            _ => return Err(ApiFailure::new("project not present in response")),
        },
        other => other,
    };
    serde_json::from_value(value).map_err(ApiFailure::decode)
}

#[async_trait]
impl Create for Project {
    type Params = ProjectCreateParams;

    #[tracing::instrument(skip(client, params))]
    async fn create(client: &FreelancerClient, params: ProjectCreateParams) -> Result<Self> {
        let result = client
            .post_json(PROJECTS_PATH, &params)
            .await
            .and_then(Envelope::into_result)
            .map_err(FreelancerError::ProjectNotCreated)?;

        let mut project: Project =
            super::from_result(result).map_err(FreelancerError::ProjectNotCreated)?;

        // The API returns only the SEO path; the full page URL is derived
        // from the session's base URL.
        if let Some(seo_url) = &project.seo_url {
            let base = client.base_url().as_str().trim_end_matches('/');
            project.url = Some(format!("{base}/projects/{seo_url}"));
        }

        Ok(project)
    }
}

#[async_trait]
impl Get for Project {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &FreelancerClient, id: u64) -> Result<Self> {
        let path = format!("{PROJECTS_PATH}{id}");

        let result = client
            .get(&path)
            .await
            .and_then(Envelope::into_result)
            .map_err(FreelancerError::ProjectNotFound)?;

        project_from_result(result).map_err(FreelancerError::ProjectNotFound)
    }
}

#[async_trait]
impl Update for Project {
    type Id = u64;
    type Params = ProjectUpdateParams;

    #[tracing::instrument(skip(client, params))]
    async fn update(client: &FreelancerClient, id: u64, params: ProjectUpdateParams) -> Result<Self> {
        let path = format!("{PROJECTS_PATH}{id}");

        let result = client
            .put_json(&path, &params)
            .await
            .and_then(Envelope::into_result)
            .map_err(FreelancerError::ProjectNotUpdated)?;

        super::from_result(result).map_err(FreelancerError::ProjectNotUpdated)
    }
}

#[async_trait]
impl Delete for Project {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &FreelancerClient, id: u64) -> Result<bool> {
        let path = format!("{PROJECTS_PATH}{id}");

        client
            .delete(&path)
            .await
            .and_then(Envelope::into_ack)
            .map_err(FreelancerError::ProjectNotDeleted)?;

        Ok(true)
    }
}

/// List projects matching the given filters.
///
/// Filter parameters are passed through verbatim as query parameters; the
/// nested `result.projects` list is unwrapped into model instances.
#[tracing::instrument(skip(client, query))]
pub async fn get_projects<Q: Serialize + ?Sized>(
    client: &FreelancerClient,
    query: &Q,
) -> Result<Vec<Project>> {
    let result = client
        .get_with_query(PROJECTS_PATH, query)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::ProjectsNotFound)?;

    let list: ProjectListResult =
        super::from_result(result).map_err(FreelancerError::ProjectsNotFound)?;
    Ok(list.projects)
}

/// Search active projects.
///
/// Calls the fixed `projects/active/` path rather than the plain project
/// listing.
///
/// # Example
///
/// ```ignore
/// use freelancerapi::{search_projects, SearchProjectsQuery};
///
/// let projects = search_projects(&client, &SearchProjectsQuery {
///     query: Some("php development".to_string()),
///     limit: 10,
///     ..Default::default()
/// }).await?;
/// ```
#[tracing::instrument(skip(client, query))]
pub async fn search_projects(
    client: &FreelancerClient,
    query: &SearchProjectsQuery,
) -> Result<Vec<Project>> {
    let result = client
        .get_with_query(ACTIVE_PROJECTS_PATH, query)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::ProjectsNotFound)?;

    let list: ProjectListResult =
        super::from_result(result).map_err(FreelancerError::ProjectsNotFound)?;
    Ok(list.projects)
}
