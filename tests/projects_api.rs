//! Integration tests for project operations.
//!
//! Uses wiremock to mock the Freelancer API and test the full
//! request/envelope/model flow, including error envelope mapping.

use freelancerapi::{
    get_projects, search_projects, Budget, Create, CurrencyRef, Delete, FreelancerClient,
    FreelancerError, Get, Project, ProjectCreateParams, ProjectUpdateParams, SearchProjectsQuery,
    Update,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn success_envelope(result: serde_json::Value) -> serde_json::Value {
    json!({"status": "success", "result": result})
}

#[tokio::test]
async fn test_create_project_derives_url_from_seo_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/projects/0.1/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "id": 201,
            "title": "Build a website",
            "seo_url": "build-a-website-201"
        }))))
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let project = Project::create(
        &client,
        ProjectCreateParams {
            title: "Build a website".to_string(),
            description: "A simple site".to_string(),
            currency: CurrencyRef { id: 1 },
            budget: Budget {
                minimum: Some(255.0),
                ..Default::default()
            },
            jobs: vec![7],
        },
    )
    .await
    .unwrap();

    assert_eq!(project.id, Some(201));
    assert_eq!(
        project.url.as_deref(),
        Some(format!("{}/projects/build-a-website-201", mock_server.uri()).as_str())
    );
}

#[tokio::test]
async fn test_create_project_without_seo_url_leaves_url_unset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/projects/0.1/projects/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(json!({"id": 202, "title": "No SEO"}))),
        )
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let project = Project::create(&client, ProjectCreateParams::default())
        .await
        .unwrap();

    assert_eq!(project.url, None);
}

#[tokio::test]
async fn test_create_project_error_envelope_raises_not_created() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/projects/0.1/projects/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "error",
            "message": "Budget is too low",
            "error_code": "ProjectExceptionCodes.BUDGET_TOO_LOW",
            "request_id": "req-1"
        })))
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let err = Project::create(&client, ProjectCreateParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FreelancerError::ProjectNotCreated(_)));
    assert_eq!(err.message(), Some("Budget is too low"));
    assert_eq!(
        err.error_code(),
        Some("ProjectExceptionCodes.BUDGET_TOO_LOW")
    );
    assert_eq!(err.request_id(), Some("req-1"));
}

#[tokio::test]
async fn test_error_envelope_fallback_message() {
    let mock_server = MockServer::start().await;

    // Error envelope with every field absent
    Mock::given(method("POST"))
        .and(path("/api/projects/0.1/projects/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let err = Project::create(&client, ProjectCreateParams::default())
        .await
        .unwrap_err();

    assert_eq!(err.message(), Some("An unknown error has occurred."));
    assert_eq!(err.error_code(), None);
    assert_eq!(err.request_id(), None);
}

#[tokio::test]
async fn test_get_project_bare_object_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/0.1/projects/301"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(json!({"id": 301, "title": "Bare"}))),
        )
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let project = Project::get(&client, 301).await.unwrap();

    assert_eq!(project.id, Some(301));
    assert_eq!(project.title.as_deref(), Some("Bare"));
}

#[tokio::test]
async fn test_get_project_wrapped_array_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/0.1/projects/302"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "projects": [{"id": 302, "title": "Wrapped"}]
        }))))
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let project = Project::get(&client, 302).await.unwrap();

    assert_eq!(project.id, Some(302));
    assert_eq!(project.title.as_deref(), Some("Wrapped"));
}

#[tokio::test]
async fn test_search_projects_two_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/0.1/projects/active/"))
        .and(query_param("query", "php development"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "projects": [
                {"id": 1, "title": "PHP upgrade"},
                {"id": 2, "title": "PHP API work"}
            ],
            "total_count": 2
        }))))
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let projects = search_projects(
        &client,
        &SearchProjectsQuery {
            query: Some("php development".to_string()),
            limit: 10,
            offset: 0,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, Some(1));
    assert_eq!(projects[0].title.as_deref(), Some("PHP upgrade"));
    assert_eq!(projects[1].id, Some(2));
    assert_eq!(projects[1].title.as_deref(), Some("PHP API work"));
}

#[tokio::test]
async fn test_get_projects_passes_filters_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/0.1/projects/"))
        .and(query_param("owner_id", "42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(json!({"projects": []}))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let projects = get_projects(&client, &[("owner_id", "42")]).await.unwrap();

    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_update_project_returns_updated_model() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/projects/0.1/projects/303"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(json!({"id": 303, "title": "Renamed"}))),
        )
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let project = Project::update(
        &client,
        303,
        ProjectUpdateParams {
            title: Some("Renamed".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(project.title.as_deref(), Some("Renamed"));
}

#[tokio::test]
async fn test_delete_project_returns_true() {
    let mock_server = MockServer::start().await;

    // Delete responses carry no result payload
    Mock::given(method("DELETE"))
        .and(path("/api/projects/0.1/projects/304"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let deleted = Project::delete(&client, 304).await.unwrap();

    assert!(deleted);
}

#[tokio::test]
async fn test_auth_and_accept_headers_sent_on_every_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/0.1/projects/305"))
        .and(header("freelancer-oauth-v1", "secret-token"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success_envelope(json!({"id": 305}))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("secret-token", &mock_server.uri()).unwrap();
    let project = Project::get(&client, 305).await.unwrap();

    assert_eq!(project.id, Some(305));
}

#[tokio::test]
async fn test_non_json_body_raises_domain_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/0.1/projects/306"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let err = Project::get(&client, 306).await.unwrap_err();

    assert!(matches!(err, FreelancerError::ProjectNotFound(_)));
    assert_eq!(err.message(), Some("invalid API response"));
}
