//! Mock Freelancer API server.
//!
//! Provides an axum-based HTTP server that simulates the Freelancer API.

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock Freelancer API server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation, including envelope shapes and
/// error responses.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL when creating a `FreelancerClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        let scenario = Fixtures::default_scenario();
        Self::state_from_scenario(scenario)
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for user in scenario.users {
            state = state.with_user(user);
        }
        for project in scenario.projects {
            state = state.with_project(project);
        }
        for bid in scenario.bids {
            state = state.with_bid(bid);
        }
        for thread in scenario.threads {
            state = state.with_thread(thread);
        }
        for message in scenario.messages {
            state = state.with_message(message);
        }
        for job in scenario.jobs {
            state = state.with_job(job);
        }

        state
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Project routes
            .route(
                "/api/projects/0.1/projects/",
                get(handlers::list_projects).post(handlers::create_project),
            )
            .route(
                "/api/projects/0.1/projects/active/",
                get(handlers::search_active_projects),
            )
            .route(
                "/api/projects/0.1/projects/:id",
                get(handlers::get_project)
                    .put(handlers::update_project)
                    .delete(handlers::delete_project),
            )
            .route("/api/projects/0.1/jobs/", get(handlers::list_jobs))
            // Bid routes
            .route(
                "/api/projects/0.1/bids/",
                get(handlers::list_bids).post(handlers::place_bid),
            )
            .route(
                "/api/projects/0.1/bids/:id",
                put(handlers::update_bid).delete(handlers::retract_bid),
            )
            // Milestone routes
            .route(
                "/api/projects/0.1/milestones/",
                post(handlers::create_milestone),
            )
            .route(
                "/api/projects/0.1/milestones/:id",
                put(handlers::milestone_action),
            )
            .route(
                "/api/projects/0.1/milestone_requests/",
                post(handlers::create_milestone_request),
            )
            // Messaging routes
            .route(
                "/api/messages/0.1/threads/",
                get(handlers::list_threads).post(handlers::create_thread),
            )
            .route(
                "/api/messages/0.1/threads/:id/messages/",
                post(handlers::post_thread_message),
            )
            .route("/api/messages/0.1/messages/", get(handlers::list_messages))
            .route(
                "/api/messages/0.1/messages/search/",
                get(handlers::search_messages),
            )
            // Contest routes
            .route(
                "/api/contests/0.1/contests/",
                post(handlers::create_contest),
            )
            // User routes
            .route("/api/users/0.1/self/", get(handlers::get_self))
            .route("/api/users/0.1/users/", get(handlers::list_users))
            .route("/api/users/0.1/users/:id", get(handlers::get_user))
            .route(
                "/api/users/0.1/users/directory/",
                get(handlers::search_freelancers),
            )
            .route("/api/users/0.1/reputations/", get(handlers::get_reputations))
            .route("/api/users/0.1/portfolios/", get(handlers::get_portfolios))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{search_projects, FreelancerClient, Get, Project, SearchProjectsQuery};

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        // Server should be accessible
        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_project_with_client() {
        let server = MockServer::start().await;
        let client = FreelancerClient::new("test-token", server.url()).unwrap();

        let project = Project::get(&client, 100)
            .await
            .expect("Failed to get project");

        assert_eq!(project.title.as_deref(), Some("Build a website"));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_search_projects_with_client() {
        let server = MockServer::start().await;
        let client = FreelancerClient::new("test-token", server.url()).unwrap();

        let projects = search_projects(&client, &SearchProjectsQuery::default())
            .await
            .expect("Failed to search projects");

        assert!(!projects.is_empty());

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = FreelancerClient::new("test-token", server.url()).unwrap();

        let result = Project::get(&client, 424242).await;

        assert!(result.is_err());

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_custom_state() {
        let state =
            MockState::new().with_project(Fixtures::open_project(55, "Custom fixture project"));

        let server = MockServer::with_state(state).await;
        let client = FreelancerClient::new("test-token", server.url()).unwrap();

        let project = Project::get(&client, 55)
            .await
            .expect("Failed to get project");

        assert_eq!(project.title.as_deref(), Some("Custom fixture project"));

        server.shutdown().await;
    }
}
