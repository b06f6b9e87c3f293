//! Mock Freelancer API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! Freelancer API for integration and end-to-end testing. Unlike wiremock
//! which mocks at the HTTP level per-test, this server maintains state
//! across requests, enabling realistic workflow testing (post a project,
//! bid on it, open a thread, message the bidder).
//!
//! # Example
//!
//! ```ignore
//! use freelancerapi::mock_server::MockServer;
//! use freelancerapi::{FreelancerClient, Get, Project};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = FreelancerClient::new("test-token", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = Project::get(&client, 100).await.unwrap();
//!     assert_eq!(project.title.as_deref(), Some("Build a website"));
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
