//! Freelancer API client library.
//!
//! A thin, typed Rust client for the Freelancer.com REST API. Regular
//! operations (Get, Create, Update, Delete) are traits that entity types
//! implement; irregular operations (bid placement, form-encoded thread
//! creation, raw passthrough reads) are free functions next to their
//! models.
//!
//! Every operation performs a single HTTP round trip, checks the
//! `{status, result}` response envelope, and either returns a model or
//! fails with an operation-specific [`FreelancerError`] variant carrying
//! the API's message, error code, and request id. There is no retry,
//! rate limiting, pagination looping, or caching at any layer.
//!
//! # Quick Start
//!
//! ```no_run
//! use freelancerapi::{
//!     search_projects, place_bid, BidParams, FreelancerClient, Get, Project,
//!     SearchProjectsQuery,
//! };
//!
//! #[tokio::main]
//! async fn main() -> freelancerapi::Result<()> {
//!     // Create client from environment variables
//!     let client = FreelancerClient::from_env()?;
//!
//!     // Search active projects
//!     let projects = search_projects(&client, &SearchProjectsQuery {
//!         query: Some("php development".to_string()),
//!         limit: 10,
//!         ..Default::default()
//!     }).await?;
//!     println!("Found {} projects", projects.len());
//!
//!     // Fetch one project by ID
//!     let project = Project::get(&client, 12345).await?;
//!     println!("Project: {:?}", project.title);
//!
//!     // Place a bid on it
//!     let bid = place_bid(&client, 12345, &BidParams {
//!         bidder_id: 67890,
//!         amount: 100.0,
//!         period: 7,
//!         ..Default::default()
//!     }).await?;
//!     println!("Placed bid {:?}", bid.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error handling
//!
//! Each operation fails with its own [`FreelancerError`] variant (bid not
//! placed, project not created, ...). Transport and decode failures are
//! wrapped into the same variant with the cause chained, so callers catch
//! exactly one error kind per operation and read the API's diagnostics via
//! [`FreelancerError::message`], [`FreelancerError::error_code`], and
//! [`FreelancerError::request_id`].
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `FREELANCER_OAUTH_TOKEN` (required) - OAuth token, obtained out of band
//! - `FREELANCER_API_URL` (optional) - Base URL (defaults to
//!   `https://www.freelancer.com`)

mod client;
mod envelope;
mod error;
mod models;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::FreelancerClient;
pub use envelope::Envelope;
pub use error::{ApiFailure, FreelancerError, Result};

// Re-export traits
pub use traits::{Create, Delete, Get, Update};

// Re-export models
pub use models::{
    // Project types
    Budget,
    CurrencyRef,
    Project,
    ProjectCreateParams,
    ProjectUpdateParams,
    SearchProjectsQuery,
    // Bid types
    Bid,
    BidParams,
    BidUpdateParams,
    // Milestone types
    Milestone,
    MilestoneParams,
    MilestoneRequest,
    MilestoneRequestParams,
    // Job types
    Job,
    // Messaging types
    Attachment,
    CreateThreadParams,
    Message,
    SearchMessagesQuery,
    Thread,
    // Contest types
    Contest,
    ContestParams,
    // User types
    User,
};

// Re-export operation functions
pub use models::{get_jobs, get_projects, search_projects};
pub use models::{get_bids, place_bid, retract_bid, update_bid};
pub use models::{create_milestone, create_milestone_request, release_milestone};
pub use models::{create_thread, get_threads};
pub use models::{get_messages, post_attachment, post_message, search_messages};
pub use models::{get_portfolios, get_reputations, get_self, get_user_by_id, get_users, search_freelancers};
