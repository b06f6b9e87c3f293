//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use serde_json::json;

use crate::{Bid, Budget, Contest, Job, Message, Project, Thread, User};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Project Fixtures
    // =========================================================================

    /// Create an open project with a title and derived SEO path.
    pub fn open_project(id: u64, title: &str) -> Project {
        Project {
            id: Some(id),
            owner_id: Some(1),
            title: Some(title.to_string()),
            description: Some(format!("{title} - description")),
            status: Some("active".to_string()),
            seo_url: Some(Self::seo_url(title, id)),
            currency: Some(json!({"id": 1, "code": "USD"})),
            budget: Some(Budget {
                minimum: Some(250.0),
                maximum: Some(750.0),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Derive an SEO path segment the way the live site does.
    pub fn seo_url(title: &str, id: u64) -> String {
        let slug: String = title
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        format!("{slug}-{id}")
    }

    // =========================================================================
    // Bid Fixtures
    // =========================================================================

    /// Create a bid on a project.
    pub fn bid(id: u64, project_id: u64, bidder_id: u64, amount: f64) -> Bid {
        Bid {
            id: Some(id),
            project_id: Some(project_id),
            bidder_id: Some(bidder_id),
            amount: Some(amount),
            period: Some(7),
            retracted: Some(false),
            ..Default::default()
        }
    }

    // =========================================================================
    // Messaging Fixtures
    // =========================================================================

    /// Create a private thread between members.
    pub fn private_thread(id: u64, owner: u64, members: &[u64]) -> Thread {
        Thread {
            id: Some(id),
            owner: Some(owner),
            members: Some(json!(members)),
            thread_type: Some("private".to_string()),
            ..Default::default()
        }
    }

    /// Create a message in a thread.
    pub fn message(id: u64, thread_id: u64, from_user_id: u64, text: &str) -> Message {
        Message {
            id: Some(id),
            thread_id: Some(thread_id),
            from_user_id: Some(from_user_id),
            message: Some(text.to_string()),
            ..Default::default()
        }
    }

    // =========================================================================
    // Contest / Job / User Fixtures
    // =========================================================================

    /// Create a contest.
    pub fn contest(id: u64, owner_id: u64, title: &str, prize: f64) -> Contest {
        Contest {
            id: Some(id),
            owner_id: Some(owner_id),
            title: Some(title.to_string()),
            contest_type: Some("freemium".to_string()),
            duration: Some(7),
            prize: Some(prize),
            ..Default::default()
        }
    }

    /// Create a job/skill.
    pub fn job(id: u64, name: &str) -> Job {
        Job {
            id: Some(id),
            name: Some(name.to_string()),
            seo_url: Some(name.to_lowercase()),
            ..Default::default()
        }
    }

    /// Create a user profile.
    pub fn user(id: u64, username: &str) -> User {
        let mut user = User::default();
        user.fields.insert("id".to_string(), json!(id));
        user.fields
            .insert("username".to_string(), json!(username));
        user.fields.insert("role".to_string(), json!("freelancer"));
        user
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related entities.
pub struct DefaultScenario {
    pub projects: Vec<Project>,
    pub bids: Vec<Bid>,
    pub threads: Vec<Thread>,
    pub messages: Vec<Message>,
    pub users: Vec<User>,
    pub jobs: Vec<Job>,
}

impl DefaultScenario {
    fn new() -> Self {
        let projects = vec![
            Fixtures::open_project(100, "Build a website"),
            Fixtures::open_project(101, "PHP development"),
        ];

        let bids = vec![
            Fixtures::bid(500, 100, 42, 100.0),
            Fixtures::bid(501, 100, 43, 150.0),
        ];

        let threads = vec![Fixtures::private_thread(700, 1, &[1, 42])];

        let messages = vec![
            Fixtures::message(900, 700, 1, "Hi, can you start this week?"),
            Fixtures::message(901, 700, 42, "Yes, tomorrow."),
        ];

        let users = vec![Fixtures::user(1, "employer"), Fixtures::user(42, "dev42")];

        let jobs = vec![Fixtures::job(3, "PHP"), Fixtures::job(7, "Rust")];

        Self {
            projects,
            bids,
            threads,
            messages,
            users,
            jobs,
        }
    }
}
