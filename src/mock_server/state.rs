//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Freelancer API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Bid, Contest, Job, Message, Milestone, Project, Thread, User};

/// Shared state for the mock server.
///
/// Holds all the mock data that the server will serve, wrapped in
/// `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Projects indexed by ID.
    pub projects: HashMap<u64, Project>,

    /// Bids indexed by ID.
    pub bids: HashMap<u64, Bid>,

    /// Milestones indexed by ID.
    pub milestones: HashMap<u64, Milestone>,

    /// Messaging threads indexed by ID.
    pub threads: HashMap<u64, Thread>,

    /// Messages indexed by ID.
    pub messages: HashMap<u64, Message>,

    /// Contests indexed by ID.
    pub contests: HashMap<u64, Contest>,

    /// Users indexed by ID.
    pub users: HashMap<u64, User>,

    /// Available jobs/skills.
    pub jobs: Vec<Job>,

    /// ID of the "authenticated" user served by the `self/` endpoint.
    pub self_user_id: Option<u64>,

    next_id: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self {
            next_id: 1000,
            ..Self::default()
        }
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Allocate an ID for an entity created through the API.
    pub fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Add a project to the state.
    pub fn with_project(mut self, project: Project) -> Self {
        if let Some(id) = project.id {
            self.projects.insert(id, project);
        }
        self
    }

    /// Add a bid to the state.
    pub fn with_bid(mut self, bid: Bid) -> Self {
        if let Some(id) = bid.id {
            self.bids.insert(id, bid);
        }
        self
    }

    /// Add a thread to the state.
    pub fn with_thread(mut self, thread: Thread) -> Self {
        if let Some(id) = thread.id {
            self.threads.insert(id, thread);
        }
        self
    }

    /// Add a message to the state.
    pub fn with_message(mut self, message: Message) -> Self {
        if let Some(id) = message.id {
            self.messages.insert(id, message);
        }
        self
    }

    /// Add a contest to the state.
    pub fn with_contest(mut self, contest: Contest) -> Self {
        if let Some(id) = contest.id {
            self.contests.insert(id, contest);
        }
        self
    }

    /// Add a user to the state. The first user added becomes the
    /// authenticated user unless one was set already.
    pub fn with_user(mut self, user: User) -> Self {
        if let Some(id) = user.id() {
            if self.self_user_id.is_none() {
                self.self_user_id = Some(id);
            }
            self.users.insert(id, user);
        }
        self
    }

    /// Add a job to the state.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Get a project by ID.
    pub fn get_project(&self, id: u64) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// List all projects, optionally filtered by a title substring.
    pub fn list_projects(&self, title_filter: Option<&str>) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self
            .projects
            .values()
            .filter(|p| {
                title_filter
                    .map(|t| {
                        p.title
                            .as_deref()
                            .map(|title| title.to_lowercase().contains(&t.to_lowercase()))
                            .unwrap_or(false)
                    })
                    .unwrap_or(true)
            })
            .collect();
        projects.sort_by_key(|p| p.id);
        projects
    }

    /// List bids, optionally restricted to one project. Retracted bids are
    /// excluded, as on the live listing endpoint.
    pub fn list_bids(&self, project_id: Option<u64>) -> Vec<&Bid> {
        let mut bids: Vec<&Bid> = self
            .bids
            .values()
            .filter(|b| b.retracted != Some(true))
            .filter(|b| project_id.map(|id| b.project_id == Some(id)).unwrap_or(true))
            .collect();
        bids.sort_by_key(|b| b.id);
        bids
    }

    /// List messages, optionally restricted to one thread.
    pub fn list_messages(&self, thread_id: Option<u64>) -> Vec<&Message> {
        let mut messages: Vec<&Message> = self
            .messages
            .values()
            .filter(|m| thread_id.map(|id| m.thread_id == Some(id)).unwrap_or(true))
            .collect();
        messages.sort_by_key(|m| m.id);
        messages
    }

    /// List all threads.
    pub fn list_threads(&self) -> Vec<&Thread> {
        let mut threads: Vec<&Thread> = self.threads.values().collect();
        threads.sort_by_key(|t| t.id);
        threads
    }

    /// Update a project, returning the updated version.
    pub fn update_project(
        &mut self,
        id: u64,
        title: Option<String>,
        description: Option<String>,
    ) -> Option<&Project> {
        let project = self.projects.get_mut(&id)?;
        if let Some(t) = title {
            project.title = Some(t);
        }
        if let Some(d) = description {
            project.description = Some(d);
        }
        self.projects.get(&id)
    }

    /// Delete a project. Returns whether it existed.
    pub fn delete_project(&mut self, id: u64) -> bool {
        self.projects.remove(&id).is_some()
    }

    /// Mark a bid as retracted. Returns whether it existed.
    pub fn retract_bid(&mut self, id: u64) -> bool {
        match self.bids.get_mut(&id) {
            Some(bid) => {
                bid.retracted = Some(true);
                true
            }
            None => false,
        }
    }
}
