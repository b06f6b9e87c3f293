//! Messaging thread model and operations.
//!
//! Thread creation uses a form-encoded body (with repeated `members[]`
//! fields), unlike the JSON bodies used elsewhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::FreelancerClient;
use crate::envelope::Envelope;
use crate::error::{FreelancerError, Result};

pub(crate) const THREADS_PATH: &str = "api/messages/0.1/threads/";

/// A messaging thread between marketplace users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thread {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Nested thread sub-object; some endpoints wrap the thread fields in a
    /// `thread` key instead of returning them flat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread: Option<Value>,

    /// Context the thread is attached to (e.g. a project).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Member users; either bare IDs or user objects depending on the
    /// endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<u64>,

    /// Thread type, e.g. "private" or "group".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_type: Option<String>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_created: Option<DateTime<Utc>>,

    /// Response fields outside the declared set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for creating a thread.
#[derive(Debug, Clone, Default)]
pub struct CreateThreadParams {
    /// User IDs to include in the thread.
    pub members: Vec<u64>,
    /// Thread type, e.g. "private".
    pub thread_type: String,
    /// Context type the thread is attached to, e.g. "project".
    pub context_type: String,
    /// ID of the context object.
    pub context: u64,
    /// Optional first message.
    pub message: Option<String>,
}

impl CreateThreadParams {
    /// Flatten into form pairs; list members become repeated `members[]`
    /// fields.
    fn to_form(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for member in &self.members {
            pairs.push(("members[]".to_string(), member.to_string()));
        }
        pairs.push(("thread_type".to_string(), self.thread_type.clone()));
        pairs.push(("context_type".to_string(), self.context_type.clone()));
        pairs.push(("context".to_string(), self.context.to_string()));
        if let Some(message) = &self.message {
            pairs.push(("message".to_string(), message.clone()));
        }
        pairs
    }
}

/// Create a messaging thread.
#[tracing::instrument(skip(client, params))]
pub async fn create_thread(
    client: &FreelancerClient,
    params: &CreateThreadParams,
) -> Result<Thread> {
    let form = params.to_form();

    let result = client
        .post_form(THREADS_PATH, &form)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::ThreadNotCreated)?;

    super::from_result(result).map_err(FreelancerError::ThreadNotCreated)
}

/// List threads matching the given filters.
///
/// Returns the raw `result` structure: thread listings mix threads, users,
/// and unread counts in one response, so no model wrapping is applied.
#[tracing::instrument(skip(client, query))]
pub async fn get_threads<Q: Serialize + ?Sized>(
    client: &FreelancerClient,
    query: &Q,
) -> Result<Value> {
    client
        .get_with_query(THREADS_PATH, query)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::ThreadsNotFound)
}
