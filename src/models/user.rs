//! User model and operations.
//!
//! User profiles have no fixed schema in this API, so [`User`] is a fully
//! dynamic field bag. Directory, reputation, and portfolio reads return the
//! raw `result` structure untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::FreelancerClient;
use crate::envelope::Envelope;
use crate::error::{FreelancerError, Result};

const USERS_API: &str = "api/users/0.1/";

/// A user profile.
///
/// Fully dynamic: every response field lives in `fields`, with typed
/// conveniences for the common ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl User {
    /// The user ID, when present.
    pub fn id(&self) -> Option<u64> {
        self.fields.get("id").and_then(Value::as_u64)
    }

    /// The username, when present.
    pub fn username(&self) -> Option<&str> {
        self.fields.get("username").and_then(Value::as_str)
    }

    /// Look up an arbitrary response field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Caller query with the forced `compact=true` flag merged in.
#[derive(Serialize)]
struct CompactQuery<'a> {
    compact: bool,
    #[serde(flatten)]
    query: &'a Map<String, Value>,
}

/// Get the profile of the authenticated user.
///
/// A `compact=true` flag is always merged into the caller-supplied query.
#[tracing::instrument(skip(client, query))]
pub async fn get_self(client: &FreelancerClient, query: &Map<String, Value>) -> Result<User> {
    let path = format!("{USERS_API}self/");
    let params = CompactQuery {
        compact: true,
        query,
    };

    let result = client
        .get_with_query(&path, &params)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::UserNotFound)?;

    super::from_result(result).map_err(FreelancerError::UserNotFound)
}

/// Get a user profile by ID.
///
/// A `compact=true` flag is always merged into the caller-supplied query.
#[tracing::instrument(skip(client, query))]
pub async fn get_user_by_id(
    client: &FreelancerClient,
    user_id: u64,
    query: &Map<String, Value>,
) -> Result<User> {
    let path = format!("{USERS_API}users/{user_id}");
    let params = CompactQuery {
        compact: true,
        query,
    };

    let result = client
        .get_with_query(&path, &params)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::UserNotFound)?;

    super::from_result(result).map_err(FreelancerError::UserNotFound)
}

/// List users matching the given filters; raw `result` passthrough.
#[tracing::instrument(skip(client, query))]
pub async fn get_users<Q: Serialize + ?Sized>(
    client: &FreelancerClient,
    query: &Q,
) -> Result<Value> {
    let path = format!("{USERS_API}users/");
    client
        .get_with_query(&path, query)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::UsersNotFound)
}

/// Search the freelancer directory; raw `result` passthrough.
#[tracing::instrument(skip(client, query))]
pub async fn search_freelancers<Q: Serialize + ?Sized>(
    client: &FreelancerClient,
    query: &Q,
) -> Result<Value> {
    let path = format!("{USERS_API}users/directory/");
    client
        .get_with_query(&path, query)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::UsersNotFound)
}

/// Get reputations for the given users; raw `result` passthrough.
#[tracing::instrument(skip(client, query))]
pub async fn get_reputations<Q: Serialize + ?Sized>(
    client: &FreelancerClient,
    query: &Q,
) -> Result<Value> {
    let path = format!("{USERS_API}reputations/");
    client
        .get_with_query(&path, query)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::UsersNotFound)
}

/// Get portfolios for the given users; raw `result` passthrough.
#[tracing::instrument(skip(client, query))]
pub async fn get_portfolios<Q: Serialize + ?Sized>(
    client: &FreelancerClient,
    query: &Q,
) -> Result<Value> {
    let path = format!("{USERS_API}portfolios/");
    client
        .get_with_query(&path, query)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::UsersNotFound)
}
