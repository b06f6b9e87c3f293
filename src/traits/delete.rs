//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::FreelancerClient;
use crate::error::Result;

/// Delete an existing entity.
///
/// Delete endpoints return a bare success acknowledgement rather than a
/// payload, so implementations resolve to a boolean success flag.
///
/// # Example
///
/// ```ignore
/// use freelancerapi::{FreelancerClient, Project, Delete};
///
/// let client = FreelancerClient::from_env()?;
/// let deleted = Project::delete(&client, 12345).await?;
/// assert!(deleted);
/// ```
#[async_trait]
pub trait Delete: Sized {
    /// The ID type for this entity.
    type Id;

    /// Delete the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn delete(client: &FreelancerClient, id: Self::Id) -> Result<bool>;
}
