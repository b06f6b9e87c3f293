//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::FreelancerClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier (typically a numeric ID).
///
/// # Example
///
/// ```ignore
/// use freelancerapi::{FreelancerClient, Project, Get};
///
/// let client = FreelancerClient::from_env()?;
/// let project = Project::get(&client, 12345).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &FreelancerClient, id: Self::Id) -> Result<Self>;
}
