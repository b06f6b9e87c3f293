//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::FreelancerClient;
use crate::error::Result;

/// Update an existing entity.
///
/// Implement this trait for entity types that can be modified
/// after creation.
///
/// # Example
///
/// ```ignore
/// use freelancerapi::{FreelancerClient, Project, Update, ProjectUpdateParams};
///
/// let client = FreelancerClient::from_env()?;
/// let updated = Project::update(
///     &client,
///     12345,
///     ProjectUpdateParams {
///         title: Some("New Title".to_string()),
///         ..Default::default()
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id;

    /// Parameters for the update.
    type Params;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(client: &FreelancerClient, id: Self::Id, params: Self::Params) -> Result<Self>;
}
