//! Create trait for posting new entities.

use async_trait::async_trait;

use crate::client::FreelancerClient;
use crate::error::Result;

/// Create a new entity on the remote API.
///
/// Implement this trait for entity types whose endpoints accept a POST
/// with a typed parameter set and answer with the created entity.
///
/// # Example
///
/// ```ignore
/// use freelancerapi::{FreelancerClient, Project, Create, ProjectCreateParams};
///
/// let client = FreelancerClient::from_env()?;
/// let project = Project::create(&client, ProjectCreateParams {
///     title: "Build a website".to_string(),
///     ..Default::default()
/// }).await?;
/// ```
#[async_trait]
pub trait Create: Sized {
    /// Parameters for the creation.
    type Params;

    /// Create the entity and return the server's copy of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the API rejects the creation or the request fails.
    async fn create(client: &FreelancerClient, params: Self::Params) -> Result<Self>;
}
