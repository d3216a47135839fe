//! Delete trait for removing entities.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::client::ProwlarrClient;
use crate::error::Result;

/// Remove an entity by ID.
#[async_trait]
pub trait Delete: Sized + Send {
    /// The ID type for this entity.
    type Id: Send + 'static;

    /// Delete the entity, abandoning the request if `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive ID without sending a
    /// request, or an API error if the request fails.
    async fn delete_cancellable(
        client: &ProwlarrClient,
        id: Self::Id,
        cancel: &CancellationToken,
    ) -> Result<()>;

    /// Delete the entity.
    ///
    /// # Errors
    ///
    /// See [`Delete::delete_cancellable`].
    async fn delete(client: &ProwlarrClient, id: Self::Id) -> Result<()> {
        Self::delete_cancellable(client, id, &CancellationToken::new()).await
    }
}
