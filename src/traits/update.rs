//! Update trait for modifying entities.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::client::ProwlarrClient;
use crate::error::Result;

/// Replace an existing entity.
///
/// The body is the full entity; its ID must equal the targeted ID.
///
/// # Example
///
/// ```ignore
/// use prowlapi::{ProwlarrClient, Indexer, Get, Update};
///
/// let client = ProwlarrClient::from_env()?;
/// let mut indexer = Indexer::get(&client, 42).await?;
/// indexer.priority = 5;
/// let updated = Indexer::update(&client, 42, &indexer).await?;
/// ```
#[async_trait]
pub trait Update: Sized + Send + Sync {
    /// The ID type for this entity.
    type Id: Send + 'static;

    /// Update the entity, abandoning the request if `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive ID or an ID mismatch
    /// without sending a request, or an API error if the request fails.
    async fn update_cancellable(
        client: &ProwlarrClient,
        id: Self::Id,
        changed: &Self,
        cancel: &CancellationToken,
    ) -> Result<Self>;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// See [`Update::update_cancellable`].
    async fn update(client: &ProwlarrClient, id: Self::Id, changed: &Self) -> Result<Self> {
        Self::update_cancellable(client, id, changed, &CancellationToken::new()).await
    }
}
