//! Get trait for fetching single entities.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::client::ProwlarrClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```ignore
/// use prowlapi::{ProwlarrClient, Indexer, Get};
///
/// let client = ProwlarrClient::from_env()?;
/// let indexer = Indexer::get(&client, 42).await?;
/// ```
#[async_trait]
pub trait Get: Sized + Send {
    /// The ID type for this entity.
    type Id: Send + 'static;

    /// Fetch the entity by ID, abandoning the request if `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive ID without sending a
    /// request, or an API error if the request fails (404 for unknown IDs).
    async fn get_cancellable(
        client: &ProwlarrClient,
        id: Self::Id,
        cancel: &CancellationToken,
    ) -> Result<Self>;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// See [`Get::get_cancellable`].
    async fn get(client: &ProwlarrClient, id: Self::Id) -> Result<Self> {
        Self::get_cancellable(client, id, &CancellationToken::new()).await
    }
}
