//! Create trait for adding entities.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::client::ProwlarrClient;
use crate::error::Result;

/// Add a new entity and return it as stored by the server, including its
/// assigned ID.
#[async_trait]
pub trait Create: Sized + Send + Sync {
    /// Create the entity, abandoning the request if `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the entity.
    async fn create_cancellable(
        client: &ProwlarrClient,
        new: &Self,
        cancel: &CancellationToken,
    ) -> Result<Self>;

    /// Create the entity.
    ///
    /// # Errors
    ///
    /// See [`Create::create_cancellable`].
    async fn create(client: &ProwlarrClient, new: &Self) -> Result<Self> {
        Self::create_cancellable(client, new, &CancellationToken::new()).await
    }
}
