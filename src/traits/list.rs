//! List trait for fetching collections of entities.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::client::ProwlarrClient;
use crate::error::Result;

/// List every entity of a type.
///
/// The service omits the array entirely (`null` or an empty body) when there
/// is nothing to list; implementations return an empty `Vec` in that case.
///
/// # Example
///
/// ```ignore
/// use prowlapi::{ProwlarrClient, Indexer, List};
///
/// let client = ProwlarrClient::from_env()?;
/// for indexer in Indexer::list(&client).await? {
///     println!("{:?}", indexer.name);
/// }
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// List entities, abandoning the request if `cancel` fires.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list_cancellable(client: &ProwlarrClient, cancel: &CancellationToken) -> Result<Vec<Self>>;

    /// List entities.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(client: &ProwlarrClient) -> Result<Vec<Self>> {
        Self::list_cancellable(client, &CancellationToken::new()).await
    }
}
