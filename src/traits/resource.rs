//! Generic CRUD bindings for REST resources.
//!
//! Every resource follows the same conventions:
//!
//! | verb | path | body | response |
//! |---|---|---|---|
//! | `GET` | `{PATH}` | - | array, `null` or nothing |
//! | `GET` | `{PATH}/{id}` | - | entity |
//! | `POST` | `{PATH}` | entity | entity |
//! | `PUT` | `{PATH}/{id}` | entity | entity |
//! | `DELETE` | `{PATH}/{id}` | - | nothing |

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::client::ProwlarrClient;
use crate::dispatch::Request;
use crate::error::{Result, ValidationError};

/// A server resource addressed by a positive integer ID.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Human-readable name used in validation errors.
    const NAME: &'static str;

    /// Collection path relative to the base URL.
    const PATH: &'static str;

    /// The ID carried in the body; `0` for an entity not yet created.
    fn id(&self) -> i32;

    /// Path of the entity with `id`.
    fn item_path(id: i32) -> String {
        format!("{}/{id}", Self::PATH)
    }
}

fn check_id<R: Resource>(id: i32) -> std::result::Result<(), ValidationError> {
    if id <= 0 {
        return Err(ValidationError::NonPositiveId {
            entity: R::NAME,
            id,
        });
    }
    Ok(())
}

pub(crate) async fn get<R: Resource>(
    client: &ProwlarrClient,
    id: i32,
    cancel: &CancellationToken,
) -> Result<R> {
    check_id::<R>(id)?;
    let request = Request::get(R::item_path(id));
    Ok(client.dispatcher().dispatch_value(&request, cancel).await?)
}

pub(crate) async fn list<R: Resource>(
    client: &ProwlarrClient,
    cancel: &CancellationToken,
) -> Result<Vec<R>> {
    let items: Option<Option<Vec<R>>> = client
        .dispatcher()
        .dispatch(&Request::get(R::PATH), cancel)
        .await?;
    Ok(items.flatten().unwrap_or_default())
}

pub(crate) async fn create<R: Resource>(
    client: &ProwlarrClient,
    new: &R,
    cancel: &CancellationToken,
) -> Result<R> {
    let request = Request::post(R::PATH, new);
    Ok(client.dispatcher().dispatch_value(&request, cancel).await?)
}

pub(crate) async fn update<R: Resource>(
    client: &ProwlarrClient,
    id: i32,
    changed: &R,
    cancel: &CancellationToken,
) -> Result<R> {
    check_id::<R>(id)?;
    if changed.id() != id {
        return Err(ValidationError::IdMismatch {
            entity: R::NAME,
            target: id,
            body: changed.id(),
        }
        .into());
    }
    let request = Request::put(R::item_path(id), changed);
    Ok(client.dispatcher().dispatch_value(&request, cancel).await?)
}

pub(crate) async fn delete<R: Resource>(
    client: &ProwlarrClient,
    id: i32,
    cancel: &CancellationToken,
) -> Result<()> {
    check_id::<R>(id)?;
    let request = Request::delete(R::item_path(id));
    Ok(client.dispatcher().dispatch_no_content(&request, cancel).await?)
}
