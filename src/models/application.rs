//! Application model and trait implementations.
//!
//! Applications are the downstream *arr services (Sonarr, Radarr, ...) that
//! Prowlarr pushes its indexers to.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use tokio_util::sync::CancellationToken;

use crate::client::ProwlarrClient;
use crate::error::Result;
use crate::models::field::{self, Field};
use crate::traits::{resource, Create, Delete, Get, List, Resource, Update};

/// An application connected to Prowlarr.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Server-assigned id, `0` until created.
    #[serde(default)]
    pub id: i32,

    #[serde(default)]
    pub name: Option<String>,

    /// Application kind (e.g. "Sonarr", "Radarr").
    #[serde(default)]
    pub implementation: Option<String>,

    #[serde(default)]
    pub config_contract: Option<String>,

    /// How indexers are synced: "disabled", "addOnly" or "fullSync".
    #[serde(default)]
    pub sync_level: Option<String>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tags: Vec<i32>,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Application {
    /// Look up a configuration field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        field::find(&self.fields, name)
    }
}

impl Resource for Application {
    const NAME: &'static str = "Application";
    const PATH: &'static str = "api/v1/applications";

    fn id(&self) -> i32 {
        self.id
    }
}

#[async_trait]
impl Get for Application {
    type Id = i32;

    #[tracing::instrument(skip(client, cancel))]
    async fn get_cancellable(
        client: &ProwlarrClient,
        id: i32,
        cancel: &CancellationToken,
    ) -> Result<Self> {
        resource::get(client, id, cancel).await
    }
}

#[async_trait]
impl List for Application {
    #[tracing::instrument(skip(client, cancel))]
    async fn list_cancellable(client: &ProwlarrClient, cancel: &CancellationToken) -> Result<Vec<Self>> {
        resource::list(client, cancel).await
    }
}

#[async_trait]
impl Create for Application {
    #[tracing::instrument(skip(client, cancel), fields(name = ?new.name))]
    async fn create_cancellable(
        client: &ProwlarrClient,
        new: &Self,
        cancel: &CancellationToken,
    ) -> Result<Self> {
        resource::create(client, new, cancel).await
    }
}

#[async_trait]
impl Update for Application {
    type Id = i32;

    #[tracing::instrument(skip(client, changed, cancel))]
    async fn update_cancellable(
        client: &ProwlarrClient,
        id: i32,
        changed: &Self,
        cancel: &CancellationToken,
    ) -> Result<Self> {
        resource::update(client, id, changed, cancel).await
    }
}

#[async_trait]
impl Delete for Application {
    type Id = i32;

    #[tracing::instrument(skip(client, cancel))]
    async fn delete_cancellable(client: &ProwlarrClient, id: i32, cancel: &CancellationToken) -> Result<()> {
        resource::delete::<Self>(client, id, cancel).await
    }
}
