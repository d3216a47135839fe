//! Indexer model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use tokio_util::sync::CancellationToken;

use crate::client::ProwlarrClient;
use crate::error::Result;
use crate::models::field::{self, Field};
use crate::traits::{resource, Create, Delete, Get, List, Resource, Update};

/// Protocol spoken by an indexer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndexerProtocol {
    Usenet,
    Torrent,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for IndexerProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Unknown => "unknown",
            Self::Usenet => "usenet",
            Self::Torrent => "torrent",
        })
    }
}

/// An indexer configured in Prowlarr.
///
/// Returned by `GET api/v1/indexer` and sent to `POST`/`PUT`. A new indexer
/// has `id == 0`; the server assigns the real id.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indexer {
    /// Server-assigned id, `0` until created.
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub id: i32,

    /// User-facing name.
    #[serde(default)]
    pub name: Option<String>,

    /// Implementation backing this indexer (e.g. "Newznab", "Cardigann").
    #[serde(default)]
    pub implementation: Option<String>,

    /// Settings contract of the implementation (e.g. "NewznabSettings").
    #[serde(default)]
    pub config_contract: Option<String>,

    /// Whether the indexer is active.
    #[serde(default = "default_enable")]
    pub enable: bool,

    #[serde(default)]
    pub protocol: IndexerProtocol,

    /// Lower values are queried first.
    #[serde(default = "default_priority")]
    pub priority: i32,

    /// Tag ids assigned to this indexer.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub tags: Vec<i32>,

    /// Implementation-specific settings.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Priority Prowlarr gives new indexers.
pub const DEFAULT_PRIORITY: i32 = 25;

fn default_enable() -> bool {
    true
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

fn is_unassigned(id: &i32) -> bool {
    *id == 0
}

impl Default for Indexer {
    fn default() -> Self {
        Self {
            id: 0,
            name: None,
            implementation: None,
            config_contract: None,
            enable: default_enable(),
            protocol: IndexerProtocol::default(),
            priority: DEFAULT_PRIORITY,
            tags: Vec::new(),
            fields: Vec::new(),
        }
    }
}

impl Indexer {
    /// A new, not yet created indexer called `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Look up a configuration field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        field::find(&self.fields, name)
    }
}

impl Resource for Indexer {
    const NAME: &'static str = "Indexer";
    const PATH: &'static str = "api/v1/indexer";

    fn id(&self) -> i32 {
        self.id
    }
}

#[async_trait]
impl Get for Indexer {
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
impl List for Indexer {
    #[tracing::instrument(skip(client, cancel))]
    async fn list_cancellable(client: &ProwlarrClient, cancel: &CancellationToken) -> Result<Vec<Self>> {
        resource::list(client, cancel).await
    }
}

#[async_trait]
impl Create for Indexer {
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
impl Update for Indexer {
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
impl Delete for Indexer {
    type Id = i32;

    #[tracing::instrument(skip(client, cancel))]
    async fn delete_cancellable(client: &ProwlarrClient, id: i32, cancel: &CancellationToken) -> Result<()> {
        resource::delete::<Self>(client, id, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;
    use serde_json::json;

    #[test]
    fn test_indexer_deserialize_full() {
        let json = json!({
            "id": 12,
            "name": "NZBgeek",
            "implementation": "Newznab",
            "configContract": "NewznabSettings",
            "enable": false,
            "protocol": "usenet",
            "priority": 10,
            "tags": [1, 3],
            "fields": [
                {"name": "baseUrl", "value": "https://api.nzbgeek.info"},
                {"name": "apiKey", "value": null},
                {"name": "vipExpiration", "value": ""}
            ]
        });

        let indexer: Indexer = serde_json::from_value(json).unwrap();
        assert_eq!(indexer.id, 12);
        assert_eq!(indexer.name.as_deref(), Some("NZBgeek"));
        assert!(!indexer.enable);
        assert_eq!(indexer.protocol, IndexerProtocol::Usenet);
        assert_eq!(indexer.priority, 10);
        assert_eq!(indexer.tags, vec![1, 3]);
        assert_eq!(
            indexer.field("baseUrl").and_then(|f| f.value.as_str()),
            Some("https://api.nzbgeek.info")
        );
        assert!(indexer.field("apiKey").unwrap().value.is_absent());
        assert!(indexer.field("missing").is_none());
    }

    #[test]
    fn test_indexer_defaults_for_missing_fields() {
        let indexer: Indexer = serde_json::from_value(json!({"name": "X"})).unwrap();
        assert_eq!(indexer, Indexer::named("X"));
        assert!(indexer.enable);
        assert_eq!(indexer.priority, DEFAULT_PRIORITY);
        assert_eq!(indexer.protocol, IndexerProtocol::Unknown);
    }

    #[test]
    fn test_unknown_protocol_maps_to_unknown() {
        let indexer: Indexer =
            serde_json::from_value(json!({"id": 1, "protocol": "carrierPigeon"})).unwrap();
        assert_eq!(indexer.protocol, IndexerProtocol::Unknown);
    }

    #[test]
    fn test_new_indexer_omits_id() {
        let body = serde_json::to_value(Indexer::named("X")).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["name"], "X");
    }

    #[test]
    fn test_new_indexer_omits_absent_strings() {
        let body = serde_json::to_value(Indexer::named("X")).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "X",
                "enable": true,
                "protocol": "unknown",
                "priority": 25,
                "tags": [],
                "fields": []
            })
        );
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let indexer: Indexer =
            serde_json::from_value(json!({"id": 4, "name": "X", "tags": null, "fields": null}))
                .unwrap();
        assert!(indexer.tags.is_empty());
        assert!(indexer.fields.is_empty());
    }

    #[test]
    fn test_indexer_round_trip() {
        let samples = vec![
            Indexer::default(),
            Indexer::named("Minimal"),
            Indexer {
                id: 4,
                name: Some("1337x".to_string()),
                implementation: Some("Cardigann".to_string()),
                config_contract: Some("CardigannSettings".to_string()),
                enable: true,
                protocol: IndexerProtocol::Torrent,
                priority: 1,
                tags: vec![7],
                fields: vec![
                    Field::new("definitionFile", "1337x"),
                    Field::new("minimumSeeders", 3i64),
                    Field::new("flaresolverr", FieldValue::Absent),
                ],
            },
        ];

        for indexer in samples {
            let encoded = serde_json::to_string(&indexer).unwrap();
            let decoded: Indexer = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, indexer);
        }
    }
}
