//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Prowlarr API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Application, Indexer, SystemStatus};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// Indexers indexed by ID.
    pub indexers: HashMap<i32, Indexer>,

    /// Applications indexed by ID.
    pub applications: HashMap<i32, Application>,

    /// Served by `GET /api/v1/system/status`.
    pub status: SystemStatus,

    /// Optional API key. If set, requests must send it as `X-Api-Key`.
    pub required_token: Option<String>,

    next_id: i32,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            indexers: HashMap::new(),
            applications: HashMap::new(),
            status: SystemStatus::default(),
            required_token: None,
            next_id: 1,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add an indexer to the state, keeping its ID.
    pub fn with_indexer(mut self, indexer: Indexer) -> Self {
        self.reserve(indexer.id);
        self.indexers.insert(indexer.id, indexer);
        self
    }

    /// Add an application to the state, keeping its ID.
    pub fn with_application(mut self, application: Application) -> Self {
        self.reserve(application.id);
        self.applications.insert(application.id, application);
        self
    }

    /// Replace the system status.
    pub fn with_status(mut self, status: SystemStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the required API key.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Whether a request carrying `token` may proceed.
    pub fn is_authorized(&self, token: Option<&str>) -> bool {
        match self.required_token.as_deref() {
            Some(required) => token == Some(required),
            None => true,
        }
    }

    /// All indexers ordered by ID.
    pub fn list_indexers(&self) -> Vec<&Indexer> {
        let mut all: Vec<_> = self.indexers.values().collect();
        all.sort_by_key(|i| i.id);
        all
    }

    /// All applications ordered by ID.
    pub fn list_applications(&self) -> Vec<&Application> {
        let mut all: Vec<_> = self.applications.values().collect();
        all.sort_by_key(|a| a.id);
        all
    }

    /// Store a new indexer under a fresh ID and return it.
    pub fn create_indexer(&mut self, mut indexer: Indexer) -> &Indexer {
        let id = self.allocate_id();
        indexer.id = id;
        self.indexers.entry(id).or_insert(indexer)
    }

    /// Store a new application under a fresh ID and return it.
    pub fn create_application(&mut self, mut application: Application) -> &Application {
        let id = self.allocate_id();
        application.id = id;
        self.applications.entry(id).or_insert(application)
    }

    /// Replace the indexer with `id`, returning the stored version.
    pub fn update_indexer(&mut self, id: i32, mut indexer: Indexer) -> Option<&Indexer> {
        let slot = self.indexers.get_mut(&id)?;
        indexer.id = id;
        *slot = indexer;
        Some(slot)
    }

    /// Replace the application with `id`, returning the stored version.
    pub fn update_application(
        &mut self,
        id: i32,
        mut application: Application,
    ) -> Option<&Application> {
        let slot = self.applications.get_mut(&id)?;
        application.id = id;
        *slot = application;
        Some(slot)
    }

    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn reserve(&mut self, id: i32) {
        self.next_id = self.next_id.max(id + 1);
    }
}
