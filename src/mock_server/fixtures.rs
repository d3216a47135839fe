//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{Application, Field, Indexer, IndexerProtocol, SystemStatus};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Indexer Fixtures
    // =========================================================================

    /// Create a minimal indexer with an ID and name only.
    pub fn minimal_indexer(id: i32, name: &str) -> Indexer {
        Indexer {
            id,
            ..Indexer::named(name)
        }
    }

    /// Create a Newznab usenet indexer.
    pub fn newznab_indexer(id: i32, name: &str, base_url: &str) -> Indexer {
        Indexer {
            implementation: Some("Newznab".to_string()),
            config_contract: Some("NewznabSettings".to_string()),
            protocol: IndexerProtocol::Usenet,
            fields: vec![
                Field::new("baseUrl", base_url),
                Field::new("apiPath", "/api"),
                Field::new("apiKey", Option::<String>::None),
            ],
            ..Self::minimal_indexer(id, name)
        }
    }

    /// Create a Cardigann torrent indexer.
    pub fn torrent_indexer(id: i32, name: &str, definition: &str) -> Indexer {
        Indexer {
            implementation: Some("Cardigann".to_string()),
            config_contract: Some("CardigannSettings".to_string()),
            protocol: IndexerProtocol::Torrent,
            fields: vec![
                Field::new("definitionFile", definition),
                Field::new("minimumSeeders", 1i64),
            ],
            ..Self::minimal_indexer(id, name)
        }
    }

    // =========================================================================
    // Application Fixtures
    // =========================================================================

    /// Create an application of `implementation` (e.g. "Sonarr").
    pub fn application(id: i32, implementation: &str, base_url: &str) -> Application {
        Application {
            id,
            name: Some(implementation.to_string()),
            implementation: Some(implementation.to_string()),
            config_contract: Some(format!("{implementation}Settings")),
            sync_level: Some("fullSync".to_string()),
            tags: vec![],
            fields: vec![
                Field::new("prowlarrUrl", "http://localhost:9696"),
                Field::new("baseUrl", base_url),
            ],
        }
    }

    // =========================================================================
    // System Fixtures
    // =========================================================================

    /// Status of a Linux Docker install.
    pub fn system_status(version: &str) -> SystemStatus {
        SystemStatus {
            app_name: Some("Prowlarr".to_string()),
            instance_name: Some("Prowlarr".to_string()),
            version: Some(version.to_string()),
            is_production: true,
            is_linux: true,
            is_docker: true,
            is_net_core: true,
            branch: Some("master".to_string()),
            authentication: Some("forms".to_string()),
            url_base: Some(String::new()),
            runtime_name: Some("netCore".to_string()),
            ..SystemStatus::default()
        }
    }

    /// Create the default scenario with interconnected data.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A pre-configured test scenario.
#[derive(Debug)]
pub struct DefaultScenario {
    pub indexers: Vec<Indexer>,
    pub applications: Vec<Application>,
    pub status: SystemStatus,
}

impl DefaultScenario {
    /// Create the default test scenario.
    ///
    /// Includes:
    /// - 2 indexers (one usenet, one torrent)
    /// - 1 application
    /// - a 1.x system status
    pub fn new() -> Self {
        Self {
            indexers: vec![
                Fixtures::newznab_indexer(1, "NZBgeek", "https://api.nzbgeek.info"),
                Fixtures::torrent_indexer(2, "1337x", "1337x"),
            ],
            applications: vec![Fixtures::application(1, "Sonarr", "http://sonarr:8989")],
            status: Fixtures::system_status("1.21.2.4649"),
        }
    }
}

impl Default for DefaultScenario {
    fn default() -> Self {
        Self::new()
    }
}
