//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the prowlapi binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Prowlarr API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "prowlapi", about = "Prowlarr API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log request details to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Base URL of the Prowlarr instance.
    #[arg(long, global = true, env = "PROWLARR_URL")]
    pub url: Option<String>,

    /// API key sent as X-Api-Key.
    #[arg(long, global = true, env = "PROWLARR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds; 0 disables it.
    #[arg(long, global = true, env = "PROWLARR_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the server's system status.
    Status,

    /// List all entities of a type.
    List {
        /// The type of entity to list.
        entity: Entity,
    },

    /// Get a single entity by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The entity ID.
        id: i32,
    },

    /// Create an entity from a JSON file.
    Add {
        /// The type of entity to create.
        entity: Entity,

        /// JSON file holding the entity; `-` reads stdin.
        #[arg(long, short)]
        file: PathBuf,
    },

    /// Replace an entity with the contents of a JSON file.
    Update {
        /// The type of entity to update.
        entity: Entity,

        /// The ID of the entity to update.
        id: i32,

        /// JSON file holding the entity; `-` reads stdin.
        #[arg(long, short)]
        file: PathBuf,
    },

    /// Delete an entity.
    Delete {
        /// The type of entity to delete.
        entity: Entity,

        /// The ID of the entity to delete.
        id: i32,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A search indexer.
    #[value(alias = "indexers")]
    Indexer,
    /// A downstream application synced from Prowlarr.
    #[value(alias = "applications", alias = "app", alias = "apps")]
    Application,
}
