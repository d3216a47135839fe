//! Prowlarr API CLI binary.
//!
//! A command-line interface for interacting with the Prowlarr API.

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use prowlapi::cli::{Cli, Command, Entity};
use prowlapi::output::PrettyPrint;
use prowlapi::{
    get_system_status, Application, ClientConfig, Create, Delete, Get, Indexer, List,
    ProwlError, ProwlarrClient, Update,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tabled::{Table, Tabled};
use tokio::io::AsyncReadExt;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let client = match build_client(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, ProwlError::ConfigMissing(_)) {
                eprintln!("Hint: Set PROWLARR_API_KEY or pass --api-key");
            }
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> prowlapi::Result<ProwlarrClient> {
    let api_key = cli.api_key.clone().ok_or_else(|| {
        ProwlError::ConfigMissing("PROWLARR_API_KEY environment variable not set".to_string())
    })?;
    let base_url = cli
        .url
        .clone()
        .unwrap_or_else(|| prowlapi::config::DEFAULT_API_URL.to_string());

    let mut config = ClientConfig::new(base_url, api_key);
    if let Some(secs) = cli.timeout {
        config = config.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
    }
    ProwlarrClient::with_config(&config)
}

async fn run(client: &ProwlarrClient, cli: Cli) -> prowlapi::Result<()> {
    match cli.command {
        Command::Status => {
            let status = get_system_status(client).await?;
            output_single(&status, cli.json)
        }
        Command::List { entity } => handle_list(client, entity, cli.json).await,
        Command::Get { entity, id } => match entity {
            Entity::Indexer => output_single(&Indexer::get(client, id).await?, cli.json),
            Entity::Application => output_single(&Application::get(client, id).await?, cli.json),
        },
        Command::Add { entity, file } => match entity {
            Entity::Indexer => {
                let new: Indexer = read_entity(&file).await?;
                output_single(&Indexer::create(client, &new).await?, cli.json)
            }
            Entity::Application => {
                let new: Application = read_entity(&file).await?;
                output_single(&Application::create(client, &new).await?, cli.json)
            }
        },
        Command::Update { entity, id, file } => match entity {
            Entity::Indexer => {
                let changed: Indexer = read_entity(&file).await?;
                output_single(&Indexer::update(client, id, &changed).await?, cli.json)
            }
            Entity::Application => {
                let changed: Application = read_entity(&file).await?;
                output_single(&Application::update(client, id, &changed).await?, cli.json)
            }
        },
        Command::Delete { entity, id } => {
            match entity {
                Entity::Indexer => Indexer::delete(client, id).await?,
                Entity::Application => Application::delete(client, id).await?,
            }
            if !cli.json {
                println!("Deleted {entity:?} {id}");
            }
            Ok(())
        }
    }
}

async fn handle_list(client: &ProwlarrClient, entity: Entity, json: bool) -> prowlapi::Result<()> {
    match entity {
        Entity::Indexer => {
            let indexers = Indexer::list(client).await?;
            output_list(&indexers, json, IndexerRow::from)
        }
        Entity::Application => {
            let apps = Application::list(client).await?;
            output_list(&apps, json, ApplicationRow::from)
        }
    }
}

/// Read an entity from `path`, or from stdin when `path` is `-`.
async fn read_entity<T: DeserializeOwned>(path: &Path) -> prowlapi::Result<T> {
    let raw = if path == Path::new("-") {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        buf
    } else {
        tokio::fs::read(path).await?
    };
    Ok(serde_json::from_slice(&raw)?)
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> prowlapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_list<'a, T, R, F>(items: &'a [T], json: bool, to_row: F) -> prowlapi::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&'a T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} total", items.len());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct IndexerRow {
    id: i32,
    name: String,
    protocol: String,
    enabled: bool,
    priority: i32,
}

impl From<&Indexer> for IndexerRow {
    fn from(i: &Indexer) -> Self {
        Self {
            id: i.id,
            name: i.name.clone().unwrap_or_default(),
            protocol: i.protocol.to_string(),
            enabled: i.enable,
            priority: i.priority,
        }
    }
}

#[derive(Tabled)]
struct ApplicationRow {
    id: i32,
    name: String,
    implementation: String,
    #[tabled(rename = "sync level")]
    sync_level: String,
}

impl From<&Application> for ApplicationRow {
    fn from(a: &Application) -> Self {
        Self {
            id: a.id,
            name: a.name.clone().unwrap_or_default(),
            implementation: a.implementation.clone().unwrap_or_default(),
            sync_level: a.sync_level.clone().unwrap_or_default(),
        }
    }
}
