//! CLI argument parsing tests.

use std::path::PathBuf;

use clap::Parser;
use prowlapi::cli::{Cli, Command, Entity};

#[test]
fn test_cli_parses_status_subcommand() {
    let cli = Cli::parse_from(["prowlapi", "--api-key", "k", "status"]);

    assert!(!cli.json);
    assert!(matches!(cli.command, Command::Status));
    assert_eq!(cli.api_key.as_deref(), Some("k"));
}

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["prowlapi", "get", "indexer", "42"]);

    match cli.command {
        Command::Get { entity, id } => {
            assert_eq!(entity, Entity::Indexer);
            assert_eq!(id, 42);
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_parses_list_with_plural_alias() {
    let cli = Cli::parse_from(["prowlapi", "list", "applications", "--json"]);

    assert!(cli.json);
    match cli.command {
        Command::List { entity } => assert_eq!(entity, Entity::Application),
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_cli_parses_add_subcommand() {
    let cli = Cli::parse_from(["prowlapi", "add", "indexer", "--file", "nzbgeek.json"]);

    match cli.command {
        Command::Add { entity, file } => {
            assert_eq!(entity, Entity::Indexer);
            assert_eq!(file, PathBuf::from("nzbgeek.json"));
        }
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn test_cli_parses_update_subcommand() {
    let cli = Cli::parse_from(["prowlapi", "update", "app", "3", "-f", "-"]);

    match cli.command {
        Command::Update { entity, id, file } => {
            assert_eq!(entity, Entity::Application);
            assert_eq!(id, 3);
            assert_eq!(file, PathBuf::from("-"));
        }
        _ => panic!("Expected Update command"),
    }
}

#[test]
fn test_cli_parses_delete_with_global_flags() {
    let cli = Cli::parse_from([
        "prowlapi",
        "delete",
        "indexers",
        "7",
        "--url",
        "http://prowlarr:9696",
        "--timeout",
        "0",
        "-v",
    ]);

    assert!(cli.verbose);
    assert_eq!(cli.url.as_deref(), Some("http://prowlarr:9696"));
    assert_eq!(cli.timeout, Some(0));
    match cli.command {
        Command::Delete { entity, id } => {
            assert_eq!(entity, Entity::Indexer);
            assert_eq!(id, 7);
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn test_cli_rejects_non_numeric_id() {
    let result = Cli::try_parse_from(["prowlapi", "get", "indexer", "abc"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_unknown_entity() {
    let result = Cli::try_parse_from(["prowlapi", "list", "movies"]);
    assert!(result.is_err());
}
