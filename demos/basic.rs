//! Basic example demonstrating the Prowlarr API client.
//!
//! Run with:
//! ```
//! PROWLARR_API_KEY=your-key cargo run --example basic
//! ```

use prowlapi::{get_system_status, Application, Get, Indexer, List, ProwlarrClient};

#[tokio::main]
async fn main() -> prowlapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Prowlarr client...");
    let client = ProwlarrClient::from_env()?;
    if let Some(url) = client.base_url() {
        println!("Connected to: {url}");
    }

    let status = get_system_status(&client).await?;
    println!(
        "{} {} on {}",
        status.app_name.as_deref().unwrap_or("Prowlarr"),
        status.version.as_deref().unwrap_or("?"),
        status.platform()
    );

    // List indexers
    println!("\n--- Indexers ---");
    let indexers = Indexer::list(&client).await?;
    println!("Found {} indexers", indexers.len());

    for indexer in &indexers {
        let state = if indexer.enable { "enabled" } else { "disabled" };
        println!(
            "  - #{} {} ({}, priority {}, {})",
            indexer.id,
            indexer.name.as_deref().unwrap_or("unnamed"),
            indexer.protocol,
            indexer.priority,
            state
        );
    }

    // Fetch the first indexer and show its settings
    if let Some(first) = indexers.first() {
        println!("\n--- Indexer Details ---");
        let indexer = Indexer::get(&client, first.id).await?;
        for field in &indexer.fields {
            println!(
                "  {} = {}",
                field.name.as_deref().unwrap_or("?"),
                field.value.to_json()
            );
        }
    }

    // List connected applications
    println!("\n--- Applications ---");
    let apps = Application::list(&client).await?;
    for app in &apps {
        println!(
            "  - #{} {} [{}]",
            app.id,
            app.name.as_deref().unwrap_or("unnamed"),
            app.sync_level.as_deref().unwrap_or("-")
        );
    }

    println!("\nDone!");
    Ok(())
}
