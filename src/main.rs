// src/main.rs
// DOCUMENTATION: Console front end for the places client
// PURPOSE: Load config, wire the store, and show available and favourite places
//
// Usage:
//   places-sync                 show available places and favourites
//   places-sync add <place-id>  add a place from the catalog to favourites
//   places-sync remove <place-id>

use anyhow::{anyhow, bail, Context};
use places_sync::config::{self, Config};
use places_sync::{HttpPlacesTransport, Place, PlaceCollection, PlaceStore, RemoteSyncGateway};
use std::sync::Arc;

/// What the available-places screen renders
#[derive(Debug, Default)]
struct AvailablePlacesState {
    places: Option<Vec<Place>>,
    is_fetching: bool,
    error: String,
}

enum Command {
    Show,
    Add(String),
    Remove(String),
}

fn parse_command(mut args: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    let command = match args.next().as_deref() {
        None => Command::Show,
        Some("add") => Command::Add(args.next().context("add needs a place id")?),
        Some("remove") => Command::Remove(args.next().context("remove needs a place id")?),
        Some(other) => bail!("Unknown command: {} (expected add or remove)", other),
    };
    Ok(command)
}

fn render_available(state: &AvailablePlacesState) {
    if state.is_fetching {
        println!("Fetching available places...");
        return;
    }
    if !state.error.is_empty() {
        println!("{}", state.error);
        return;
    }
    match &state.places {
        Some(places) if !places.is_empty() => {
            println!("Available places:");
            for place in places {
                println!("  [{}] {}", place.id, place.title);
            }
        }
        _ => println!("No places available."),
    }
}

fn render_favourites(places: &PlaceCollection) {
    if places.is_empty() {
        println!("Select the places you would like to visit below.");
        return;
    }
    println!("I'd like to visit:");
    for place in places {
        println!("  [{}] {}", place.id, place.title);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let config = Config::from_env();

    // 2. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    config
        .validate()
        .map_err(|e| anyhow!("Configuration error: {}", e))?;

    log::info!("Starting places-sync client...");
    log::info!("Environment: {}", config.environment);
    log::info!("Places service: {}", config.places_api_url);

    let command = parse_command(std::env::args().skip(1))?;

    // 3. Wire transport, gateway and store
    let client = config::build_http_client(&config).context("Failed to build HTTP client")?;
    let transport = HttpPlacesTransport::new(client, &config.places_api_url)?;
    let store = Arc::new(PlaceStore::new(RemoteSyncGateway::new(Arc::new(transport))));

    // 4. Available places
    let mut available = AvailablePlacesState {
        is_fetching: true,
        ..Default::default()
    };
    render_available(&available);
    match store.load_available_places().await {
        Ok(places) => available.places = Some(places),
        Err(e) => available.error = e.to_string(),
    }
    available.is_fetching = false;
    render_available(&available);

    // 5. Favourites
    if let Err(e) = store.load_user_places().await {
        println!("{}", e);
    }

    match command {
        Command::Show => {}
        Command::Add(id) => {
            let place = available
                .places
                .iter()
                .flatten()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("Place {} is not in the available catalog", id))?;
            let title = place.title.clone();
            match store.add_place(place).await {
                Ok(()) => println!("Added {}", title),
                Err(e) => println!("{}", e),
            }
        }
        Command::Remove(id) => {
            // Unknown ids still go to the server; only the local list is unaffected
            let place = store
                .user_places()
                .get(&id)
                .cloned()
                .unwrap_or_else(|| Place::new(id.clone(), id.clone()));
            match store.remove_place(&place).await {
                Ok(()) => println!("Removed {}", place.title),
                Err(e) => println!("{}", e),
            }
        }
    }

    render_favourites(&store.user_places());
    Ok(())
}
