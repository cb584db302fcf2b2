//! routemap CLI
//!
//! Renders to-do item routes as map overlays and geocodes addresses.

#![allow(clippy::print_stdout)]

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::Locatable;
use infrastructure::{AppConfig, init_logging};

use crate::commands::App;

/// routemap CLI
#[derive(Parser)]
#[command(name = "routemap-cli")]
#[command(author, version, about = "Route overlays and geocoding for to-do items", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log filter)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "ROUTEMAP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render fixture routes and print the map view as JSON
    Render {
        /// JSON fixture file with to-do items
        #[arg(short, long)]
        fixtures: PathBuf,
    },

    /// Resolve an address to coordinates
    Geocode {
        /// Free-text address
        address: String,
    },

    /// Render fixture routes, click an overlay and print the navigation link
    Click {
        /// JSON fixture file with to-do items
        #[arg(short, long)]
        fixtures: PathBuf,

        /// Overlay index in render order
        index: usize,
    },

    /// Geocode an address and store it as a to-do item's location
    ///
    /// Example: routemap-cli update-location -f todo_items.json TODO:<uuid> "10 Downing Street, London, UK"
    UpdateLocation {
        /// JSON fixture file with to-do items
        #[arg(short, long)]
        fixtures: PathBuf,

        /// Item id (`TODO:<uuid>` or `<uuid>`)
        id: String,

        /// Free-text address
        address: String,
    },

    /// Print the effective configuration (secrets omitted)
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())?;
    if cli.verbose > 0 {
        config.logging.filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    config.validate().map_err(anyhow::Error::msg)?;
    init_logging(&config.logging)?;

    let app = App::new(config.clone());

    match cli.command {
        Commands::Render { fixtures } => {
            app.load_fixtures(&fixtures)?;
            println!("{}", serde_json::to_string_pretty(&app.render())?);
        },

        Commands::Geocode { address } => match app.geocode(&address).await? {
            Some(point) => println!("{point}"),
            None => println!("no location found"),
        },

        Commands::Click { fixtures, index } => {
            app.load_fixtures(&fixtures)?;
            println!("{}", app.click(index)?);
        },

        Commands::UpdateLocation {
            fixtures,
            id,
            address,
        } => {
            app.load_fixtures(&fixtures)?;
            let item = app.update_location(&id, &address).await?;
            if item.location().is_none() {
                println!("no location found");
            }
            println!("{}", serde_json::to_string_pretty(&item)?);
        },

        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        },
    }

    Ok(())
}
