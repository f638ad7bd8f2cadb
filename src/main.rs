use std::io;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use citytour::{Screen, ScreenView, TourConfig, TourShell, catalog, telemetry, web};

/// Browse Boston's museums, parks and restaurants from the terminal
#[derive(Parser, Debug)]
#[command(name = "citytour", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive tour (default)
    Tour,
    /// Serve the catalog as a JSON API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Show the category overview
    Categories,
    /// List the locations of a category
    List { category: String },
    /// Show one location
    Show { category: String, id: u32 },
}

fn print_screen(screen: Screen) {
    print!("{}", ScreenView::render(&screen, catalog()));
}

fn parse_category(name: &str) -> Result<citytour::Category> {
    match citytour::Category::from_input(name) {
        Some(category) => Ok(category),
        None => bail!("Unknown category '{name}'. Choose Museums, Parks or Restaurants."),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = TourConfig::load_from_path(cli.config)?;
    telemetry::init(&config.logging, cli.verbose)?;
    debug!(?config, "Configuration loaded");

    match cli.command.unwrap_or(Command::Tour) {
        Command::Tour => {
            let stdin = io::stdin();
            let mut shell = TourShell::new(catalog(), config.shell, stdin.lock(), io::stdout());
            let end = shell.run()?;
            debug!(?end, "Session finished");
        }
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;
            web::run(&config.bind_address()).await?;
        }
        Command::Categories => print_screen(Screen::Categories),
        Command::List { category } => print_screen(Screen::LocationList {
            category: parse_category(&category)?,
        }),
        Command::Show { category, id } => print_screen(Screen::LocationDetail {
            category: parse_category(&category)?,
            location_id: id,
        }),
    }

    Ok(())
}
