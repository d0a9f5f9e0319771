//! Shelf CLI - a single-user, CLI-first book catalog
//!
//! This is the command-line interface for Shelf. It resolves configuration,
//! initializes logging, opens the catalog, and runs the interactive menu.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use shelf_core::logging::{default_log_level, init_logging};
use shelf_core::{CatalogStore, JsonFileCatalog, LoadOutcome, VERSION};

mod config;
mod input;
mod menu;

/// Shelf - a single-user CLI book catalog
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Path to the catalog file
    #[arg(short, long, env = "SHELF_CATALOG")]
    catalog: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, env = "SHELF_CONFIG")]
    config: Option<PathBuf>,

    /// Quiet mode (suppress the startup banner)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;

    let catalog_path = match cli.catalog {
        Some(path) => path,
        None => match config.catalog.path {
            Some(path) => PathBuf::from(path),
            None => config::default_catalog_path()?,
        },
    };

    let log_dir = match config.logging.dir {
        Some(dir) => PathBuf::from(dir),
        None => config::default_log_dir()?,
    };
    let level = config
        .logging
        .level
        .as_deref()
        .unwrap_or(default_log_level());

    // Logging failures are reported but never block catalog work.
    if let Err(err) = init_logging(level, &log_dir) {
        eprintln!("Warning: logging disabled: {}", err);
    }
    info!("event=app_start status=ok version={}", VERSION);

    let mut catalog = JsonFileCatalog::open(&catalog_path)?;
    if !cli.quiet {
        println!("Shelf v{}", VERSION);
        println!("Catalog: {}", catalog_path.display());
        match catalog.load_outcome() {
            LoadOutcome::Loaded { books } => println!("Loaded {} book(s).", books),
            LoadOutcome::Missing => println!("No catalog file yet; starting empty."),
            LoadOutcome::Corrupt => {
                println!("Catalog file could not be read; starting empty (see log).")
            }
        }
    }

    menu::run(&mut catalog)
}
