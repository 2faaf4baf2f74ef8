//! Yijing CLI - composition root.
//!
//! Loads configuration, owns the catalog, and wires the library crates together:
//!
//! ```text
//! build: manuscript ── yijing_catalog::build ── CatalogStore::save ──> catalog.json
//! cast:  CoinToss::draw_six ── divine ── Reading::interpret(&catalog) ──> stdout
//! show:  CatalogStore::find ──> stdout
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); command output goes to stdout.

mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use yijing_config::YijingConfig;

#[derive(Parser)]
#[command(name = "yijing")]
#[command(about = "Three-coin divination over the 64-hexagram catalog")]
struct Cli {
    /// Config file (default: $YIJING_CONFIG or ~/.yijing/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a manuscript and persist the catalog
    Build {
        /// Manuscript file (default: [catalog] manuscript)
        manuscript: Option<PathBuf>,
        /// Output catalog JSON (default: [catalog] path or ~/.yijing/catalog.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Parse and report only; accepts partial manuscripts and writes nothing
        #[arg(long)]
        dry_run: bool,
    },
    /// Toss six lines and print the reading
    Cast {
        /// Fixed seed for a reproducible cast (default: [divination] seed)
        #[arg(long)]
        seed: Option<u64>,
        /// Catalog JSON to read
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print the divination result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show one hexagram by id, six-digit code, or name
    Show {
        query: String,
        /// Catalog JSON to read
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<YijingConfig> {
    let loaded = match path {
        Some(path) => YijingConfig::load_from(path),
        None => YijingConfig::load(),
    }
    .context("loading configuration")?;
    Ok(loaded.unwrap_or_default())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Build {
            manuscript,
            output,
            dry_run,
        } => commands::build(&config, manuscript, output, dry_run),
        Commands::Cast {
            seed,
            catalog,
            json,
        } => commands::cast(&config, seed, catalog, json),
        Commands::Show { query, catalog } => commands::show(&config, &query, catalog),
    }
}
