//! Binary entry point: resolve the store file, load the catalog, and run the
//! interactive menu until the user exits.
use std::io;

use anyhow::Context;
use clap::Parser;
use song_catalog::cli::Cli;
use song_catalog::{default_store_path, ensure_store_dir, run_app, App, Catalog, SystemOpener};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout belongs to the menu.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(filter)
        .init();

    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => default_store_path()?,
    };
    ensure_store_dir(&store_path)?;

    let catalog = match cli.seed {
        Some(seed) => Catalog::load_with_seed(&store_path, seed),
        None => Catalog::load(&store_path),
    }
    .context("failed to load song catalog")?;

    info!(store = %catalog.store_path().display(), songs = catalog.len(), "starting menu");
    let mut app = App::new(catalog, Box::new(SystemOpener));
    run_app(&mut app, cli.color_enabled())
}
