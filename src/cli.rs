//! Command-line arguments.

use std::env;
use std::path::PathBuf;

use clap::Parser;

/// Personal music catalog with an interactive menu.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Store file to load and save (default: ~/.song-catalog/songs.txt)
    #[arg(long, env = "SONG_CATALOG_STORE")]
    pub store: Option<PathBuf>,

    /// Fixed seed for "Play Random Song" (default: current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print status messages without colour
    #[arg(long)]
    pub no_color: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Colour is on unless `--no-color` is passed or `NO_COLOR` is set.
    pub fn color_enabled(&self) -> bool {
        !self.no_color && env::var_os("NO_COLOR").is_none()
    }

    /// Default tracing directive when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "song_catalog=warn",
            1 => "song_catalog=info",
            2 => "song_catalog=debug",
            _ => "song_catalog=trace",
        }
    }
}
