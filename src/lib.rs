//! Core library surface for the song catalog CLI.
//!
//! The binary only parses arguments and wires these pieces together, so the
//! catalog, store format and menu can be exercised directly from tests.
pub mod catalog;
pub mod cli;
pub mod error;
pub mod models;
pub mod opener;
pub mod store;
pub mod ui;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use models::{Genre, Song};
pub use opener::{FileOpener, SystemOpener};
pub use store::{default_store_path, ensure_store_dir};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
