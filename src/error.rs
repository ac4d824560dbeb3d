//! Error type shared by the store and catalog layers. Every variant is
//! recoverable at the menu; only the read failure is fatal, and only during
//! startup.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid genre.")]
    InvalidGenreSelection,

    #[error("Invalid choice.")]
    InvalidIndexSelection,

    #[error("No songs in the library.")]
    EmptyCatalog,

    #[error("Error saving songs to {}", path.display())]
    PersistenceWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading songs from {}", path.display())]
    PersistenceReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open {path}")]
    LaunchFailure {
        path: String,
        #[source]
        source: io::Error,
    },
}
