//! Persistence for the catalog: where the store file lives and how songs are
//! read from and written to it.

mod location;
mod songs;

pub use location::{default_store_path, ensure_store_dir};
pub use songs::{format_line, load_songs, parse_line, write_songs};
