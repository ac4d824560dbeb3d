use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".song-catalog";
/// Store file name inside the application data directory.
const STORE_FILE_NAME: &str = "songs.txt";

/// Resolve the default store file inside the user's home.
pub fn default_store_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs
        .home_dir()
        .join(DATA_DIR_NAME)
        .join(STORE_FILE_NAME))
}

/// Make sure the directory holding the store file exists so the first save
/// after startup has somewhere to land.
pub fn ensure_store_dir(store_path: &Path) -> Result<()> {
    match store_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {}", parent.display())),
        _ => Ok(()),
    }
}
