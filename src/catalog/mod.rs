//! The in-memory catalog and every operation the menu can trigger on it.
//!
//! Songs are kept in insertion order and addressed by 1-based position, the
//! same numbers the listings print. Mutations rewrite the whole store file
//! immediately; if that write fails the in-memory list stays authoritative
//! until the next successful save.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::error::{CatalogError, Result};
use crate::models::{Genre, Song};
use crate::opener::FileOpener;
use crate::store;

/// Characters removed from file paths on input. Shells and file managers
/// often wrap copied paths in quotes.
const PATH_QUOTES: [char; 2] = ['"', '\''];

pub struct Catalog {
    songs: Vec<Song>,
    store_path: PathBuf,
    rng: StdRng,
}

impl Catalog {
    /// Load the catalog from `store_path`, seeding the random source from the
    /// current time.
    pub fn load(store_path: impl Into<PathBuf>) -> Result<Self> {
        Self::load_with_seed(store_path, time_seed())
    }

    /// Load the catalog with a fixed random seed.
    pub fn load_with_seed(store_path: impl Into<PathBuf>, seed: u64) -> Result<Self> {
        let store_path = store_path.into();
        let songs = store::load_songs(&store_path)?;
        info!(path = %store_path.display(), count = songs.len(), "catalog loaded");

        Ok(Self {
            songs,
            store_path,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Register a new song and save the catalog.
    ///
    /// `genre_choice` is the genre sub-menu number. An unknown choice leaves
    /// both the catalog and the store file untouched. When saving fails the
    /// song is still kept in memory and the write error is returned.
    pub fn add(
        &mut self,
        title: &str,
        artist: &str,
        path: &str,
        genre_choice: u8,
    ) -> Result<&Song> {
        let genre = Genre::from_choice(genre_choice).ok_or(CatalogError::InvalidGenreSelection)?;
        let song = Song::new(title, artist, strip_quotes(path), genre);
        debug!(title = %song.title, genre = genre.tag(), "adding song");

        self.songs.push(song);
        self.persist()?;

        let last = self.songs.len() - 1;
        Ok(&self.songs[last])
    }

    /// Every song with its 1-based position, in insertion order.
    pub fn list(&self) -> Result<impl Iterator<Item = (usize, &Song)> + '_> {
        if self.songs.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(self.numbered())
    }

    /// Songs of one genre. Positions are the songs' places in the full
    /// catalog, so they can be fed straight back into play or delete.
    pub fn list_by_genre(
        &self,
        genre_choice: u8,
    ) -> Result<impl Iterator<Item = (usize, &Song)> + '_> {
        let genre = Genre::from_choice(genre_choice).ok_or(CatalogError::InvalidGenreSelection)?;
        if self.songs.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(self
            .numbered()
            .filter(move |(_, song)| song.genre == genre))
    }

    /// Hand the song at `position` (1-based) to `opener`.
    pub fn play_by_index(&self, position: usize, opener: &dyn FileOpener) -> Result<&Song> {
        let index = self.checked_index(position)?;
        let song = &self.songs[index];
        launch(song, opener)?;
        Ok(song)
    }

    /// Pick a song uniformly at random and hand it to `opener`.
    pub fn play_random(&mut self, opener: &dyn FileOpener) -> Result<&Song> {
        if self.songs.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let index = self.rng.random_range(0..self.songs.len());
        let song = &self.songs[index];
        debug!(position = index + 1, "picked random song");
        launch(song, opener)?;
        Ok(song)
    }

    /// Remove the song at `position` (1-based), save, and return it.
    ///
    /// As with `add`, a failed save keeps the in-memory removal.
    pub fn delete_by_index(&mut self, position: usize) -> Result<Song> {
        let index = self.checked_index(position)?;
        let removed = self.songs.remove(index);
        debug!(title = %removed.title, position, "deleted song");

        self.persist()?;
        Ok(removed)
    }

    /// Rewrite the store file with the current catalog.
    pub fn persist(&self) -> Result<()> {
        store::write_songs(&self.store_path, &self.songs).inspect_err(|err| {
            warn!(path = %self.store_path.display(), error = %err, "failed to save catalog");
        })
    }

    fn numbered(&self) -> impl Iterator<Item = (usize, &Song)> + '_ {
        self.songs
            .iter()
            .enumerate()
            .map(|(index, song)| (index + 1, song))
    }

    fn checked_index(&self, position: usize) -> Result<usize> {
        if self.songs.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        if position == 0 || position > self.songs.len() {
            return Err(CatalogError::InvalidIndexSelection);
        }
        Ok(position - 1)
    }
}

fn launch(song: &Song, opener: &dyn FileOpener) -> Result<()> {
    info!(path = %song.path, "playing song");
    opener.open(&song.path).map_err(|source| {
        warn!(path = %song.path, error = %source, "failed to launch song");
        CatalogError::LaunchFailure {
            path: song.path.clone(),
            source,
        }
    })
}

/// Drop every quote character from a user-supplied path.
pub fn strip_quotes(path: &str) -> String {
    path.chars().filter(|ch| !PATH_QUOTES.contains(ch)).collect()
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
