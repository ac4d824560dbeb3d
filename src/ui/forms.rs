use std::io::{BufRead, Write};

use anyhow::Result;

use crate::error::CatalogError;
use crate::models::Genre;

use super::terminal::Console;

/// Raw answers collected by the "Add Song" prompts. Nothing is validated
/// here; the catalog decides what to accept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SongForm {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) path: String,
    pub(crate) genre: String,
}

impl SongForm {
    /// Ask for every field in turn. `None` means input ran out part way.
    pub(crate) fn prompt<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
    ) -> Result<Option<Self>> {
        let Some(title) = console.prompt("Enter song title: ")? else {
            return Ok(None);
        };
        let Some(artist) = console.prompt("Enter artist name: ")? else {
            return Ok(None);
        };
        let Some(path) = console.prompt("Enter file path: ")? else {
            return Ok(None);
        };
        let Some(genre) = prompt_genre(console)? else {
            return Ok(None);
        };

        Ok(Some(Self {
            title,
            artist,
            path,
            genre,
        }))
    }

    pub(crate) fn genre_choice(&self) -> Result<u8, CatalogError> {
        parse_genre_choice(&self.genre)
    }
}

/// Show the genre sub-menu and read the answer.
pub(crate) fn prompt_genre<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<String>> {
    console.line("Select Genre:")?;
    for genre in Genre::ALL {
        console.line(format!("{}. {}", genre.choice(), genre.label()))?;
    }
    console.prompt("Choice: ")
}

pub(crate) fn parse_genre_choice(answer: &str) -> Result<u8, CatalogError> {
    answer
        .trim()
        .parse::<u8>()
        .map_err(|_| CatalogError::InvalidGenreSelection)
}

/// Parse a 1-based song number. Negative or non-numeric answers can never
/// address a song.
pub(crate) fn parse_position(answer: &str) -> Result<usize, CatalogError> {
    answer
        .trim()
        .parse::<usize>()
        .map_err(|_| CatalogError::InvalidIndexSelection)
}
