use std::io::{BufRead, Write};

use anyhow::Result;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::Genre;
use crate::opener::FileOpener;

use super::forms::{parse_genre_choice, parse_position, prompt_genre, SongForm};
use super::helpers::{surface_error, StatusKind};
use super::terminal::Console;

const BANNER: &str = "--- C-Music ---";
const RULE: &str = "-----------------";

/// Entries of the main menu, numbered as printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ListAll,
    ListByGenre,
    Play,
    PlayRandom,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::ListAll,
        MenuChoice::ListByGenre,
        MenuChoice::Play,
        MenuChoice::PlayRandom,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Song",
            MenuChoice::ListAll => "List Songs",
            MenuChoice::ListByGenre => "List Songs by Genre",
            MenuChoice::Play => "Play Song",
            MenuChoice::PlayRandom => "Play Random Song",
            MenuChoice::Delete => "Delete Song",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Map a typed answer onto a menu entry.
    pub fn parse(answer: &str) -> Option<MenuChoice> {
        let number = answer.trim().parse::<usize>().ok()?;
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }
}

/// Menu state: the loaded catalog plus whatever opens files for playback.
pub struct App {
    catalog: Catalog,
    opener: Box<dyn FileOpener>,
}

impl App {
    pub fn new(catalog: Catalog, opener: Box<dyn FileOpener>) -> Self {
        Self { catalog, opener }
    }

    /// Print the banner and numbered options.
    pub fn draw<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        console.line(format!("\n{BANNER}"))?;
        console.line(RULE)?;
        console.line("Select an option:")?;
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            console.line(format!("{}. {}", index + 1, choice.label()))?;
        }
        Ok(())
    }

    /// Run one menu selection. Returns `true` when the session should end,
    /// either because the user chose Exit or input ran out mid-prompt.
    pub fn handle_choice<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        console: &mut Console<R, W>,
    ) -> Result<bool> {
        match choice {
            MenuChoice::Add => self.add_song(console),
            MenuChoice::ListAll => self.list_songs(console).map(|()| false),
            MenuChoice::ListByGenre => self.list_songs_by_genre(console),
            MenuChoice::Play => self.play_song(console),
            MenuChoice::PlayRandom => self.play_random(console).map(|()| false),
            MenuChoice::Delete => self.delete_song(console),
            MenuChoice::Exit => Ok(true),
        }
    }

    fn add_song<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<bool> {
        let Some(form) = SongForm::prompt(console)? else {
            return Ok(true);
        };

        let added = form.genre_choice().and_then(|choice| {
            self.catalog
                .add(&form.title, &form.artist, &form.path, choice)
                .map(|_| ())
        });
        match added {
            Ok(()) => console.status("Song added successfully.", StatusKind::Info)?,
            Err(CatalogError::InvalidGenreSelection) => {
                console.status("Invalid genre. Song not added.", StatusKind::Error)?
            }
            Err(err) => report(console, &err)?,
        }
        Ok(false)
    }

    fn list_songs<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        match self.catalog.list() {
            Ok(songs) => {
                console.line("")?;
                for (position, song) in songs {
                    console.line(format!("{position}. {song}"))?;
                }
                Ok(())
            }
            Err(err) => report(console, &err),
        }
    }

    fn list_songs_by_genre<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<bool> {
        if self.catalog.is_empty() {
            report(console, &CatalogError::EmptyCatalog)?;
            return Ok(false);
        }
        let Some(answer) = prompt_genre(console)? else {
            return Ok(true);
        };

        let listed = parse_genre_choice(&answer)
            .and_then(|choice| Ok((choice, self.catalog.list_by_genre(choice)?)));
        match listed {
            Ok((choice, songs)) => {
                console.line("")?;
                let mut shown = 0usize;
                for (position, song) in songs {
                    console.line(format!("{position}. {song}"))?;
                    shown += 1;
                }
                if shown == 0 {
                    if let Some(genre) = Genre::from_choice(choice) {
                        console.line(format!("No {genre} songs in the library."))?;
                    }
                }
            }
            Err(err) => report(console, &err)?,
        }
        Ok(false)
    }

    fn play_song<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<bool> {
        if self.catalog.is_empty() {
            console.status("No songs to play.", StatusKind::Error)?;
            return Ok(false);
        }
        let Some(answer) = console.prompt("\nEnter the song number to play: ")? else {
            return Ok(true);
        };

        let played = parse_position(&answer)
            .and_then(|position| self.catalog.play_by_index(position, &*self.opener));
        match played {
            Ok(song) => console.status(&format!("Now playing: {song}"), StatusKind::Info)?,
            Err(err) => report(console, &err)?,
        }
        Ok(false)
    }

    fn play_random<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        match self.catalog.play_random(&*self.opener) {
            Ok(song) => console.status(&format!("Now playing: {song}"), StatusKind::Info),
            Err(err) => report(console, &err),
        }
    }

    fn delete_song<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<bool> {
        if self.catalog.is_empty() {
            console.status("No songs to delete.", StatusKind::Error)?;
            return Ok(false);
        }
        self.list_songs(console)?;
        let Some(answer) = console.prompt("\nEnter the song number to delete: ")? else {
            return Ok(true);
        };

        let deleted =
            parse_position(&answer).and_then(|position| self.catalog.delete_by_index(position));
        match deleted {
            Ok(_) => console.status("Song deleted successfully.", StatusKind::Info)?,
            Err(err) => report(console, &err)?,
        }
        Ok(false)
    }
}

fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: &CatalogError) -> Result<()> {
    console.status(&surface_error(err), StatusKind::Error)
}
