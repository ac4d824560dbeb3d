//! Domain models held by the catalog. These stay plain data holders so the
//! store and menu layers can focus on persistence and presentation.

use std::fmt;

/// The fixed set of genre tags a song can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Rock,
    Pop,
    HipHop,
}

/// One row per genre: the tag written to the store file, the label shown to
/// the user, and the number used in the genre sub-menu.
static GENRE_TABLE: [(Genre, &str, &str, u8); 3] = [
    (Genre::Rock, "Rock", "Rock", 1),
    (Genre::Pop, "Pop", "Pop", 2),
    (Genre::HipHop, "HipHop", "Hip-Hop", 3),
];

impl Genre {
    /// Every genre in menu order.
    pub const ALL: [Genre; 3] = [Genre::Rock, Genre::Pop, Genre::HipHop];

    fn row(self) -> &'static (Genre, &'static str, &'static str, u8) {
        match self {
            Genre::Rock => &GENRE_TABLE[0],
            Genre::Pop => &GENRE_TABLE[1],
            Genre::HipHop => &GENRE_TABLE[2],
        }
    }

    /// Tag used in the fourth field of a store line.
    pub fn tag(self) -> &'static str {
        self.row().1
    }

    /// Human-facing label used in listings and the genre sub-menu.
    pub fn label(self) -> &'static str {
        self.row().2
    }

    /// Number the genre is selected by in the sub-menu.
    pub fn choice(self) -> u8 {
        self.row().3
    }

    /// Resolve a store tag. Matching is exact; anything else is unknown.
    pub fn from_tag(tag: &str) -> Option<Genre> {
        GENRE_TABLE
            .iter()
            .find(|(_, known, _, _)| *known == tag)
            .map(|(genre, _, _, _)| *genre)
    }

    /// Resolve a sub-menu number.
    pub fn from_choice(choice: u8) -> Option<Genre> {
        GENRE_TABLE
            .iter()
            .find(|(_, _, _, number)| *number == choice)
            .map(|(genre, _, _, _)| *genre)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A catalogued song. `path` is whatever the user typed (minus quotes) and is
/// handed verbatim to the OS when the song is played.
pub struct Song {
    pub title: String,
    pub artist: String,
    pub path: String,
    pub genre: Genre,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        path: impl Into<String>,
        genre: Genre,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            path: path.into(),
            genre,
        }
    }
}

impl fmt::Display for Song {
    /// `Title: .. | Artist: .. | Genre: ..`, the line shown in every listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {} | Artist: {} | Genre: {}",
            self.title, self.artist, self.genre
        )
    }
}
