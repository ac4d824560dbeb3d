use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::models::{Genre, Song};

/// Parse one store line (`title|artist|path|genre`). The first three `|`
/// delimit the text fields and the remainder must be a known genre tag;
/// anything else yields `None`.
pub fn parse_line(line: &str) -> Option<Song> {
    let mut fields = line.splitn(4, '|');
    let title = fields.next()?;
    let artist = fields.next()?;
    let path = fields.next()?;
    let genre = Genre::from_tag(fields.next()?)?;

    Some(Song::new(title, artist, path, genre))
}

/// Render a song as a store line, without the trailing newline.
pub fn format_line(song: &Song) -> String {
    format!(
        "{}|{}|{}|{}",
        song.title,
        song.artist,
        song.path,
        song.genre.tag()
    )
}

/// Load every well-formed song from the store file in file order. A missing
/// file is an empty catalog; lines with unknown genre tags are skipped.
pub fn load_songs(path: &Path) -> Result<Vec<Song>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "store file not found, starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(CatalogError::PersistenceReadFailure {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut songs = Vec::new();
    let mut skipped = 0usize;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| CatalogError::PersistenceReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

        match parse_line(&line) {
            Some(song) => songs.push(song),
            None => {
                debug!(line = %line, "skipping store line without a known genre");
                skipped += 1;
            }
        }
    }

    debug!(path = %path.display(), loaded = songs.len(), skipped, "loaded store file");
    Ok(songs)
}

/// Replace the store file contents with `songs`, one line each. The file is
/// flushed and closed before returning.
pub fn write_songs(path: &Path, songs: &[Song]) -> Result<()> {
    let write_failure = |source: io::Error| CatalogError::PersistenceWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_failure)?;
    let mut writer = BufWriter::new(file);
    for song in songs {
        writeln!(writer, "{}", format_line(song)).map_err(write_failure)?;
    }
    writer.flush().map_err(write_failure)?;

    debug!(path = %path.display(), count = songs.len(), "wrote store file");
    Ok(())
}
