use std::cell::RefCell;
use std::fs;
use std::io::{self, Cursor};
use std::path::Path;
use std::rc::Rc;

use song_catalog::ui::{run_with_io, Console};
use song_catalog::{App, Catalog, FileOpener};

#[derive(Clone, Default)]
struct RecordingOpener {
    opened: Rc<RefCell<Vec<String>>>,
}

impl FileOpener for RecordingOpener {
    fn open(&self, path: &str) -> io::Result<()> {
        self.opened.borrow_mut().push(path.to_string());
        Ok(())
    }
}

/// Run a whole session with `input` against the store at `store`, returning
/// everything printed and every path handed to the opener.
fn run_session(store: &Path, input: &str) -> (String, Vec<String>) {
    let opener = RecordingOpener::default();
    let catalog = Catalog::load_with_seed(store, 3).unwrap();
    let mut app = App::new(catalog, Box::new(opener.clone()));
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new(), false);

    run_with_io(&mut app, &mut console).unwrap();

    let output = String::from_utf8(console.into_output()).unwrap();
    let opened = opener.opened.borrow().clone();
    (output, opened)
}

#[test]
fn add_list_and_exit() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("songs.txt");

    let (output, _) = run_session(
        &store,
        "1\nSong A\nArtist A\n\"/tmp/a.mp3\"\n1\n2\n7\n",
    );

    assert!(output.contains("--- C-Music ---"));
    assert!(output.contains("Song added successfully."));
    assert!(output.contains("1. Title: Song A | Artist: Artist A | Genre: Rock"));
    assert!(output.trim_end().ends_with("Goodbye!"));
    assert_eq!(
        fs::read_to_string(&store).unwrap(),
        "Song A|Artist A|/tmp/a.mp3|Rock\n"
    );
}

#[test]
fn catalog_survives_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("songs.txt");

    run_session(&store, "1\nFirst\nX\n/1.mp3\n2\n1\nSecond\nY\n/2.mp3\n3\n7\n");
    let (output, opened) = run_session(&store, "4\n2\n7\n");

    assert!(output.contains("Now playing: Title: Second | Artist: Y | Genre: Hip-Hop"));
    assert_eq!(opened, vec!["/2.mp3".to_string()]);
}

#[test]
fn invalid_genre_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("songs.txt");
    fs::write(&store, "Kept|K|/k.mp3|Pop\n").unwrap();

    let (output, _) = run_session(&store, "1\nNope\nN\n/n.mp3\n5\n1\nNope\nN\n/n.mp3\npop\n7\n");

    assert_eq!(output.matches("Invalid genre. Song not added.").count(), 2);
    assert_eq!(fs::read_to_string(&store).unwrap(), "Kept|K|/k.mp3|Pop\n");
}

#[test]
fn genre_listing_keeps_global_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("songs.txt");
    fs::write(
        &store,
        "One|A|/1.mp3|Rock\nTwo|B|/2.mp3|Pop\nThree|C|/3.mp3|Rock\n",
    )
    .unwrap();

    let (output, _) = run_session(&store, "3\n1\n3\n3\n7\n");

    assert!(output.contains("1. Title: One | Artist: A | Genre: Rock"));
    assert!(output.contains("3. Title: Three | Artist: C | Genre: Rock"));
    assert!(!output.contains("2. Title: Two"));
    assert!(output.contains("No Hip-Hop songs in the library."));
}

#[test]
fn delete_by_number_rewrites_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("songs.txt");
    fs::write(
        &store,
        "One|A|/1.mp3|Rock\nTwo|B|/2.mp3|Pop\nThree|C|/3.mp3|Rock\n",
    )
    .unwrap();

    let (output, _) = run_session(&store, "6\n9\n6\n1\n7\n");

    assert!(output.contains("Invalid choice."));
    assert!(output.contains("Song deleted successfully."));
    assert_eq!(
        fs::read_to_string(&store).unwrap(),
        "Two|B|/2.mp3|Pop\nThree|C|/3.mp3|Rock\n"
    );
}

#[test]
fn empty_catalog_messages() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("songs.txt");

    let (output, opened) = run_session(&store, "2\n3\n4\n5\n6\n7\n");

    assert!(output.contains("No songs in the library."));
    assert!(output.contains("No songs to play."));
    assert!(output.contains("No songs to delete."));
    assert!(opened.is_empty());
    assert!(!store.exists());
}

#[test]
fn play_random_opens_a_catalogued_song() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("songs.txt");
    fs::write(&store, "Only|O|/only.mp3|Pop\n").unwrap();

    let (output, opened) = run_session(&store, "5\n7\n");

    assert!(output.contains("Now playing: Title: Only | Artist: O | Genre: Pop"));
    assert_eq!(opened, vec!["/only.mp3".to_string()]);
}

#[test]
fn bad_menu_input_and_end_of_input() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("songs.txt");

    let (output, _) = run_session(&store, "hello\n42\n");

    assert_eq!(output.matches("Invalid option.").count(), 2);
    assert!(output.trim_end().ends_with("Goodbye!"));
}
