//! The "play" side effect. The catalog only knows it can hand a path to
//! something that opens it; the real implementation asks the OS to use its
//! default application for the file.

use std::io;

pub trait FileOpener {
    fn open(&self, path: &str) -> io::Result<()>;
}

/// Opens files with the platform's default handler (`xdg-open`, `open`,
/// `start`) through the `open` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl FileOpener for SystemOpener {
    fn open(&self, path: &str) -> io::Result<()> {
        open::that(path)
    }
}
