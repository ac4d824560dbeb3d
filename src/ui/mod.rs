//! Interactive numbered menu over standard input and output.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::{App, MenuChoice};
pub use terminal::{run_app, run_with_io, Console};
