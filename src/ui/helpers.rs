use std::error::Error;

use crossterm::style::Stylize;

/// Severity levels for status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

/// Colour a status line for the terminal. With colour disabled the text is
/// returned untouched.
pub(crate) fn styled_status(text: &str, kind: StatusKind, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match kind {
        StatusKind::Info => text.green().to_string(),
        StatusKind::Error => text.red().to_string(),
    }
}

/// Join an error with its chain of causes, outermost first.
pub(crate) fn surface_error(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}
