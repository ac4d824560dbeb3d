use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use super::app::{App, MenuChoice};
use super::helpers::{styled_status, StatusKind};

/// Line-oriented terminal: prompts go to `output`, answers come from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Print `label` and read one line. Returns `None` once input is
    /// exhausted; the line terminator is not included.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = answer.trim_end_matches(['\n', '\r']).len();
        answer.truncate(trimmed);
        Ok(Some(answer))
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write output")
    }

    /// Blank line followed by a status message.
    pub(crate) fn status(&mut self, text: &str, kind: StatusKind) -> Result<()> {
        let styled = styled_status(text, kind, self.color);
        writeln!(self.output, "\n{styled}").context("failed to write status")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Attach the menu to the process's stdin/stdout and run until the user
/// exits or input ends.
pub fn run_app(app: &mut App, color: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), color);
    run_with_io(app, &mut console)
}

/// Drive the menu loop over any input/output pair.
pub fn run_with_io<R: BufRead, W: Write>(app: &mut App, console: &mut Console<R, W>) -> Result<()> {
    loop {
        app.draw(console)?;

        let Some(answer) = console.prompt("Enter choice: ")? else {
            break;
        };

        match MenuChoice::parse(&answer) {
            Some(choice) => {
                if app.handle_choice(choice, console)? {
                    break;
                }
            }
            None => console.status("Invalid option.", StatusKind::Error)?,
        }
    }

    console.status("Goodbye!", StatusKind::Info)
}
