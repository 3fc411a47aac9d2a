//! Line-oriented console the match talks through.

mod scripted;
mod terminal;

pub use scripted::ScriptedConsole;
pub use terminal::Terminal;

use derive_more::Display;
use tracing::{debug, instrument};

/// Reads and writes whole lines of text.
pub trait Console {
    /// Shows `prompt` and blocks until a line is entered.
    ///
    /// The returned line has its line terminator removed and is
    /// otherwise untouched.
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Writes one line of text.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        (**self).read_line(prompt)
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        (**self).write_line(line)
    }
}

/// Console failure.
#[derive(Debug, Display)]
pub enum ConsoleError {
    /// Nothing was entered at a prompt.
    #[display("invalid input, try again")]
    EmptyInput,

    /// The input stream ended.
    #[display("input closed before the match finished")]
    Closed,

    /// Reading or writing the terminal failed.
    #[display("console I/O failed: {_0}")]
    Io(std::io::Error),
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(e) => Some(e),
            ConsoleError::EmptyInput | ConsoleError::Closed => None,
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

fn non_empty(line: String) -> Result<String, ConsoleError> {
    if line.is_empty() {
        Err(ConsoleError::EmptyInput)
    } else {
        Ok(line)
    }
}

/// Prompts until a non-empty line is entered.
///
/// Empty lines are answered with the [`ConsoleError::EmptyInput`] message
/// and the same prompt is shown again. Other errors are returned.
#[instrument(skip(console))]
pub fn prompt_non_empty<C: Console>(console: &mut C, prompt: &str) -> Result<String, ConsoleError> {
    loop {
        match console.read_line(prompt).and_then(non_empty) {
            Ok(line) => return Ok(line),
            Err(e @ ConsoleError::EmptyInput) => {
                debug!("Empty input, prompting again");
                console.write_line(&e.to_string())?;
            }
            Err(e) => return Err(e),
        }
    }
}
