//! Console backed by the process's stdin and stdout.

use super::{Console, ConsoleError};
use std::io::{self, BufRead, Write};
use tracing::{instrument, trace};

/// Blocking stdin/stdout console.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    /// Creates a terminal console.
    pub fn new() -> Self {
        Self
    }
}

impl Console for Terminal {
    #[instrument(skip(self))]
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        trace!(len = trimmed.len(), "Line read");
        Ok(trimmed.to_string())
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(io::stdout().lock(), "{line}")?;
        Ok(())
    }
}
