//! In-memory console that replays canned input.

use super::{Console, ConsoleError};
use std::collections::VecDeque;

/// Console fed from a fixed list of lines.
///
/// Prompts and written lines are recorded in order, so a whole match can
/// be replayed and its transcript inspected. Once the script runs out,
/// reads fail with [`ConsoleError::Closed`].
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer prompts with `lines`.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything shown so far: prompts and written lines.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.output.push(prompt.to_string());
        self.input.pop_front().ok_or(ConsoleError::Closed)
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.output.push(line.to_string());
        Ok(())
    }
}
