//! A deterministic console for tests.
//!
//! [`ScriptedConsole`] answers `read_line` from a fixed list of lines and
//! records every primitive call in order. Two interpretations that make the
//! same calls produce equal logs, which is how descriptions are compared.

use std::collections::VecDeque;
use std::io;

use super::console::Console;
use super::error::ConsoleError;

/// One primitive call observed by a [`ScriptedConsole`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConsoleCall {
    /// A line was read; holds the line returned.
    ReadLine(String),
    /// A line was written; holds its text.
    WriteLine(String),
}

/// A console with scripted input and a call log.
///
/// # Examples
///
/// ```rust
/// use inert::effect::{ConsoleCall, Io, ScriptedConsole};
///
/// let mut console = ScriptedConsole::with_input(["Ada"]);
/// let program = Io::read_line().bind(Io::write_line);
///
/// assert!(console.calls().is_empty());
/// program.run(&mut console).unwrap();
///
/// assert_eq!(
///     console.calls(),
///     [
///         ConsoleCall::ReadLine("Ada".to_string()),
///         ConsoleCall::WriteLine("Ada".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    calls: Vec<ConsoleCall>,
    output_closed: bool,
}

impl ScriptedConsole {
    /// Creates a console with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console that answers reads with `lines`, in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Makes every subsequent `write_line` fail with a broken pipe.
    #[must_use]
    pub fn with_closed_output(mut self) -> Self {
        self.output_closed = true;
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> &[ConsoleCall] {
        &self.calls
    }

    /// Lines written so far, in order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Number of input lines not yet read.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    type Error = ConsoleError;

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let line = self.input.pop_front().ok_or(ConsoleError::EndOfInput)?;
        self.calls.push(ConsoleCall::ReadLine(line.clone()));
        Ok(line)
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        if self.output_closed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "scripted output is closed").into());
        }
        self.calls.push(ConsoleCall::WriteLine(text.to_owned()));
        self.output.push(text.to_owned());
        Ok(())
    }
}
