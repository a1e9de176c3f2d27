//! Host capabilities used by the interpreter.
//!
//! A [`Console`] supplies the two primitives an [`Io`](super::Io) description
//! can ask for. The interpreter calls nothing else, so swapping the console
//! swaps the outside world: [`StdConsole`] talks to a real reader and writer,
//! [`ScriptedConsole`](super::ScriptedConsole) replays canned input.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use super::error::ConsoleError;

/// The two primitive effects a host provides.
///
/// Both calls are synchronous. Errors are the host's own and are returned
/// to the interpreter's caller unchanged.
pub trait Console {
    /// The failure type of this host.
    type Error;

    /// Reads the next line, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns the host's error when no line can be produced.
    fn read_line(&mut self) -> Result<String, Self::Error>;

    /// Writes `text` as one line. The line is visible before this returns.
    ///
    /// # Errors
    ///
    /// Returns the host's error when the line cannot be written.
    fn write_line(&mut self, text: &str) -> Result<(), Self::Error>;
}

impl<C: Console + ?Sized> Console for &mut C {
    type Error = C::Error;

    #[inline]
    fn read_line(&mut self) -> Result<String, Self::Error> {
        (**self).read_line()
    }

    #[inline]
    fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).write_line(text)
    }
}

/// A console over any buffered reader and writer.
///
/// # Examples
///
/// ```rust
/// use inert::effect::{Io, StdConsole};
///
/// let input: &[u8] = b"Ada\n";
/// let mut console = StdConsole::new(input, Vec::new());
///
/// let program = Io::read_line().bind(|name| Io::write_line(format!("Hello, {name}")));
/// program.run(&mut console).unwrap();
///
/// assert_eq!(console.into_parts().1, b"Hello, Ada\n");
/// ```
#[derive(Debug)]
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdConsole<StdinLock<'static>, Stdout> {
    /// A console bound to the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Creates a console reading from `reader` and writing to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    type Error = ConsoleError;

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        trim_line_terminator(&mut buffer);
        Ok(buffer)
    }

    fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }
}

fn trim_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
