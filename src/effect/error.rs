//! Failures of the provided console hosts.
//!
//! The interpreter has no error type of its own. Whatever a
//! [`Console`](super::Console) returns is passed through unchanged; this type
//! is what [`StdConsole`](super::StdConsole) and
//! [`ScriptedConsole`](super::ScriptedConsole) return.

use std::io;

/// Error raised by a console primitive.
///
/// # Examples
///
/// ```rust
/// use inert::effect::ConsoleError;
///
/// let error = ConsoleError::EndOfInput;
/// assert_eq!(error.to_string(), "end of input reached while reading a line");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The input channel has no further lines.
    #[error("end of input reached while reading a line")]
    EndOfInput,

    /// The underlying reader or writer failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    /// Returns `true` when the error is [`ConsoleError::EndOfInput`].
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}
