//! The interpreter - the only code that performs effects.
//!
//! [`interpret`] walks an [`Io`] tree and calls the host [`Console`] for every
//! `ReadLine` and `WriteLine` node it reaches, depth-first and left to right:
//!
//! ```text
//! ReadLine              => console.read_line()
//! WriteLine(text)       => console.write_line(text)
//! Point(value)          => value
//! Sequence(first, next) => next(interpret(first))
//! ```
//!
//! # Stack Safety
//!
//! Instead of recursing on `Sequence`, the interpreter keeps the pending
//! continuations on an explicit stack and runs a loop. The order of effects
//! is the one the recursive definition above gives, and chains of any depth
//! (left- or right-nested) use constant call-stack space.
//!
//! # Errors
//!
//! A failing primitive stops interpretation at once. Its error is returned
//! unchanged; no later node is evaluated and no value is produced.

use smallvec::SmallVec;

use super::console::Console;
use super::io::{Continuation, Erased, Io, Node};

const CONTINUATION_INLINE_CAPACITY: usize = 8;

/// Runs `program` against `console` and returns its value.
///
/// Each call is an independent evaluation; nothing is retained between
/// calls.
///
/// # Errors
///
/// Returns the first error raised by `console`, unchanged.
///
/// # Panics
///
/// Panics if the final value does not have type `A`. The typed constructors
/// of [`Io`] make this unreachable.
///
/// # Examples
///
/// ```rust
/// use inert::effect::{Io, ScriptedConsole, interpret};
///
/// let program = Io::write_line("A").then(Io::write_line("B"));
///
/// let mut console = ScriptedConsole::new();
/// interpret(program, &mut console).unwrap();
/// assert_eq!(console.output(), ["A", "B"]);
/// ```
pub fn interpret<A, C>(program: Io<A>, console: &mut C) -> Result<A, C::Error>
where
    A: 'static,
    C: Console + ?Sized,
{
    let mut pending: SmallVec<[Continuation; CONTINUATION_INLINE_CAPACITY]> = SmallVec::new();
    let mut current = program.into_node();
    let mut host_calls: usize = 0;

    tracing::debug!("interpretation started");

    loop {
        let value: Erased = match current {
            Node::ReadLine => {
                host_calls += 1;
                let line = console.read_line()?;
                tracing::trace!(line = %line, "read line");
                Box::new(line)
            }
            Node::WriteLine(text) => {
                host_calls += 1;
                console.write_line(&text)?;
                tracing::trace!(text = %text, "wrote line");
                Box::new(())
            }
            Node::Point(value) => value,
            Node::Sequence {
                first,
                continuation,
            } => {
                pending.push(continuation);
                current = *first;
                continue;
            }
        };

        match pending.pop() {
            Some(continuation) => current = continuation(value),
            None => {
                tracing::debug!(host_calls, "interpretation finished");
                let result = value
                    .downcast::<A>()
                    .expect("Final result type mismatch");
                return Ok(*result);
            }
        }
    }
}

impl<A: 'static> Io<A> {
    /// Interprets this description against `console`.
    ///
    /// Equivalent to [`interpret(self, console)`](interpret).
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `console`, unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::effect::{Io, ScriptedConsole};
    ///
    /// let mut console = ScriptedConsole::with_input(["7"]);
    /// let number = Io::read_line()
    ///     .map(|line| line.parse::<i32>().unwrap_or_default())
    ///     .run(&mut console)
    ///     .unwrap();
    /// assert_eq!(number, 7);
    /// ```
    pub fn run<C>(self, console: &mut C) -> Result<A, C::Error>
    where
        C: Console + ?Sized,
    {
        interpret(self, console)
    }

    /// Interprets this description against the process's standard input and
    /// output.
    ///
    /// This breaks referential transparency and belongs at the program's
    /// edge (e.g., in `main`).
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`](super::ConsoleError) when stdin is exhausted
    /// or stdio fails.
    pub fn run_unsafe(self) -> Result<A, super::ConsoleError> {
        let mut console = super::StdConsole::stdio();
        interpret(self, &mut console)
    }
}
