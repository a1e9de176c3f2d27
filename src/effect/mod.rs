//! Effect descriptions and their interpreter.
//!
//! This module separates *describing* console effects from *performing*
//! them:
//!
//! - [`Io`]: an inert description whose nodes are `ReadLine`, `WriteLine`,
//!   `Point` and `Sequence`
//! - [`IoKind`]: the brand connecting `Io` to the
//!   [`Monad`](crate::typeclass::Monad) capability contract
//! - [`Console`]: the two host primitives, `read_line` and `write_line`
//! - [`interpret`]: walks a description and calls the console, once per
//!   reached effect, in order
//!
//! # Consoles
//!
//! - [`StdConsole`]: any `BufRead` + `Write` pair, or the process stdio
//! - [`ScriptedConsole`]: canned input and a [`ConsoleCall`] log, for tests
//!
//! ```rust
//! use inert::effect::{Io, ScriptedConsole};
//!
//! let program = Io::write_line("A").bind(|()| Io::write_line("B"));
//!
//! // Building the program did nothing
//! let mut console = ScriptedConsole::new();
//! assert!(console.calls().is_empty());
//!
//! program.run(&mut console).unwrap();
//! assert_eq!(console.output(), ["A", "B"]);
//! ```
//!
//! # Do-Notation with eff! Macro
//!
//! ```rust
//! use inert::eff;
//! use inert::effect::{Io, ScriptedConsole};
//!
//! let program = eff! {
//!     name <= Io::prompt("Name?");
//!     Io::write_line(format!("Hi {name}"))
//! };
//!
//! let mut console = ScriptedConsole::with_input(["Ada"]);
//! program.run(&mut console).unwrap();
//! assert_eq!(console.output(), ["Name?", "Hi Ada"]);
//! ```

// =============================================================================
// Descriptions
// =============================================================================

mod io;

pub use io::{Io, IoKind, NodeKind};

// =============================================================================
// Host Capabilities
// =============================================================================

mod console;
mod error;
mod scripted;

pub use console::{Console, StdConsole};
pub use error::ConsoleError;
pub use scripted::{ConsoleCall, ScriptedConsole};

// =============================================================================
// Interpreter
// =============================================================================

mod interpreter;

pub use interpreter::interpret;

// =============================================================================
// Do-Notation Macro
// =============================================================================

mod eff_macro;
