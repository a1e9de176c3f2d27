//! # inert
//!
//! Effects as inert data.
//!
//! ## Overview
//!
//! A program that talks to a console is built here as a plain value: a tree of
//! effect descriptions that does nothing until an interpreter walks it. The
//! crate provides three pieces:
//!
//! - **Type Classes**: [`TypeConstructor`](typeclass::TypeConstructor) and
//!   [`Monad`](typeclass::Monad) (`point` / `bind`), with generic combinators
//!   written only against that contract
//! - **Effect Descriptions**: [`Io`](effect::Io), whose nodes are `ReadLine`,
//!   `WriteLine`, `Point` and `Sequence`
//! - **Interpreter**: [`interpret`](effect::interpret), the only code that
//!   touches the outside world, through a host-provided
//!   [`Console`](effect::Console)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and generic combinators
//! - `effect`: The `Io` description type, consoles and the interpreter
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use inert::prelude::*;
//!
//! let program = Io::write_line("What's your name?")
//!     .then(Io::read_line())
//!     .bind(|name| {
//!         let greeting = format!("Hello, {name}");
//!         Io::write_line(greeting.clone()).then(Io::point(greeting))
//!     });
//!
//! // Nothing has happened yet: `program` is only a description.
//! let mut console = ScriptedConsole::with_input(["Ada"]);
//! let greeting = program.run(&mut console).unwrap();
//!
//! assert_eq!(greeting, "Hello, Ada");
//! assert_eq!(console.output(), ["What's your name?", "Hello, Ada"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use inert::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
