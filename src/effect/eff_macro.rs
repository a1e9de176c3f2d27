//! eff! macro for do-notation style syntax.
//!
//! This module provides the `eff!` macro, which writes a chain of `bind`
//! calls as a sequence of steps, similar to Haskell's do-notation.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: names the value the description produces
//! - `expression;` - Runs a description for its effects only (`_ <= expression;`)
//! - `let pattern = expression;` - Pure let binding
//! - `expression` - Final expression (already a description)
//!
//! `<-` is not valid in Rust's macro patterns, so `<=` stands for "bind from".
//!
//! # Examples
//!
//! ```rust
//! use inert::eff;
//! use inert::effect::{Io, ScriptedConsole};
//!
//! let program = eff! {
//!     _ <= Io::write_line("What's your name?");
//!     name <= Io::read_line();
//!     let greeting = format!("Hello, {name}");
//!     _ <= Io::write_line(greeting.clone());
//!     Io::point(greeting)
//! };
//!
//! let mut console = ScriptedConsole::with_input(["Ada"]);
//! assert_eq!(program.run(&mut console).unwrap(), "Hello, Ada");
//! ```
//!
//! # Implementation Notes
//!
//! `pattern <= expression; rest` expands into:
//!
//! ```rust,ignore
//! expression.bind(move |pattern| { /* rest */ })
//! ```
//!
//! so it works with any value that has a `bind` method taking a closure,
//! such as [`Io`](crate::effect::Io) and [`Identity`](crate::typeclass::Identity).

#![forbid(unsafe_code)]

/// A macro for do-notation style sequencing of descriptions.
///
/// # Syntax
///
/// ```text
/// eff! {
///     pattern <= expression;    // Bind operation
///     expression;               // Run for effects, discard the value
///     let pattern = expression; // Pure let binding
///     expression                // Final expression
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use inert::eff;
/// use inert::effect::{Io, ScriptedConsole};
///
/// let program = eff! {
///     Io::write_line("Name?");
///     name <= Io::read_line();
///     Io::write_line(format!("Hi {name}"))
/// };
///
/// let mut console = ScriptedConsole::with_input(["Ada"]);
/// program.run(&mut console).unwrap();
/// assert_eq!(console.output(), ["Name?", "Hi Ada"]);
/// ```
#[macro_export]
macro_rules! eff {
    ($result:expr) => {
        $result
    };

    ($pattern:ident <= $effect:expr ; $($rest:tt)+) => {
        $effect.bind(move |$pattern| $crate::eff!($($rest)+))
    };

    (($($pattern:tt)*) <= $effect:expr ; $($rest:tt)+) => {
        $effect.bind(move |($($pattern)*)| $crate::eff!($($rest)+))
    };

    (_ <= $effect:expr ; $($rest:tt)+) => {
        $effect.bind(move |_| $crate::eff!($($rest)+))
    };

    (let $pattern:pat = $value:expr ; $($rest:tt)+) => {{
        let $pattern = $value;
        $crate::eff!($($rest)+)
    }};

    // Must stay last: `x <= m` also parses as an expression.
    ($effect:expr ; $($rest:tt)+) => {
        $effect.bind(move |_| $crate::eff!($($rest)+))
    };
}
