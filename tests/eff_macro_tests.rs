#![cfg(feature = "effect")]
//! Tests for the eff! macro (do-notation style syntax over `bind`).
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind operation
//! - `let pattern = expression;` - Pure let binding
//! - `expression` - Final expression (must be a description)

#![allow(clippy::unwrap_used)]

use inert::eff;
use inert::effect::{ConsoleCall, Io, ScriptedConsole};
use inert::typeclass::Identity;

// =============================================================================
// Identity Tests
// =============================================================================

mod identity_tests {
    use super::*;

    #[test]
    fn identity_bind_chain() {
        let result = eff! {
            x <= Identity(5);
            y <= Identity(10);
            Identity(x + y)
        };
        assert_eq!(result, Identity(15));
    }

    #[test]
    fn identity_with_let_tuple() {
        let result = eff! {
            pair <= Identity((2, 3));
            let (left, right) = pair;
            Identity(left * right)
        };
        assert_eq!(result.into_inner(), 6);
    }
}

// =============================================================================
// Io Tests
// =============================================================================

mod io_tests {
    use super::*;

    #[test]
    fn io_block_is_only_a_description() {
        let console = ScriptedConsole::with_input(["ignored"]);

        let _program: Io<String> = eff! {
            _ <= Io::write_line("hello");
            line <= Io::read_line();
            Io::point(line)
        };

        assert!(console.calls().is_empty());
    }

    #[test]
    fn io_bindings_follow_written_order() {
        let program = eff! {
            first <= Io::prompt("first?");
            second <= Io::prompt("second?");
            let joined = format!("{first}+{second}");
            _ <= Io::write_line(joined.clone());
            Io::point(joined)
        };

        let mut console = ScriptedConsole::with_input(["a", "b"]);
        assert_eq!(program.run(&mut console).unwrap(), "a+b");
        assert_eq!(
            console.calls(),
            [
                ConsoleCall::WriteLine("first?".to_string()),
                ConsoleCall::ReadLine("a".to_string()),
                ConsoleCall::WriteLine("second?".to_string()),
                ConsoleCall::ReadLine("b".to_string()),
                ConsoleCall::WriteLine("a+b".to_string()),
            ]
        );
    }

    #[test]
    fn io_tuple_pattern() {
        let program = eff! {
            (left, right) <= Io::read_line().product(Io::read_line());
            Io::point(format!("{right}{left}"))
        };

        let mut console = ScriptedConsole::with_input(["x", "y"]);
        assert_eq!(program.run(&mut console).unwrap(), "yx");
    }

    #[test]
    fn io_branch_on_bound_value() {
        let program = eff! {
            answer <= Io::read_line();
            if answer == "y" {
                Io::write_line("confirmed")
            } else {
                Io::write_line("cancelled")
            }
        };

        let mut console = ScriptedConsole::with_input(["n"]);
        program.run(&mut console).unwrap();
        assert_eq!(console.output(), ["cancelled"]);
    }

    #[test]
    fn io_error_stops_the_block() {
        let program = eff! {
            line <= Io::read_line();
            _ <= Io::write_line(line);
            Io::write_line("unreachable")
        };

        let mut console = ScriptedConsole::new();
        assert!(program.run(&mut console).unwrap_err().is_end_of_input());
        assert!(console.calls().is_empty());
    }
}
