#![cfg(feature = "effect")]
//! Unit tests for `Io` descriptions and their interpretation.
//!
//! This module checks that building descriptions performs no effect, that
//! interpretation follows the tree's order, and that console failures stop
//! interpretation and reach the caller unchanged.

use inert::effect::{ConsoleCall, ConsoleError, Io, NodeKind, ScriptedConsole, StdConsole, interpret};
use std::cell::RefCell;
use std::rc::Rc;

fn write(text: &str) -> ConsoleCall {
    ConsoleCall::WriteLine(text.to_string())
}

fn read(text: &str) -> ConsoleCall {
    ConsoleCall::ReadLine(text.to_string())
}

/// The greeting program, written with literal nodes.
fn greeting() -> Io<String> {
    Io::write_line("What's your name?").bind(|()| {
        Io::read_line().bind(|name| {
            Io::write_line(format!("Hello, {name}")).bind(move |()| Io::point(format!("Hello, {name}")))
        })
    })
}

// =============================================================================
// Construction is inert
// =============================================================================

mod construction {
    use super::*;

    #[test]
    fn building_trees_makes_no_console_call() {
        let console = ScriptedConsole::with_input(["Ada"]);

        let _point = Io::point(1);
        let _read = Io::read_line();
        let _write = Io::write_line("x");
        let _sequence = Io::write_line("A").bind(|()| Io::write_line("B"));
        let _greeting = greeting();

        assert!(console.calls().is_empty());
        assert_eq!(console.remaining_input(), 1);
    }

    #[test]
    fn continuations_are_not_called_while_building() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let inner_log = Rc::clone(&log);

        let program = Io::read_line().bind(move |line| {
            inner_log.borrow_mut().push(line);
            Io::point(())
        });

        assert!(log.borrow().is_empty());
        assert_eq!(program.kind(), NodeKind::Sequence);

        let mut console = ScriptedConsole::with_input(["seen"]);
        program.run(&mut console).unwrap();
        assert_eq!(*log.borrow(), ["seen"]);
    }
}

// =============================================================================
// Interpretation
// =============================================================================

mod interpretation {
    use super::*;

    #[test]
    fn point_returns_value_without_host_call() {
        let mut console = ScriptedConsole::new();
        assert_eq!(interpret(Io::point("pure"), &mut console).unwrap(), "pure");
        assert!(console.calls().is_empty());
    }

    #[test]
    fn write_a_strictly_before_write_b() {
        let program = Io::write_line("A").bind(|()| Io::write_line("B"));
        let mut console = ScriptedConsole::new();
        interpret(program, &mut console).unwrap();
        assert_eq!(console.calls(), [write("A"), write("B")]);
    }

    #[test]
    fn greeting_scenario() {
        let mut console = ScriptedConsole::with_input(["Ada"]);

        let result = interpret(greeting(), &mut console).unwrap();

        assert_eq!(result, "Hello, Ada");
        assert_eq!(
            console.calls(),
            [write("What's your name?"), read("Ada"), write("Hello, Ada")]
        );
    }

    #[test]
    fn greeting_over_byte_streams() {
        let mut console = StdConsole::new(&b"Ada\r\n"[..], Vec::new());

        let result = greeting().run(&mut console).unwrap();

        assert_eq!(result, "Hello, Ada");
        let (_, written) = console.into_parts();
        assert_eq!(String::from_utf8(written).unwrap(), "What's your name?\nHello, Ada\n");
    }

    #[test]
    fn same_input_same_behaviour() {
        let mut first = ScriptedConsole::with_input(["Grace"]);
        let mut second = ScriptedConsole::with_input(["Grace"]);

        let first_result = greeting().run(&mut first).unwrap();
        let second_result = greeting().run(&mut second).unwrap();

        assert_eq!(first_result, second_result);
        assert_eq!(first.calls(), second.calls());
    }

    #[test]
    fn one_console_serves_independent_runs() {
        let mut console = ScriptedConsole::with_input(["one", "two"]);

        assert_eq!(Io::read_line().run(&mut console).unwrap(), "one");
        assert_eq!(Io::read_line().run(&mut console).unwrap(), "two");
        assert_eq!(console.calls(), [read("one"), read("two")]);
    }

    #[test]
    fn effects_inside_first_precede_continuation() {
        let first = Io::write_line("1")
            .then(Io::read_line())
            .bind(|line| Io::write_line(format!("2:{line}")).then(Io::point(line)));
        let program = first.bind(|line| Io::write_line(format!("3:{line}")));

        let mut console = ScriptedConsole::with_input(["x"]);
        program.run(&mut console).unwrap();

        assert_eq!(
            console.calls(),
            [write("1"), read("x"), write("2:x"), write("3:x")]
        );
    }

    #[test]
    fn host_calls_match_reached_leaves() {
        let program = Io::read_line().bind(|answer| {
            if answer == "y" {
                Io::write_line("yes").then(Io::write_line("again"))
            } else {
                Io::write_line("no")
            }
        });

        let mut console = ScriptedConsole::with_input(["n"]);
        program.run(&mut console).unwrap();
        assert_eq!(console.calls(), [read("n"), write("no")]);
    }
}

// =============================================================================
// Errors
// =============================================================================

mod errors {
    use super::*;

    #[test]
    fn end_of_input_propagates_and_stops() {
        let mut console = ScriptedConsole::new();

        let error = greeting().run(&mut console).unwrap_err();

        assert!(error.is_end_of_input());
        assert_eq!(console.calls(), [write("What's your name?")]);
    }

    #[test]
    fn broken_output_stops_before_any_read() {
        let mut console = ScriptedConsole::with_input(["Ada"]).with_closed_output();

        let error = greeting().run(&mut console).unwrap_err();

        assert!(matches!(error, ConsoleError::Io(_)));
        assert!(console.calls().is_empty());
        assert_eq!(console.remaining_input(), 1);
    }

    #[test]
    fn byte_stream_end_of_input() {
        let mut console = StdConsole::new(&b""[..], Vec::new());
        let error = Io::read_line().run(&mut console).unwrap_err();
        assert!(error.is_end_of_input());
    }
}

// =============================================================================
// Stack safety
// =============================================================================

mod stack_safety {
    use super::*;

    #[test]
    fn long_right_nested_loop() {
        fn count_down(remaining: u32) -> Io<u32> {
            if remaining == 0 {
                Io::point(0)
            } else {
                Io::point(remaining).bind(move |n| count_down(n - 1).map(move |rest| rest + 1))
            }
        }

        let mut console = ScriptedConsole::new();
        assert_eq!(count_down(50_000).run(&mut console).unwrap(), 50_000);
    }

    #[test]
    fn long_left_nested_chain_with_effects() {
        let mut program = Io::point(0_usize);
        for index in 0..20_000 {
            program = program.bind(move |count| {
                Io::when(index % 5_000 == 0, Io::write_line(format!("at {index}")))
                    .then(Io::point(count + 1))
            });
        }

        let mut console = ScriptedConsole::new();
        assert_eq!(program.run(&mut console).unwrap(), 20_000);
        assert_eq!(console.output(), ["at 0", "at 5000", "at 10000", "at 15000"]);
    }

    #[test]
    fn dropping_large_uninterpreted_sequence() {
        let program = Io::sequence((0..300_000).map(|_| Io::read_line()));
        assert_eq!(program.kind(), NodeKind::Sequence);
        drop(program);
    }

    #[test]
    fn dropping_long_uninterpreted_bind_chain() {
        let mut program = Io::point(0_u64);
        for _ in 0..300_000 {
            program = program.bind(|x| Io::write_line("unused").then(Io::point(x + 1)));
        }
        drop(program);
    }

    #[test]
    fn abandoned_run_releases_the_rest_of_the_tree() {
        let program = Io::sequence((0..300_000).map(|_| Io::read_line()));
        let mut console = ScriptedConsole::with_input(["only"]);

        assert!(program.run(&mut console).unwrap_err().is_end_of_input());
        assert_eq!(console.calls(), [read("only")]);
    }
}

// =============================================================================
// Tracing
// =============================================================================

mod tracing_events {
    use super::*;

    #[test]
    fn interpretation_emits_events_under_a_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            let mut console = ScriptedConsole::with_input(["Ada"]);
            greeting().run(&mut console)
        });

        assert_eq!(result.unwrap(), "Hello, Ada");
    }
}
