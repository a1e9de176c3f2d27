//! greeting-sample
//!
//! Console programs built as `Io` descriptions. Nothing here performs an
//! effect; `main` hands the descriptions to the interpreter.

use inert::eff;
use inert::effect::Io;

/// The question asked before reading a name.
pub const QUESTION: &str = "What's your name?";

/// Asks for a name once and greets it.
///
/// Produces the greeting it wrote.
///
/// # Examples
///
/// ```rust
/// use greeting_sample::greeting;
/// use inert::effect::ScriptedConsole;
///
/// let mut console = ScriptedConsole::with_input(["Ada"]);
/// assert_eq!(greeting().run(&mut console).unwrap(), "Hello, Ada");
/// ```
pub fn greeting() -> Io<String> {
    eff! {
        Io::write_line(QUESTION);
        name <= Io::read_line();
        let message = format!("Hello, {name}");
        Io::write_line(message.clone());
        Io::point(message)
    }
}

/// Asks for a name until a non-blank one is given, at most `attempts` times.
///
/// Produces the greeting, or `None` when every answer was blank. Blank
/// answers are answered with a reminder before asking again.
pub fn persistent_greeting(attempts: usize) -> Io<Option<String>> {
    if attempts == 0 {
        return Io::write_line("Giving up.").then(Io::point(None));
    }

    eff! {
        answer <= Io::prompt(QUESTION);
        let name = answer.trim().to_owned();
        if name.is_empty() {
            Io::write_line("A name cannot be blank.").then(persistent_greeting(attempts - 1))
        } else {
            let message = format!("Hello, {name}");
            Io::write_line(message.clone()).then(Io::point(Some(message)))
        }
    }
}
