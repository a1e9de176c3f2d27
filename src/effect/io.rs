//! IO descriptions - console effects as inert data.
//!
//! The `Io` type describes a console program as a tree of nodes. Building a
//! tree never performs an effect; only [`interpret`](super::interpret) does,
//! and it should be called at the program's "edge" (e.g., in `main`).
//!
//! # Nodes
//!
//! ```text
//! Io<A> = ReadLine                      -- A = String
//!       | WriteLine(text)               -- A = ()
//!       | Point(value: A)
//!       | Sequence(first: Io<X>, continuation: X -> Io<A>)
//! ```
//!
//! The intermediate type `X` of a `Sequence` is existential, so nodes are
//! stored type-erased behind the typed `Io<A>` handle. Only the typed
//! constructors below can create nodes, which keeps every erased value at
//! the type its continuation expects.
//!
//! # Examples
//!
//! ```rust
//! use inert::effect::{Io, ScriptedConsole};
//!
//! let program = Io::read_line().map(|line| line.len());
//!
//! let mut console = ScriptedConsole::with_input(["four"]);
//! assert_eq!(program.run(&mut console).unwrap(), 4);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use inert::effect::{Io, ScriptedConsole};
//!
//! let mut console = ScriptedConsole::with_input(["ignored"]);
//! let program = Io::write_line("hello").then(Io::read_line());
//!
//! // Not executed yet
//! assert!(console.calls().is_empty());
//!
//! program.run(&mut console).unwrap();
//! assert_eq!(console.calls().len(), 2);
//! ```

use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;

use crate::typeclass::{Monad, TypeConstructor, combinators};

/// Type-erased value flowing between nodes during interpretation.
pub(super) type Erased = Box<dyn Any>;

/// Type-erased continuation of a `Sequence` node.
pub(super) type Continuation = Box<dyn FnOnce(Erased) -> Node>;

/// The untyped node tree behind `Io<A>`.
pub(super) enum Node {
    ReadLine,
    WriteLine(String),
    Point(Erased),
    Sequence {
        first: Box<Node>,
        continuation: Continuation,
    },
}

/// The variant at the root of an [`Io`] tree.
///
/// Returned by [`Io::kind`] for inspection; it carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Reads one line from the console.
    ReadLine,
    /// Writes one line to the console.
    WriteLine,
    /// A pure value, no effect.
    Point,
    /// A description followed by a value-dependent continuation.
    Sequence,
}

/// A description of a console program producing a value of type `A`.
///
/// `Io<A>` is inert: constructing or combining values performs no effect
/// and never calls a continuation. The tree is owned exclusively by its
/// handle, so `Io` is neither `Clone` nor shareable across threads.
///
/// # Type Parameters
///
/// - `A`: The type of the value produced when the description is interpreted.
///
/// # Monad Laws
///
/// Observed through interpretation (same console calls, same value):
///
/// 1. **Left Identity**: `Io::point(a).bind(f) == f(a)`
/// 2. **Right Identity**: `m.bind(Io::point) == m`
/// 3. **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
///
/// # Dropping
///
/// A description may be discarded without ever being interpreted. Dropping
/// unlinks nested `Sequence` nodes in a loop, so long `bind` chains and
/// large [`Io::sequence`] trees are released without deep recursion.
pub struct Io<A> {
    node: Node,
    _result: PhantomData<fn() -> A>,
}

impl<A> Io<A> {
    const fn from_node(node: Node) -> Self {
        Self {
            node,
            _result: PhantomData,
        }
    }

    pub(super) fn into_node(mut self) -> Node {
        mem::replace(&mut self.node, Node::ReadLine)
    }

    /// Returns the variant at the root of this description.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::effect::{Io, NodeKind};
    ///
    /// assert_eq!(Io::read_line().kind(), NodeKind::ReadLine);
    /// assert_eq!(Io::point(1).bind(Io::point).kind(), NodeKind::Sequence);
    /// ```
    pub const fn kind(&self) -> NodeKind {
        match self.node {
            Node::ReadLine => NodeKind::ReadLine,
            Node::WriteLine(_) => NodeKind::WriteLine,
            Node::Point(_) => NodeKind::Point,
            Node::Sequence { .. } => NodeKind::Sequence,
        }
    }
}

// =============================================================================
// Console Primitives
// =============================================================================

impl Io<String> {
    /// Describes reading one line from the console.
    ///
    /// The line is not read until the description is interpreted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::effect::{Io, ScriptedConsole};
    ///
    /// let mut console = ScriptedConsole::with_input(["Ada"]);
    /// assert_eq!(Io::read_line().run(&mut console).unwrap(), "Ada");
    /// ```
    pub const fn read_line() -> Self {
        Self::from_node(Node::ReadLine)
    }

    /// Describes writing `question` and then reading the answer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::effect::{Io, ScriptedConsole};
    ///
    /// let mut console = ScriptedConsole::with_input(["blue"]);
    /// let answer = Io::prompt("Favourite colour?").run(&mut console).unwrap();
    ///
    /// assert_eq!(answer, "blue");
    /// assert_eq!(console.output(), ["Favourite colour?"]);
    /// ```
    pub fn prompt(question: impl Into<String>) -> Self {
        Io::write_line(question).then(Self::read_line())
    }
}

impl Io<()> {
    /// Describes writing one line to the console.
    ///
    /// The output is not written until the description is interpreted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::effect::{Io, ScriptedConsole};
    ///
    /// let mut console = ScriptedConsole::new();
    /// Io::write_line("Hello, World!").run(&mut console).unwrap();
    /// assert_eq!(console.output(), ["Hello, World!"]);
    /// ```
    pub fn write_line(text: impl Into<String>) -> Self {
        Self::from_node(Node::WriteLine(text.into()))
    }
}

// =============================================================================
// Injection and Sequencing
// =============================================================================

impl<A: 'static> Io<A> {
    /// Wraps a pure value without any effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::effect::{Io, ScriptedConsole};
    ///
    /// let mut console = ScriptedConsole::new();
    /// assert_eq!(Io::point(42).run(&mut console).unwrap(), 42);
    /// assert!(console.calls().is_empty());
    /// ```
    pub fn point(value: A) -> Self {
        Self::from_node(Node::Point(Box::new(value)))
    }

    /// Sequences this description with a continuation on its result.
    ///
    /// Builds a `Sequence` node. `function` is stored, not called: it runs
    /// exactly once, when interpretation has produced this description's
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::effect::{Io, ScriptedConsole};
    ///
    /// let echo = Io::read_line().bind(Io::write_line);
    ///
    /// let mut console = ScriptedConsole::with_input(["ping"]);
    /// echo.run(&mut console).unwrap();
    /// assert_eq!(console.output(), ["ping"]);
    /// ```
    ///
    /// # Panics
    ///
    /// The stored continuation panics if it receives a value of another type
    /// than `A`. The typed constructors make this unreachable.
    pub fn bind<B: 'static, F>(self, function: F) -> Io<B>
    where
        F: FnOnce(A) -> Io<B> + 'static,
    {
        let continuation: Continuation = Box::new(move |value: Erased| {
            let value = *value
                .downcast::<A>()
                .expect("Type mismatch in sequence continuation");
            function(value).into_node()
        });
        Io::from_node(Node::Sequence {
            first: Box::new(self.into_node()),
            continuation,
        })
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the result with a pure function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::effect::{Io, ScriptedConsole};
    ///
    /// let io = Io::point(21).map(|x| x * 2);
    /// assert_eq!(io.run(&mut ScriptedConsole::new()).unwrap(), 42);
    /// ```
    pub fn map<B: 'static, F>(self, function: F) -> Io<B>
    where
        F: FnOnce(A) -> B + 'static,
    {
        combinators::map::<IoKind, A, B, F>(self, function)
    }

    /// Sequences two descriptions, discarding the result of the first.
    ///
    /// The first description still runs for its effects.
    pub fn then<B: 'static>(self, next: Io<B>) -> Io<B> {
        combinators::then::<IoKind, A, B>(self, next)
    }

    /// Discards the result, keeping the effects.
    pub fn void(self) -> Io<()> {
        combinators::void::<IoKind, A>(self)
    }

    /// Combines two descriptions using a function; `self` runs first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::effect::{Io, ScriptedConsole};
    ///
    /// let io = Io::read_line().map2(Io::read_line(), |a, b| format!("{a}-{b}"));
    ///
    /// let mut console = ScriptedConsole::with_input(["left", "right"]);
    /// assert_eq!(io.run(&mut console).unwrap(), "left-right");
    /// ```
    pub fn map2<B: 'static, C: 'static, F>(self, other: Io<B>, function: F) -> Io<C>
    where
        F: FnOnce(A, B) -> C + 'static,
    {
        combinators::map2::<IoKind, A, B, C, F>(self, other, function)
    }

    /// Combines two descriptions into a tuple.
    pub fn product<B: 'static>(self, other: Io<B>) -> Io<(A, B)> {
        combinators::product::<IoKind, A, B>(self, other)
    }
}

impl<A: 'static> Io<Io<A>> {
    /// Collapses a description of a description.
    pub fn flatten(self) -> Io<A> {
        combinators::flatten::<IoKind, A>(self)
    }
}

impl<A: 'static> Io<Vec<A>> {
    /// Sequences descriptions left to right and collects their results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::effect::{Io, ScriptedConsole};
    ///
    /// let io = Io::sequence(vec![Io::read_line(), Io::read_line()]);
    ///
    /// let mut console = ScriptedConsole::with_input(["a", "b"]);
    /// assert_eq!(io.run(&mut console).unwrap(), ["a", "b"]);
    /// ```
    pub fn sequence<I>(effects: I) -> Self
    where
        I: IntoIterator<Item = Io<A>>,
    {
        combinators::sequence::<IoKind, A, I>(effects)
    }
}

impl Io<()> {
    /// Runs `action` only when `condition` holds.
    pub fn when(condition: bool, action: Self) -> Self {
        combinators::when::<IoKind>(condition, action)
    }

    /// Runs `action` only when `condition` does not hold.
    pub fn unless(condition: bool, action: Self) -> Self {
        combinators::unless::<IoKind>(condition, action)
    }

    /// Writes every line in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::effect::{Io, ScriptedConsole};
    ///
    /// let mut console = ScriptedConsole::new();
    /// Io::write_lines(["one", "two"]).run(&mut console).unwrap();
    /// assert_eq!(console.output(), ["one", "two"]);
    /// ```
    pub fn write_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        combinators::for_each::<IoKind, S, I, _>(lines, |line: S| Self::write_line(line))
    }
}

// =============================================================================
// IoKind
// =============================================================================

/// Brand for [`Io`], connecting it to the [`Monad`] capability contract.
///
/// # Examples
///
/// ```rust
/// use inert::effect::{Io, IoKind, ScriptedConsole};
/// use inert::typeclass::{Monad, combinators};
///
/// let lines = combinators::replicate::<IoKind, String, _>(2, Io::read_line);
///
/// let mut console = ScriptedConsole::with_input(["x", "y"]);
/// assert_eq!(lines.run(&mut console).unwrap(), ["x", "y"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IoKind;

impl TypeConstructor for IoKind {
    type WithType<A: 'static> = Io<A>;
}

impl Monad for IoKind {
    #[inline]
    fn point<A: 'static>(value: A) -> Io<A> {
        Io::point(value)
    }

    #[inline]
    fn bind<A: 'static, B: 'static, F>(effect: Io<A>, function: F) -> Io<B>
    where
        F: FnOnce(A) -> Io<B> + 'static,
    {
        effect.bind(function)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<A> Drop for Io<A> {
    fn drop(&mut self) {
        // Only `first` nests nodes directly; continuations own their own `Io`s.
        let mut node = mem::replace(&mut self.node, Node::ReadLine);
        while let Node::Sequence { first, continuation } = node {
            drop(continuation);
            node = *first;
        }
    }
}

impl<A> Debug for Io<A> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match &self.node {
            Node::ReadLine => formatter.write_str("ReadLine"),
            Node::WriteLine(text) => formatter.debug_tuple("WriteLine").field(text).finish(),
            Node::Point(_) => formatter.debug_tuple("Point").field(&"<value>").finish(),
            Node::Sequence { .. } => formatter
                .debug_tuple("Sequence")
                .field(&"<continuation>")
                .finish(),
        }
    }
}

static_assertions::assert_not_impl_any!(Io<()>: Send, Sync, Clone);
