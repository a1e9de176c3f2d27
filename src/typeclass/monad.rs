//! Monad type class - the capability contract for sequencing descriptions.
//!
//! This module provides the `Monad` trait, the two-operation interface any
//! effect-description type constructor supplies to take part in generic
//! composition:
//!
//! - `point`: injection of a pure value with zero effect
//! - `bind`: sequencing of one description into a value-dependent follow-up
//!
//! Neither operation runs anything. For descriptions such as
//! [`Io`](crate::effect::Io) both only build data; an interpreter decides
//! later what actually happens.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws. For descriptions,
//! "equals" means "performs the same effects in the same order and produces
//! the same value when interpreted"; trees are not compared structurally.
//!
//! ## Left Identity Law
//!
//! ```text
//! bind(point(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! bind(m, point) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use inert::typeclass::{Monad, OptionKind};
//!
//! let x = OptionKind::point(5);
//! let y = OptionKind::bind(x, |n: i32| if n > 0 { Some(n * 2) } else { None });
//! assert_eq!(y, Some(10));
//! ```

use super::higher::TypeConstructor;

/// The capability contract: injection and sequencing for a type constructor.
///
/// `Monad` is implemented on a brand type (see [`TypeConstructor`]), one
/// implementation per effect-description type. There is no shared base type;
/// generic code is written against `M: Monad` and works for every instance.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// M::bind(M::point(a), f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// M::bind(m, M::point) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// M::bind(M::bind(m, f), g) == M::bind(m, |x| M::bind(f(x), g))
/// ```
///
/// # Examples
///
/// ```rust
/// use inert::typeclass::{Monad, TypeConstructor};
///
/// fn increment<M: Monad>(value: M::WithType<i32>) -> M::WithType<i32> {
///     M::bind::<i32, i32, _>(value, |n| M::point::<i32>(n + 1))
/// }
///
/// assert_eq!(increment::<inert::typeclass::OptionKind>(Some(41)), Some(42));
/// ```
pub trait Monad: TypeConstructor {
    /// Lifts a pure value into the constructor without any effect.
    ///
    /// In Haskell this is `return`/`pure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::typeclass::{Monad, OptionKind};
    ///
    /// assert_eq!(OptionKind::point(42), Some(42));
    /// ```
    fn point<A: 'static>(value: A) -> Self::WithType<A>;

    /// Sequences `effect` with a continuation that depends on its value.
    ///
    /// In Haskell this is `>>=`. Implementations for descriptions must not
    /// call `function` here; it runs only when the value of `effect` exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::typeclass::{Monad, OptionKind};
    ///
    /// let doubled = OptionKind::bind(Some(21), |n: i32| Some(n * 2));
    /// assert_eq!(doubled, Some(42));
    /// ```
    fn bind<A: 'static, B: 'static, F>(
        effect: Self::WithType<A>,
        function: F,
    ) -> Self::WithType<B>
    where
        F: FnOnce(A) -> Self::WithType<B> + 'static;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

/// Brand for [`Option`].
///
/// `Option` is a strict instance: `bind` runs the continuation immediately,
/// which makes it a convenient check that combinators do not depend on any
/// particular evaluation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionKind;

impl TypeConstructor for OptionKind {
    type WithType<A: 'static> = Option<A>;
}

impl Monad for OptionKind {
    #[inline]
    fn point<A: 'static>(value: A) -> Option<A> {
        Some(value)
    }

    #[inline]
    fn bind<A: 'static, B: 'static, F>(effect: Option<A>, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B> + 'static,
    {
        // Delegate to Option's built-in and_then
        effect.and_then(function)
    }
}
