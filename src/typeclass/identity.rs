//! Identity wrapper type - the identity monad.
//!
//! This module provides the `Identity` type, the simplest possible
//! wrapper around a value. It serves as:
//!
//! - A simple model for testing the capability laws
//! - A way to express "no additional effect": binding runs the continuation
//!   right away and nothing else happens

use super::{Monad, TypeConstructor};

/// The identity monad - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use inert::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies `function` to the wrapped value.
    ///
    /// This is the method form of [`IdentityKind::bind`], which lets
    /// `Identity` be used with the [`eff!`](crate::eff) macro.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inert::typeclass::Identity;
    ///
    /// let result = Identity::new(20).bind(|n| Identity::new(n + 1));
    /// assert_eq!(result, Identity(21));
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// IdentityKind
// =============================================================================

/// Brand for [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityKind;

impl TypeConstructor for IdentityKind {
    type WithType<A: 'static> = Identity<A>;
}

impl Monad for IdentityKind {
    #[inline]
    fn point<A: 'static>(value: A) -> Identity<A> {
        Identity(value)
    }

    #[inline]
    fn bind<A: 'static, B: 'static, F>(effect: Identity<A>, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B> + 'static,
    {
        effect.bind(function)
    }
}
