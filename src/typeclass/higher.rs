//! Higher-Kinded Type emulation through brand types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types (HKT)
//! in Rust using Generic Associated Types (GAT). This is essential for defining
//! the [`Monad`](super::Monad) capability once and implementing it for every
//! effect-description type.
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types. We cannot write a trait
//! that abstracts over `Io<_>` or `Option<_>` as type constructors. Instead,
//! each constructor is represented by a zero-sized *brand* type, and the brand
//! names the applied type through a GAT:
//!
//! ```text
//! OptionKind::WithType<A> == Option<A>
//! IoKind::WithType<A>     == Io<A>
//! ```
//!
//! Because the brand is a separate type, generic code can name `M::WithType<A>`
//! and `M::WithType<B>` for the same `M`, which is exactly what `bind` needs.
//!
//! # Example
//!
//! ```rust
//! use inert::typeclass::{OptionKind, TypeConstructor};
//!
//! fn nothing<M: TypeConstructor>() -> M::WithType<String>
//! where
//!     M::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = nothing::<OptionKind>();
//! assert_eq!(none, None);
//! ```

/// A trait representing a type constructor through its brand.
///
/// Implementors are uninhabited or zero-sized marker types; the constructor
/// they stand for is reached through [`WithType`](TypeConstructor::WithType).
///
/// The applied type is required to be `'static` because effect descriptions
/// store their continuations as boxed `'static` closures, and generic
/// combinators move applied values into such closures.
///
/// # Laws
///
/// For any `M: TypeConstructor`:
///
/// 1. **Uniformity**: `M::WithType<A>` and `M::WithType<B>` are the same
///    constructor applied to different arguments.
///
/// # Example
///
/// ```rust
/// use inert::typeclass::{OptionKind, TypeConstructor};
///
/// fn assert_option<T>()
/// where
///     OptionKind: TypeConstructor<WithType<T> = Option<T>>,
///     T: 'static,
/// {
/// }
///
/// assert_option::<i32>();
/// ```
pub trait TypeConstructor {
    /// The constructor applied to `A`.
    ///
    /// For `OptionKind`, `WithType<i32>` is `Option<i32>`.
    type WithType<A: 'static>: 'static;
}
