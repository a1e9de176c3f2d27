//! Type class traits for composing effect descriptions.
//!
//! This module provides the capability contract that effect-description
//! types implement, and the combinators written against it:
//!
//! - [`TypeConstructor`]: Brand-based emulation of higher-kinded types
//! - [`Monad`]: Injection (`point`) and sequencing (`bind`)
//! - [`combinators`]: `map`, `then`, `sequence`, `traverse`, `fold_m`, ...
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! Each type constructor is represented by a zero-sized brand type whose
//! generic associated type names the applied constructor, allowing `Monad`
//! to be defined once for `Io<_>`, `Option<_>` and `Identity<_>`.
//!
//! ## Instances
//!
//! - [`OptionKind`]: `Option<A>`, strict and short-circuiting
//! - [`IdentityKind`]: [`Identity<A>`], no effect at all
//! - [`IoKind`](crate::effect::IoKind): `Io<A>`, inert console descriptions
//!
//! # Examples
//!
//! ```rust
//! use inert::typeclass::{IdentityKind, Identity, Monad, combinators};
//!
//! let pair = combinators::product::<IdentityKind, _, _>(
//!     IdentityKind::point(1),
//!     Identity::new("one"),
//! );
//! assert_eq!(pair, Identity((1, "one")));
//! ```

pub mod combinators;
mod higher;
mod identity;
mod monad;

pub use higher::TypeConstructor;
pub use identity::{Identity, IdentityKind};
pub use monad::{Monad, OptionKind};
