//! Generic combinators built only from `point` and `bind`.
//!
//! Every function here is written against `M: Monad` and knows nothing about
//! the concrete effect variants of `M`. Applied to [`IoKind`](crate::effect::IoKind)
//! they build larger descriptions without running anything; applied to
//! [`OptionKind`](super::OptionKind) they compute immediately.
//!
//! The brand cannot be inferred from an applied type, so callers name it:
//!
//! ```rust
//! use inert::typeclass::{OptionKind, combinators};
//!
//! let doubled = combinators::map::<OptionKind, _, _, _>(Some(21), |n: i32| n * 2);
//! assert_eq!(doubled, Some(42));
//! ```
//!
//! # Ordering
//!
//! Combinators that take several descriptions (`map2`, `sequence`,
//! `traverse`, `for_each`, `fold_m`) sequence them left to right: every
//! effect of an earlier description happens before any effect of a later one.

use super::Monad;

/// Applies a pure function to the result (Functor `fmap`).
///
/// # Examples
///
/// ```rust
/// use inert::typeclass::{OptionKind, combinators};
///
/// let length = combinators::map::<OptionKind, _, _, _>(Some("four"), str::len);
/// assert_eq!(length, Some(4));
/// ```
pub fn map<M, A, B, F>(effect: M::WithType<A>, function: F) -> M::WithType<B>
where
    M: Monad,
    A: 'static,
    B: 'static,
    F: FnOnce(A) -> B + 'static,
{
    M::bind::<A, B, _>(effect, move |value: A| M::point::<B>(function(value)))
}

/// Sequences two descriptions, discarding the result of the first (Haskell's `>>`).
///
/// The first description still runs for its effects.
pub fn then<M, A, B>(first: M::WithType<A>, next: M::WithType<B>) -> M::WithType<B>
where
    M: Monad,
    A: 'static,
    B: 'static,
{
    M::bind::<A, B, _>(first, move |_: A| next)
}

/// Discards the result, keeping the effects.
pub fn void<M, A>(effect: M::WithType<A>) -> M::WithType<()>
where
    M: Monad,
    A: 'static,
{
    map::<M, A, (), _>(effect, |_: A| ())
}

/// Collapses one level of nesting (Haskell's `join`).
///
/// # Examples
///
/// ```rust
/// use inert::typeclass::{OptionKind, combinators};
///
/// assert_eq!(combinators::flatten::<OptionKind, i32>(Some(Some(3))), Some(3));
/// assert_eq!(combinators::flatten::<OptionKind, i32>(Some(None)), None);
/// ```
pub fn flatten<M, A>(nested: M::WithType<M::WithType<A>>) -> M::WithType<A>
where
    M: Monad,
    A: 'static,
{
    M::bind::<M::WithType<A>, A, _>(nested, |inner: M::WithType<A>| inner)
}

/// Combines the results of two descriptions with a function.
///
/// `first` is sequenced before `second`.
///
/// # Examples
///
/// ```rust
/// use inert::typeclass::{OptionKind, combinators};
///
/// let sum = combinators::map2::<OptionKind, _, _, _, _>(Some(1), Some(2), |a: i32, b: i32| a + b);
/// assert_eq!(sum, Some(3));
/// ```
pub fn map2<M, A, B, C, F>(
    first: M::WithType<A>,
    second: M::WithType<B>,
    function: F,
) -> M::WithType<C>
where
    M: Monad,
    A: 'static,
    B: 'static,
    C: 'static,
    F: FnOnce(A, B) -> C + 'static,
{
    M::bind::<A, C, _>(first, move |a: A| {
        map::<M, B, C, _>(second, move |b: B| function(a, b))
    })
}

/// Pairs the results of two descriptions.
pub fn product<M, A, B>(first: M::WithType<A>, second: M::WithType<B>) -> M::WithType<(A, B)>
where
    M: Monad,
    A: 'static,
    B: 'static,
{
    map2::<M, A, B, (A, B), _>(first, second, |a, b| (a, b))
}

/// Runs `action` only when `condition` holds; otherwise `point(())`.
///
/// # Examples
///
/// ```rust
/// use inert::typeclass::{OptionKind, combinators};
///
/// assert_eq!(combinators::when::<OptionKind>(false, None), Some(()));
/// assert_eq!(combinators::when::<OptionKind>(true, None), None);
/// ```
pub fn when<M>(condition: bool, action: M::WithType<()>) -> M::WithType<()>
where
    M: Monad,
{
    if condition { action } else { M::point::<()>(()) }
}

/// Runs `action` only when `condition` does not hold.
pub fn unless<M>(condition: bool, action: M::WithType<()>) -> M::WithType<()>
where
    M: Monad,
{
    when::<M>(!condition, action)
}

/// Sequences descriptions left to right and collects their results.
///
/// An empty input yields `point(Vec::new())`.
///
/// # Examples
///
/// ```rust
/// use inert::typeclass::{OptionKind, combinators};
///
/// let all = combinators::sequence::<OptionKind, i32, _>(vec![Some(1), Some(2), Some(3)]);
/// assert_eq!(all, Some(vec![1, 2, 3]));
///
/// let missing = combinators::sequence::<OptionKind, i32, _>(vec![Some(1), None]);
/// assert_eq!(missing, None);
/// ```
pub fn sequence<M, A, I>(effects: I) -> M::WithType<Vec<A>>
where
    M: Monad,
    A: 'static,
    I: IntoIterator<Item = M::WithType<A>>,
{
    effects
        .into_iter()
        .fold(M::point::<Vec<A>>(Vec::new()), |accumulated, effect| {
            M::bind::<Vec<A>, Vec<A>, _>(accumulated, move |mut values: Vec<A>| {
                map::<M, A, Vec<A>, _>(effect, move |value: A| {
                    values.push(value);
                    values
                })
            })
        })
}

/// Maps every item to a description, then sequences them.
///
/// `function` is called once per item while building; for lazy instances
/// that only constructs descriptions.
pub fn traverse<M, T, B, I, F>(items: I, function: F) -> M::WithType<Vec<B>>
where
    M: Monad,
    B: 'static,
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> M::WithType<B>,
{
    sequence::<M, B, _>(items.into_iter().map(function))
}

/// Like [`traverse`] but keeps only the effects.
///
/// # Examples
///
/// ```rust
/// use inert::typeclass::{OptionKind, combinators};
///
/// let checked = combinators::for_each::<OptionKind, _, _, _>(vec![1, 2, 3], |n: i32| {
///     (n > 0).then_some(())
/// });
/// assert_eq!(checked, Some(()));
/// ```
pub fn for_each<M, T, I, F>(items: I, function: F) -> M::WithType<()>
where
    M: Monad,
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> M::WithType<()>,
{
    items
        .into_iter()
        .map(function)
        .fold(M::point::<()>(()), |accumulated, effect| {
            then::<M, (), ()>(accumulated, effect)
        })
}

/// Builds `count` descriptions from `factory` and collects their results.
pub fn replicate<M, A, F>(count: usize, mut factory: F) -> M::WithType<Vec<A>>
where
    M: Monad,
    A: 'static,
    F: FnMut() -> M::WithType<A>,
{
    sequence::<M, A, _>((0..count).map(|_| factory()))
}

/// Effectful left fold.
///
/// Each step's description depends on the previous step's value, so
/// `function` is called lazily: once per item, only after the accumulated
/// value for that step exists.
///
/// # Examples
///
/// ```rust
/// use inert::typeclass::{OptionKind, combinators};
///
/// let total = combinators::fold_m::<OptionKind, _, _, _, _>(vec![1, 2, 3], 0, |sum: i32, n: i32| {
///     sum.checked_add(n)
/// });
/// assert_eq!(total, Some(6));
/// ```
pub fn fold_m<M, T, B, I, F>(items: I, initial: B, function: F) -> M::WithType<B>
where
    M: Monad,
    T: 'static,
    B: 'static,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
    F: FnMut(B, T) -> M::WithType<B> + 'static,
{
    fold_step::<M, T, B, I::IntoIter, F>(items.into_iter(), initial, function)
}

fn fold_step<M, T, B, It, F>(mut items: It, accumulated: B, mut function: F) -> M::WithType<B>
where
    M: Monad,
    T: 'static,
    B: 'static,
    It: Iterator<Item = T> + 'static,
    F: FnMut(B, T) -> M::WithType<B> + 'static,
{
    match items.next() {
        None => M::point::<B>(accumulated),
        Some(item) => {
            let step = function(accumulated, item);
            M::bind::<B, B, _>(step, move |next: B| {
                fold_step::<M, T, B, It, F>(items, next, function)
            })
        }
    }
}
