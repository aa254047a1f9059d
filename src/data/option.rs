//! Optional values: functions on `Option<A>` and its brand [`OptionKind`].
//!
//! Absence is data, never an exception: none of the functions below panics.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::option;
//!
//! let port = option::flat_map(option::from_nullable::<&str, _>(Some("8080")), |text| text.parse::<u16>().ok());
//! assert_eq!(option::get_or_else(port, 80), 8080);
//!
//! let missing: Option<u16> = option::none();
//! assert_eq!(option::fold(missing, || "absent".to_string(), |port| port.to_string()), "absent");
//! ```

use crate::error::catch_panic;
use crate::typeclass::{
    Alt, Applicative, Apply, Compactable, Filterable, Flattenable, Foldable, Functor, Kind,
    Pointed, Traversable, Zero,
};

/// The absent value.
#[inline]
pub const fn none<A>() -> Option<A> {
    None
}

/// Wraps a present value.
#[inline]
pub const fn some<A>(value: A) -> Option<A> {
    Some(value)
}

/// Returns `true` when a value is present.
#[inline]
pub const fn is_some<A>(option: &Option<A>) -> bool {
    option.is_some()
}

/// Returns `true` when no value is present.
#[inline]
pub const fn is_none<A>(option: &Option<A>) -> bool {
    option.is_none()
}

/// Total elimination: `on_none` for `None`, `on_some` for `Some`.
pub fn fold<A, B>(option: Option<A>, on_none: impl FnOnce() -> B, on_some: impl FnOnce(A) -> B) -> B {
    match option {
        Some(value) => on_some(value),
        None => on_none(),
    }
}

/// Maps the present value.
pub fn map<A, B>(option: Option<A>, function: impl FnOnce(A) -> B) -> Option<B> {
    option.map(function)
}

/// Chains a computation that may itself be absent.
pub fn flat_map<A, B>(option: Option<A>, function: impl FnOnce(A) -> Option<B>) -> Option<B> {
    option.and_then(function)
}

/// Returns the present value or `default`.
pub fn get_or_else<A>(option: Option<A>, default: A) -> A {
    option.unwrap_or(default)
}

/// Returns the present value or computes one.
pub fn get_or_else_with<A>(option: Option<A>, default: impl FnOnce() -> A) -> A {
    option.unwrap_or_else(default)
}

/// Bridges nullable data into the algebra.
///
/// Anything convertible into an `Option` is accepted: a plain value becomes
/// `Some`, an `Option` is kept as is.
///
/// An `Option` argument converts both ways (`Option<A>` into `Option<A>`,
/// or as a plain value into `Option<Option<A>>`), so the element type has to
/// be known from context. Annotate the result or write
/// `from_nullable::<A, _>(option)`; without either the call does not
/// type-check.
///
/// # Examples
///
/// ```rust
/// use kindred::data::option::from_nullable;
///
/// let present: Option<i32> = from_nullable(3);
/// let absent: Option<i32> = from_nullable(None::<i32>);
/// assert_eq!(present, Some(3));
/// assert_eq!(absent, None);
///
/// let kept = from_nullable::<&str, _>(Some("host"));
/// assert_eq!(kept, Some("host"));
/// ```
pub fn from_nullable<A, N: Into<Option<A>>>(value: N) -> Option<A> {
    value.into()
}

/// `Some(value)` when `predicate` holds, `None` otherwise.
pub fn from_predicate<A>(value: A, predicate: impl FnOnce(&A) -> bool) -> Option<A> {
    if predicate(&value) { Some(value) } else { None }
}

/// Keeps the success value and forgets the error.
pub fn from_result<A, E>(result: Result<A, E>) -> Option<A> {
    result.ok()
}

/// Turns absence into the failure produced by `on_none`.
pub fn to_result<A, E>(option: Option<A>, on_none: impl FnOnce() -> E) -> Result<A, E> {
    option.ok_or_else(on_none)
}

/// `option` if present, else `that()`.
pub fn or_else<A>(option: Option<A>, that: impl FnOnce() -> Option<A>) -> Option<A> {
    option.or_else(that)
}

/// Keeps the value only if it satisfies `predicate`.
pub fn filter<A>(option: Option<A>, predicate: impl FnOnce(&A) -> bool) -> Option<A> {
    option.filter(predicate)
}

/// Runs a dependent optional computation and keeps the original value when
/// it is present.
///
/// # Examples
///
/// ```rust
/// use kindred::data::option::tap;
///
/// assert_eq!(tap(Some(4), |n| (*n > 0).then_some(())), Some(4));
/// assert_eq!(tap(Some(-4), |n| (*n > 0).then_some(())), None);
/// ```
pub fn tap<A, B>(option: Option<A>, function: impl FnOnce(&A) -> Option<B>) -> Option<A> {
    option.and_then(|value| function(&value).map(|_| value))
}

/// Combines two present values.
pub fn zip_with<A, B, C>(first: Option<A>, second: Option<B>, function: impl FnOnce(A, B) -> C) -> Option<C> {
    first.zip(second).map(|(a, b)| function(a, b))
}

/// Removes one level of nesting.
pub fn flatten<A>(option: Option<Option<A>>) -> Option<A> {
    option.flatten()
}

/// Returns `true` if a value is present and satisfies `predicate`.
pub fn exists<A>(option: &Option<A>, predicate: impl FnOnce(&A) -> bool) -> bool {
    option.as_ref().is_some_and(predicate)
}

/// Applies `function` to every item in order and stops at the first `None`.
///
/// # Examples
///
/// ```rust
/// use kindred::data::option::traverse_array;
///
/// let parse = |text: &str| text.parse::<i32>().ok();
/// assert_eq!(traverse_array(vec!["1", "2"], parse), Some(vec![1, 2]));
/// assert_eq!(traverse_array(vec!["1", "x"], parse), None);
/// ```
pub fn traverse_array<A, B>(items: Vec<A>, mut function: impl FnMut(A) -> Option<B>) -> Option<Vec<B>> {
    let mut collected = Vec::with_capacity(items.len());
    for item in items {
        collected.push(function(item)?);
    }
    Some(collected)
}

/// `Some` of every value if all are present.
pub fn sequence_array<A>(items: Vec<Option<A>>) -> Option<Vec<A>> {
    traverse_array(items, |item| item)
}

/// Runs `thunk`; a panic becomes `None`.
///
/// # Examples
///
/// ```rust
/// use kindred::data::option::from_throwable;
///
/// let items = vec![1, 2, 3];
/// assert_eq!(from_throwable(|| items[1]), Some(2));
/// assert_eq!(from_throwable(|| items[10]), None);
/// ```
pub fn from_throwable<A>(thunk: impl FnOnce() -> A) -> Option<A> {
    catch_panic(thunk).ok()
}

// =============================================================================
// OptionKind
// =============================================================================

/// Brand of `Option`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionKind;

impl Kind for OptionKind {
    type Of<A: 'static> = Option<A>;
}

impl Functor for OptionKind {
    fn map<A, B, F>(&self, fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Pointed for OptionKind {
    fn of<A: 'static>(&self, value: A) -> Option<A> {
        Some(value)
    }
}

impl Apply for OptionKind {
    fn map2<A, B, C, F>(&self, fa: Option<A>, fb: Option<B>, function: F) -> Option<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        zip_with(fa, fb, function)
    }
}

impl Flattenable for OptionKind {
    fn flat_map<A, B, F>(&self, fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Option<B> + 'static,
    {
        fa.and_then(function)
    }
}

impl Alt for OptionKind {
    fn or_else<A, F>(&self, first: Option<A>, that: F) -> Option<A>
    where
        A: 'static,
        F: FnOnce() -> Option<A> + 'static,
    {
        first.or_else(that)
    }
}

impl Zero for OptionKind {
    fn zero<A: 'static>(&self) -> Option<A> {
        None
    }
}

impl Foldable for OptionKind {
    fn reduce<A, B, F>(&self, fa: Option<A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(B, A) -> B,
    {
        match fa {
            Some(value) => function(initial, value),
            None => initial,
        }
    }

    fn reduce_right<A, B, F>(&self, fa: Option<A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(A, B) -> B,
    {
        match fa {
            Some(value) => function(value, initial),
            None => initial,
        }
    }
}

impl Traversable for OptionKind {
    fn traverse<G, A, B, F>(&self, applicative: &G, ta: Option<A>, mut function: F) -> G::Of<Option<B>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> G::Of<B>,
    {
        match ta {
            Some(value) => applicative.map(function(value), Some),
            None => applicative.of(None),
        }
    }
}

impl Compactable for OptionKind {
    fn compact<A: 'static>(&self, foa: Option<Option<A>>) -> Option<A> {
        foa.flatten()
    }

    fn separate<E, A>(&self, fea: Option<Result<A, E>>) -> (Option<E>, Option<A>)
    where
        E: 'static,
        A: 'static,
    {
        match fea {
            Some(Ok(value)) => (None, Some(value)),
            Some(Err(error)) => (Some(error), None),
            None => (None, None),
        }
    }
}

impl Filterable for OptionKind {
    fn filter_map<A, B, F>(&self, fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Option<B>,
    {
        fa.and_then(function)
    }

    fn partition_map<A, B, C, F>(&self, fa: Option<A>, function: F) -> (Option<B>, Option<C>)
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnMut(A) -> Result<C, B>,
    {
        self.separate(fa.map(function))
    }
}

static_assertions::assert_impl_all!(
    OptionKind: crate::typeclass::Monad,
    crate::typeclass::Alternative,
    crate::typeclass::Traversable,
    crate::typeclass::Witherable
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::result::ResultKind;
    use crate::typeclass::Witherable;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(5), 5)]
    #[case(None, 0)]
    fn get_or_else_returns_default_only_when_absent(#[case] input: Option<i32>, #[case] expected: i32) {
        assert_eq!(get_or_else(input, 0), expected);
    }

    #[rstest]
    fn get_or_else_with_is_lazy() {
        let calls = Cell::new(0);
        let value = get_or_else_with(Some(1), || {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn from_nullable_round_trips_through_get_or_else() {
        let present: Option<&str> = from_nullable("x");
        let absent: Option<&str> = from_nullable(None::<&str>);
        assert_eq!(get_or_else(present, "default"), "x");
        assert_eq!(get_or_else(absent, "default"), "default");
    }

    #[rstest]
    fn from_nullable_keeps_an_option_unnested() {
        let annotated: Option<u16> = from_nullable(Some(8080_u16));
        assert_eq!(annotated, Some(8080));
        assert_eq!(from_nullable::<u16, _>(None::<u16>), None);
        let nested: Option<Option<u16>> = from_nullable(Some(8080_u16));
        assert_eq!(nested, Some(Some(8080)));
    }

    #[rstest]
    #[case(4, Some(4))]
    #[case(-4, None)]
    fn from_predicate_checks_value(#[case] input: i32, #[case] expected: Option<i32>) {
        assert_eq!(from_predicate(input, |n| *n > 0), expected);
    }

    #[rstest]
    fn to_result_and_from_result() {
        assert_eq!(to_result(None::<i32>, || "missing"), Err("missing"));
        assert_eq!(to_result(Some(1), || "missing"), Ok(1));
        assert_eq!(from_result(Err::<i32, _>("e")), None);
    }

    #[rstest]
    fn traverse_array_stops_at_first_none() {
        let calls = Cell::new(0);
        let traversed = traverse_array(vec![1, 0, 3], |n| {
            calls.set(calls.get() + 1);
            (n != 0).then(|| 10 / n)
        });
        assert_eq!(traversed, None);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn sequence_array_collects_all() {
        assert_eq!(sequence_array(vec![Some(1), Some(2)]), Some(vec![1, 2]));
        assert_eq!(sequence_array(Vec::<Option<i32>>::new()), Some(vec![]));
    }

    #[rstest]
    fn exists_and_zip_with() {
        assert!(exists(&Some(3), |n| *n == 3));
        assert!(!exists(&None::<i32>, |_| true));
        assert_eq!(zip_with(Some(2), Some(3), |a, b| a * b), Some(6));
        assert_eq!(zip_with(Some(2), None::<i32>, |a, b| a * b), None);
    }

    #[rstest]
    fn wither_on_option_uses_effect() {
        let brand = ResultKind::<String>::new();
        let kept = OptionKind.wither(&brand, Some(3), |n: i32| Ok::<_, String>((n > 2).then_some(n)));
        assert_eq!(kept, Ok(Some(3)));
        let dropped = OptionKind.wither(&brand, Some(1), |n: i32| Ok::<_, String>((n > 2).then_some(n)));
        assert_eq!(dropped, Ok(None));
    }
}
