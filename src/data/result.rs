//! Success or failure: functions on `Result<A, E>` and its brands.
//!
//! `Ok` is the success and `Err` the failure. Every combinator consumes its
//! input and produces a new value; a failure is threaded through explicitly
//! and never raised.
//!
//! Several brands describe the same `Result<A, E>` with different strategies:
//!
//! | Brand | Strategy |
//! |---|---|
//! | [`ResultKind`] | first error wins (`map2`), last error wins (`or_else`) |
//! | [`ValidatedApplicative`] | `map2`/`ap` combine both errors with `E`'s [`Semigroup`] |
//! | [`ValidatedAlt`] | `or_else` combines both errors with `E`'s [`Semigroup`] |
//! | [`ResultFilterable`] | filtering replaces dropped values with a caller-supplied error |
//! | [`ResultBifunctor`] | maps the error and the success value together |
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::result;
//! use kindred::typeclass::Apply;
//!
//! fn parse(text: &str) -> Result<i32, String> {
//!     text.parse().map_err(|_| format!("<{text}>"))
//! }
//!
//! let doubled = result::flat_map(parse("21"), |n| result::succeed(n * 2));
//! assert_eq!(doubled, Ok(42));
//!
//! let first = result::ResultKind::<String>::new().map2(parse("x"), parse("y"), |a, b| a + b);
//! assert_eq!(first, Err("<x>".to_string()));
//!
//! let every = result::validated_applicative::<String>().map2(parse("x"), parse("y"), |a, b| a + b);
//! assert_eq!(every, Err("<x><y>".to_string()));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::data::non_empty::NonEmptyVec;
use crate::error::{PanicError, catch_panic};
use crate::typeclass::{
    Alt, Applicative, Apply, Bifunctor, Compactable, Filterable, Flattenable, Foldable, Functor,
    Kind, Kind2, Pointed, Semigroup, Traversable,
};

/// A failed result.
#[inline]
pub const fn fail<A, E>(error: E) -> Result<A, E> {
    Err(error)
}

/// A successful result.
#[inline]
pub const fn succeed<A, E>(value: A) -> Result<A, E> {
    Ok(value)
}

/// Returns `true` for a success.
#[inline]
pub const fn is_success<A, E>(result: &Result<A, E>) -> bool {
    result.is_ok()
}

/// Returns `true` for a failure.
#[inline]
pub const fn is_failure<A, E>(result: &Result<A, E>) -> bool {
    result.is_err()
}

/// Total elimination: `on_error` for a failure, `on_success` for a success.
pub fn fold<A, E, B>(result: Result<A, E>, on_error: impl FnOnce(E) -> B, on_success: impl FnOnce(A) -> B) -> B {
    match result {
        Ok(value) => on_success(value),
        Err(error) => on_error(error),
    }
}

/// Maps the success value.
pub fn map<A, E, B>(result: Result<A, E>, function: impl FnOnce(A) -> B) -> Result<B, E> {
    result.map(function)
}

/// Maps the error.
pub fn map_error<A, E, E2>(result: Result<A, E>, function: impl FnOnce(E) -> E2) -> Result<A, E2> {
    result.map_err(function)
}

/// Maps whichever side is present.
pub fn map_both<A, E, B, E2>(
    result: Result<A, E>,
    on_error: impl FnOnce(E) -> E2,
    on_success: impl FnOnce(A) -> B,
) -> Result<B, E2> {
    match result {
        Ok(value) => Ok(on_success(value)),
        Err(error) => Err(on_error(error)),
    }
}

/// Chains a fallible computation. A failure is returned untouched and
/// `function` is never called.
pub fn flat_map<A, E, B>(result: Result<A, E>, function: impl FnOnce(A) -> Result<B, E>) -> Result<B, E> {
    result.and_then(function)
}

/// `result` if it succeeded, otherwise `that()`.
///
/// When both fail only the error of `that` survives; see [`validated_alt`]
/// to keep both.
pub fn or_else<A, E, E2>(result: Result<A, E>, that: impl FnOnce() -> Result<A, E2>) -> Result<A, E2> {
    result.or_else(|_| that())
}

/// Recovers from a failure with a computation that sees the error.
pub fn catch_all<A, E, E2>(result: Result<A, E>, handler: impl FnOnce(E) -> Result<A, E2>) -> Result<A, E2> {
    result.or_else(handler)
}

/// Returns the success value or `default`.
pub fn get_or_else<A, E>(result: Result<A, E>, default: A) -> A {
    result.unwrap_or(default)
}

/// Returns the success value or derives one from the error.
pub fn get_or_else_with<A, E>(result: Result<A, E>, on_error: impl FnOnce(E) -> A) -> A {
    result.unwrap_or_else(on_error)
}

/// Turns absence into the failure produced by `on_none`.
pub fn from_option<A, E>(option: Option<A>, on_none: impl FnOnce() -> E) -> Result<A, E> {
    option.ok_or_else(on_none)
}

/// Succeeds with `value` when `predicate` holds, otherwise fails with
/// `on_false(value)`.
pub fn from_predicate<A, E>(
    value: A,
    predicate: impl FnOnce(&A) -> bool,
    on_false: impl FnOnce(A) -> E,
) -> Result<A, E> {
    if predicate(&value) { Ok(value) } else { Err(on_false(value)) }
}

/// Exchanges the two sides.
pub fn swap<A, E>(result: Result<A, E>) -> Result<E, A> {
    match result {
        Ok(value) => Err(value),
        Err(error) => Ok(error),
    }
}

/// Runs a dependent check on the success value and keeps the value.
pub fn tap<A, E, B>(result: Result<A, E>, function: impl FnOnce(&A) -> Result<B, E>) -> Result<A, E> {
    result.and_then(|value| function(&value).map(|_| value))
}

/// Runs a dependent computation on the error. The original error is kept
/// unless that computation fails itself.
///
/// # Examples
///
/// ```rust
/// use kindred::data::result::tap_error;
///
/// let logged = tap_error(Err::<i32, _>("timeout"), |_| Ok::<_, &str>(()));
/// assert_eq!(logged, Err("timeout"));
///
/// let replaced = tap_error(Err::<i32, _>("timeout"), |_| Err::<(), _>("log unavailable"));
/// assert_eq!(replaced, Err("log unavailable"));
/// ```
pub fn tap_error<A, E, B>(result: Result<A, E>, function: impl FnOnce(&E) -> Result<B, E>) -> Result<A, E> {
    match result {
        Ok(value) => Ok(value),
        Err(error) => match function(&error) {
            Ok(_) => Err(error),
            Err(replacement) => Err(replacement),
        },
    }
}

/// Fails with `on_false(value)` when the success value does not satisfy
/// `predicate`.
pub fn filter_or_else<A, E>(
    result: Result<A, E>,
    predicate: impl FnOnce(&A) -> bool,
    on_false: impl FnOnce(A) -> E,
) -> Result<A, E> {
    result.and_then(|value| from_predicate(value, predicate, on_false))
}

/// Removes one level of nesting.
pub fn flatten<A, E>(result: Result<Result<A, E>, E>) -> Result<A, E> {
    result.and_then(|inner| inner)
}

/// Combines two successes; the first failure by position wins.
pub fn zip_with<A, B, C, E>(
    first: Result<A, E>,
    second: Result<B, E>,
    function: impl FnOnce(A, B) -> C,
) -> Result<C, E> {
    Ok(function(first?, second?))
}

/// The success value, if any.
pub fn get_success<A, E>(result: Result<A, E>) -> Option<A> {
    result.ok()
}

/// The error, if any.
pub fn get_failure<A, E>(result: Result<A, E>) -> Option<E> {
    result.err()
}

/// Applies `function` to the items in index order and stops at the first
/// failure; later items are never visited.
///
/// # Examples
///
/// ```rust
/// use kindred::data::result::{fail, succeed, traverse_array};
///
/// let check = |n: i32| if n >= 0 { succeed(n) } else { fail("neg") };
/// assert_eq!(traverse_array(vec![1, 2, 3], check), Ok(vec![1, 2, 3]));
/// assert_eq!(traverse_array(vec![1, -2, 3], check), Err("neg"));
/// ```
pub fn traverse_array<A, B, E>(items: Vec<A>, mut function: impl FnMut(A) -> Result<B, E>) -> Result<Vec<B>, E> {
    traverse_array_with_index(items, |_, item| function(item))
}

/// [`traverse_array`] with the index of every item.
pub fn traverse_array_with_index<A, B, E>(
    items: Vec<A>,
    mut function: impl FnMut(usize, A) -> Result<B, E>,
) -> Result<Vec<B>, E> {
    let mut collected = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        collected.push(function(index, item)?);
    }
    Ok(collected)
}

/// All successes, or the first failure.
pub fn sequence_array<A, E>(items: Vec<Result<A, E>>) -> Result<Vec<A>, E> {
    traverse_array(items, |item| item)
}

/// [`traverse_array`] over a non-empty vector; the output stays non-empty.
pub fn traverse_non_empty<A, B, E>(
    items: NonEmptyVec<A>,
    mut function: impl FnMut(A) -> Result<B, E>,
) -> Result<NonEmptyVec<B>, E> {
    let (head, tail) = items.into_parts();
    let head = function(head)?;
    let tail = traverse_array(tail, function)?;
    Ok(NonEmptyVec::new(head, tail))
}

/// Runs `thunk`, converting a panic into a failure through `on_panic`.
///
/// This is a boundary: the only place, together with [`lift_throwable`],
/// where a panic of the callee becomes data.
///
/// # Examples
///
/// ```rust
/// use kindred::data::result::try_catch;
///
/// let items: Vec<i32> = Vec::new();
/// let outcome = try_catch(|| items[0], |error| error.message);
/// assert!(outcome.unwrap_err().contains("index out of bounds"));
/// ```
pub fn try_catch<A, E>(thunk: impl FnOnce() -> A, on_panic: impl FnOnce(PanicError) -> E) -> Result<A, E> {
    catch_panic(thunk).map_err(on_panic)
}

/// Turns a function that may panic into one returning `Result`.
///
/// # Examples
///
/// ```rust
/// use kindred::data::result::lift_throwable;
///
/// let mut head = lift_throwable(|items: Vec<i32>| items[0], |_| "empty");
/// assert_eq!(head(vec![7]), Ok(7));
/// assert_eq!(head(vec![]), Err("empty"));
/// ```
pub fn lift_throwable<A, B, E>(
    mut function: impl FnMut(A) -> B,
    mut on_panic: impl FnMut(PanicError) -> E,
) -> impl FnMut(A) -> Result<B, E> {
    move |argument| catch_panic(|| function(argument)).map_err(&mut on_panic)
}

// =============================================================================
// Brands
// =============================================================================

macro_rules! phantom_brand {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<E>(PhantomData<fn() -> E>);

        impl<E> $name<E> {
            /// Creates the brand.
            #[inline]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<E> Clone for $name<E> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<E> Copy for $name<E> {}

        impl<E> Default for $name<E> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<E> fmt::Debug for $name<E> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
}

phantom_brand! {
    /// Brand of `Result<_, E>` with first-error `map2` and last-error `or_else`.
    ResultKind
}

phantom_brand! {
    /// Brand of `Result<_, E>` whose `map2` combines both errors.
    ///
    /// When both operands fail the errors are combined in argument order:
    /// `map2(fa, fb, f)` fails with `ea.combine(eb)`, so `ap(fab, fa)` fails
    /// with `eab.combine(ea)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::result::ValidatedApplicative;
    /// use kindred::typeclass::Apply;
    ///
    /// let brand = ValidatedApplicative::<String>::new();
    /// let applied = brand.ap(Err::<fn(i32) -> i32, _>("b".to_string()), Err("a".to_string()));
    /// assert_eq!(applied, Err("ba".to_string()));
    /// ```
    ValidatedApplicative
}

phantom_brand! {
    /// Brand of `Result<_, E>` whose `or_else` combines both errors.
    ///
    /// `or_else(first, that)` with both failing yields
    /// `first_error.combine(that_error)`.
    ValidatedAlt
}

/// The error-accumulating applicative for `E`'s semigroup.
pub const fn validated_applicative<E: Semigroup>() -> ValidatedApplicative<E> {
    ValidatedApplicative::new()
}

/// The error-accumulating alt for `E`'s semigroup.
pub const fn validated_alt<E: Semigroup>() -> ValidatedAlt<E> {
    ValidatedAlt::new()
}

/// Brand of `Result<_, E>` that can be filtered.
///
/// A filtered-out success has to become something; it becomes a failure
/// with a clone of `on_empty`.
///
/// # Examples
///
/// ```rust
/// use kindred::data::result;
/// use kindred::typeclass::{Compactable, Filterable};
///
/// let brand = result::filterable("empty");
/// assert_eq!(brand.filter(Ok(3), |n| *n > 5), Err("empty"));
/// assert_eq!(brand.compact(Ok(Some(1))), Ok(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFilterable<E> {
    on_empty: E,
}

/// Builds a [`ResultFilterable`] that reports `on_empty` for dropped values.
pub const fn filterable<E: Clone>(on_empty: E) -> ResultFilterable<E> {
    ResultFilterable { on_empty }
}

impl<E> ResultFilterable<E> {
    /// The error used for dropped values.
    pub const fn on_empty(&self) -> &E {
        &self.on_empty
    }
}

/// Brand of `Result` as a two-argument kind: error on the left, success on
/// the right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultBifunctor;

macro_rules! result_functor {
    ($brand:ident $(, $bound:path)?) => {
        impl<E: 'static $(+ $bound)?> Kind for $brand<E> {
            type Of<A: 'static> = Result<A, E>;
        }

        impl<E: 'static $(+ $bound)?> Functor for $brand<E> {
            fn map<A, B, F>(&self, fa: Result<A, E>, function: F) -> Result<B, E>
            where
                A: 'static,
                B: 'static,
                F: FnMut(A) -> B + 'static,
            {
                fa.map(function)
            }
        }
    };
}

result_functor!(ResultKind);
result_functor!(ValidatedApplicative);
result_functor!(ValidatedAlt);
result_functor!(ResultFilterable, Clone);

macro_rules! result_traversable {
    ($brand:ident $(, $bound:path)?) => {
        impl<E: 'static $(+ $bound)?> Foldable for $brand<E> {
            fn reduce<A, B, F>(&self, fa: Result<A, E>, initial: B, mut function: F) -> B
            where
                A: 'static,
                F: FnMut(B, A) -> B,
            {
                match fa {
                    Ok(value) => function(initial, value),
                    Err(_) => initial,
                }
            }

            fn reduce_right<A, B, F>(&self, fa: Result<A, E>, initial: B, mut function: F) -> B
            where
                A: 'static,
                F: FnMut(A, B) -> B,
            {
                match fa {
                    Ok(value) => function(value, initial),
                    Err(_) => initial,
                }
            }
        }

        impl<E: 'static $(+ $bound)?> Traversable for $brand<E> {
            fn traverse<G, A, B, F>(&self, applicative: &G, ta: Result<A, E>, mut function: F) -> G::Of<Result<B, E>>
            where
                G: Applicative,
                A: 'static,
                B: 'static,
                F: FnMut(A) -> G::Of<B>,
            {
                match ta {
                    Ok(value) => applicative.map(function(value), Ok),
                    Err(error) => applicative.of(Err(error)),
                }
            }
        }
    };
}

result_traversable!(ResultKind);
result_traversable!(ResultFilterable, Clone);

// =============================================================================
// ResultKind
// =============================================================================

impl<E: 'static> Pointed for ResultKind<E> {
    fn of<A: 'static>(&self, value: A) -> Result<A, E> {
        Ok(value)
    }
}

impl<E: 'static> Apply for ResultKind<E> {
    fn map2<A, B, C, F>(&self, fa: Result<A, E>, fb: Result<B, E>, function: F) -> Result<C, E>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        zip_with(fa, fb, function)
    }
}

impl<E: 'static> Flattenable for ResultKind<E> {
    fn flat_map<A, B, F>(&self, fa: Result<A, E>, function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Result<B, E> + 'static,
    {
        fa.and_then(function)
    }
}

impl<E: 'static> Alt for ResultKind<E> {
    fn or_else<A, F>(&self, first: Result<A, E>, that: F) -> Result<A, E>
    where
        A: 'static,
        F: FnOnce() -> Result<A, E> + 'static,
    {
        or_else(first, that)
    }
}

// =============================================================================
// Validated instances
// =============================================================================

impl<E: 'static> Pointed for ValidatedApplicative<E> {
    fn of<A: 'static>(&self, value: A) -> Result<A, E> {
        Ok(value)
    }
}

impl<E: Semigroup + 'static> Apply for ValidatedApplicative<E> {
    fn map2<A, B, C, F>(&self, fa: Result<A, E>, fb: Result<B, E>, function: F) -> Result<C, E>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        match (fa, fb) {
            (Ok(first), Ok(second)) => Ok(function(first, second)),
            (Err(first), Err(second)) => Err(first.combine(second)),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
        }
    }
}

impl<E: Semigroup + 'static> Alt for ValidatedAlt<E> {
    fn or_else<A, F>(&self, first: Result<A, E>, that: F) -> Result<A, E>
    where
        A: 'static,
        F: FnOnce() -> Result<A, E> + 'static,
    {
        match first {
            Ok(value) => Ok(value),
            Err(first_error) => that().map_err(|that_error| first_error.combine(that_error)),
        }
    }
}

// =============================================================================
// ResultFilterable
// =============================================================================

impl<E: Clone + 'static> Compactable for ResultFilterable<E> {
    fn compact<A: 'static>(&self, foa: Result<Option<A>, E>) -> Result<A, E> {
        foa.and_then(|option| option.ok_or_else(|| self.on_empty.clone()))
    }

    fn separate<L, A>(&self, fea: Result<Result<A, L>, E>) -> (Result<L, E>, Result<A, E>)
    where
        L: 'static,
        A: 'static,
    {
        match fea {
            Err(error) => (Err(error.clone()), Err(error)),
            Ok(Err(left)) => (Ok(left), Err(self.on_empty.clone())),
            Ok(Ok(right)) => (Err(self.on_empty.clone()), Ok(right)),
        }
    }
}

impl<E: Clone + 'static> Filterable for ResultFilterable<E> {
    fn filter_map<A, B, F>(&self, fa: Result<A, E>, mut function: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Option<B>,
    {
        fa.and_then(|value| function(value).ok_or_else(|| self.on_empty.clone()))
    }

    fn partition_map<A, B, C, F>(&self, fa: Result<A, E>, function: F) -> (Result<B, E>, Result<C, E>)
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnMut(A) -> Result<C, B>,
    {
        self.separate(fa.map(function))
    }
}

// =============================================================================
// ResultBifunctor
// =============================================================================

impl Kind2 for ResultBifunctor {
    type Of<E: 'static, A: 'static> = Result<A, E>;
}

impl Bifunctor for ResultBifunctor {
    fn map_both<E, A, E2, B, F, G>(&self, fea: Result<A, E>, left: F, right: G) -> Result<B, E2>
    where
        E: 'static,
        A: 'static,
        E2: 'static,
        B: 'static,
        F: FnOnce(E) -> E2 + 'static,
        G: FnOnce(A) -> B + 'static,
    {
        map_both(fea, left, right)
    }
}

static_assertions::assert_impl_all!(
    ResultKind<String>: crate::typeclass::Monad,
    crate::typeclass::Alt,
    crate::typeclass::Traversable
);
static_assertions::assert_impl_all!(ValidatedApplicative<String>: crate::typeclass::Applicative);
static_assertions::assert_not_impl_any!(ValidatedApplicative<String>: crate::typeclass::Flattenable);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Max, Witherable};
    use rstest::rstest;
    use std::cell::Cell;

    fn non_negative(n: i32) -> Result<i32, &'static str> {
        if n >= 0 { succeed(n) } else { fail("neg") }
    }

    #[rstest]
    fn traverse_array_stops_calling_after_first_failure() {
        let calls = Cell::new(0);
        let traversed = traverse_array(vec![1, -2, 3], |n| {
            calls.set(calls.get() + 1);
            non_negative(n)
        });
        assert_eq!(traversed, Err("neg"));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn traverse_array_with_index_passes_positions() {
        let indexed = traverse_array_with_index(vec!['a', 'b'], |index, letter| {
            Ok::<_, ()>(format!("{index}{letter}"))
        });
        assert_eq!(indexed, Ok(vec!["0a".to_string(), "1b".to_string()]));
    }

    #[rstest]
    fn traverse_non_empty_keeps_shape() {
        let items = NonEmptyVec::new(1, vec![2, 3]);
        assert_eq!(traverse_non_empty(items, non_negative), Ok(NonEmptyVec::new(1, vec![2, 3])));
        let items = NonEmptyVec::new(-1, vec![2]);
        assert_eq!(traverse_non_empty(items, non_negative), Err("neg"));
    }

    #[rstest]
    fn default_ap_keeps_function_error() {
        let brand = ResultKind::<String>::new();
        let applied = brand.ap(Err::<fn(i32) -> i32, _>("b".to_string()), Err("a".to_string()));
        assert_eq!(applied, Err("b".to_string()));
    }

    #[rstest]
    fn validated_ap_combines_function_error_first() {
        let brand = validated_applicative::<String>();
        let applied = brand.ap(Err::<fn(i32) -> i32, _>("b".to_string()), Err("a".to_string()));
        assert_eq!(applied, Err("ba".to_string()));
    }

    #[rstest]
    fn validated_ap_with_single_failure_keeps_it() {
        let brand = validated_applicative::<String>();
        let function: Result<fn(i32) -> i32, String> = Ok(|n| n + 1);
        assert_eq!(brand.ap(function.clone(), Err("a".to_string())), Err("a".to_string()));
        assert_eq!(brand.ap(function, Ok(1)), Ok(2));
    }

    #[rstest]
    fn validated_alt_combines_in_order() {
        let brand = validated_alt::<String>();
        assert_eq!(brand.or_else(fail::<i32, _>("a".to_string()), || fail("b".to_string())), Err("ab".to_string()));
        let default = ResultKind::<String>::new();
        assert_eq!(default.or_else(fail::<i32, _>("a".to_string()), || fail("b".to_string())), Err("b".to_string()));
    }

    #[rstest]
    fn validated_applicative_with_max_keeps_worst() {
        let brand = validated_applicative::<Max<u8>>();
        let combined = brand.map3(Err(Max(2)), Ok(1), Err(Max(5)), |a: i32, b: i32, c: i32| a + b + c);
        assert_eq!(combined, Err(Max(5)));
    }

    #[rstest]
    #[case(Ok(4), Ok(4))]
    #[case(Ok(-4), Err("negative"))]
    #[case(Err("original"), Err("original"))]
    fn filter_or_else_checks_success_only(#[case] input: Result<i32, &'static str>, #[case] expected: Result<i32, &'static str>) {
        assert_eq!(filter_or_else(input, |n| *n > 0, |_| "negative"), expected);
    }

    #[rstest]
    fn swap_and_getters() {
        assert_eq!(swap(Ok::<i32, &str>(1)), Err(1));
        assert_eq!(get_success(Ok::<i32, &str>(1)), Some(1));
        assert_eq!(get_failure(Err::<i32, _>("e")), Some("e"));
        assert_eq!(flatten(Ok::<_, &str>(Err::<i32, _>("inner"))), Err("inner"));
    }

    #[rstest]
    fn catch_all_recovers_with_error() {
        let recovered = catch_all(Err::<usize, _>("four"), |error| Ok::<_, ()>(error.len()));
        assert_eq!(recovered, Ok(4));
    }

    #[rstest]
    fn filterable_separate_uses_on_empty_for_missing_side() {
        let brand = filterable("none".to_string());
        let (left, right) = brand.separate(Ok::<Result<i32, char>, _>(Err('x')));
        assert_eq!(left, Ok('x'));
        assert_eq!(right, Err("none".to_string()));
        let (left, right) = brand.separate(Err::<Result<i32, char>, _>("outer".to_string()));
        assert_eq!(left, Err("outer".to_string()));
        assert_eq!(right, Err("outer".to_string()));
    }

    #[rstest]
    fn filterable_wither_on_result() {
        let brand = filterable("dropped");
        let kept = brand.wither(&crate::data::option::OptionKind, Ok(3), |n: i32| Some((n > 1).then_some(n)));
        assert_eq!(kept, Some(Ok(3)));
        let dropped = brand.wither(&crate::data::option::OptionKind, Ok(1), |n: i32| Some((n > 1).then_some(n)));
        assert_eq!(dropped, Some(Err("dropped")));
    }

    #[rstest]
    fn try_catch_converts_panic_message() {
        let outcome: Result<i32, String> = try_catch(|| -> i32 { panic!("kaboom") }, |error| error.message);
        assert_eq!(outcome, Err("kaboom".to_string()));
    }
}
