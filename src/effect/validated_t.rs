//! `ValidatedT` - accumulating failure threaded through an outer effect.
//!
//! `ValidatedT<M, E>` is the brand of `M::Of<Result<A, E>>`, like
//! [`ResultT`](super::ResultT), but when two computations both fail their
//! errors are merged with [`Semigroup::combine`] instead of keeping only the
//! first one. It has no `Flattenable` instance: a dependent step cannot run
//! without the value of a failed one, so there would be nothing to merge.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{IOKind, ValidatedT};
//! use kindred::typeclass::Apply;
//!
//! let brand = ValidatedT::<IOKind, Vec<String>>::new(IOKind);
//! let checked = brand.map2(
//!     brand.fail::<i32>(vec!["name is empty".to_string()]),
//!     brand.fail::<i32>(vec!["age is negative".to_string()]),
//!     |a, b| a + b,
//! );
//! assert_eq!(
//!     checked.run_unsafe(),
//!     Err(vec!["name is empty".to_string(), "age is negative".to_string()])
//! );
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::data::result::validated_applicative;
use crate::typeclass::{Alt, Applicative, Apply, Functor, Kind, Monad, Pointed, Semigroup};

/// Brand of `M::Of<Result<_, E>>` with accumulating `map2` and `or_else`.
pub struct ValidatedT<M, E> {
    outer: M,
    error: PhantomData<fn() -> E>,
}

impl<M, E> ValidatedT<M, E> {
    /// Builds the dictionary on top of the outer effect's.
    pub const fn new(outer: M) -> Self {
        Self {
            outer,
            error: PhantomData,
        }
    }

    /// The outer effect's dictionary.
    pub const fn outer(&self) -> &M {
        &self.outer
    }
}

impl<M: Clone, E> Clone for ValidatedT<M, E> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone())
    }
}

impl<M: Copy, E> Copy for ValidatedT<M, E> {}

impl<M: Default, E> Default for ValidatedT<M, E> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<M: fmt::Debug, E> fmt::Debug for ValidatedT<M, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ValidatedT").field(&self.outer).finish()
    }
}

impl<M: Kind, E: 'static> Kind for ValidatedT<M, E> {
    type Of<A: 'static> = M::Of<Result<A, E>>;
}

impl<M: Functor, E: 'static> Functor for ValidatedT<M, E> {
    fn map<A, B, F>(&self, fa: Self::Of<A>, mut function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        self.outer.map(fa, move |result: Result<A, E>| result.map(&mut function))
    }
}

impl<M: Pointed, E: 'static> Pointed for ValidatedT<M, E> {
    fn of<A: 'static>(&self, value: A) -> Self::Of<A> {
        self.outer.of(Ok(value))
    }
}

impl<M: Apply, E: Semigroup + 'static> Apply for ValidatedT<M, E> {
    fn map2<A, B, C, F>(&self, fa: Self::Of<A>, fb: Self::Of<B>, function: F) -> Self::Of<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        self.outer.map2(fa, fb, move |first: Result<A, E>, second: Result<B, E>| {
            validated_applicative::<E>().map2(first, second, function)
        })
    }
}

impl<M: Monad, E: Semigroup + 'static> Alt for ValidatedT<M, E> {
    fn or_else<A, F>(&self, first: Self::Of<A>, that: F) -> Self::Of<A>
    where
        A: 'static,
        F: FnOnce() -> Self::Of<A> + 'static,
    {
        let outer = self.outer.clone();
        self.outer.flat_map(first, move |result: Result<A, E>| match result {
            Ok(value) => outer.of(Ok(value)),
            Err(first_error) => {
                let inner = outer.clone();
                outer.flat_map(that(), move |fallback: Result<A, E>| {
                    inner.of(fallback.map_err(|that_error| first_error.combine(that_error)))
                })
            }
        })
    }
}

impl<M: Pointed, E: 'static> ValidatedT<M, E> {
    /// A successful computation.
    pub fn succeed<A: 'static>(&self, value: A) -> M::Of<Result<A, E>> {
        self.outer.of(Ok(value))
    }

    /// A failed computation.
    pub fn fail<A: 'static>(&self, error: E) -> M::Of<Result<A, E>> {
        self.outer.of(Err(error))
    }

    /// Lifts a plain `Result`.
    pub fn from_result<A: 'static>(&self, result: Result<A, E>) -> M::Of<Result<A, E>> {
        self.outer.of(result)
    }
}

impl<M: Functor, E: 'static> ValidatedT<M, E> {
    /// Lifts an effect that cannot fail.
    pub fn lift<A: 'static>(&self, effect: M::Of<A>) -> M::Of<Result<A, E>> {
        self.outer.map(effect, Ok)
    }

    /// Changes the error.
    pub fn map_error<A, E2, F>(&self, fa: M::Of<Result<A, E>>, mut function: F) -> M::Of<Result<A, E2>>
    where
        A: 'static,
        E2: 'static,
        F: FnMut(E) -> E2 + 'static,
    {
        self.outer.map(fa, move |result: Result<A, E>| result.map_err(&mut function))
    }
}

impl<M: Applicative, E: Semigroup + 'static> ValidatedT<M, E> {
    /// Runs every effect and collects either all values or every error,
    /// combined in index order.
    pub fn traverse_array<A, B, F>(&self, items: Vec<A>, function: F) -> M::Of<Result<Vec<B>, E>>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> M::Of<Result<B, E>>,
    {
        let capacity = items.len();
        items
            .into_iter()
            .map(function)
            .fold(self.of(Vec::with_capacity(capacity)), |accumulator, next| {
                self.map2(accumulator, next, |mut collected: Vec<B>, value: B| {
                    collected.push(value);
                    collected
                })
            })
    }

    /// `traverse_array` with the identity function.
    pub fn sequence_array<A: 'static>(&self, effects: Vec<M::Of<Result<A, E>>>) -> M::Of<Result<Vec<A>, E>> {
        self.traverse_array(effects, |effect| effect)
    }
}

static_assertions::assert_not_impl_any!(ValidatedT<crate::effect::IOKind, String>: crate::typeclass::Flattenable);
