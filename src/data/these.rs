//! `These<E, A>`: a left value, a right value, or both.
//!
//! Where `Result` has to choose between an error and a value, `These` can
//! carry a value *together with* warnings. With `E: Semigroup` the warnings
//! of sequenced computations accumulate while the computation goes on.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::these::{These, TheseKind};
//! use kindred::typeclass::Flattenable;
//!
//! let brand = TheseKind::<Vec<&str>>::new();
//! let parsed = These::Both(vec!["trailing whitespace"], 42);
//! let checked = brand.flat_map(parsed, |n: i32| {
//!     if n > 10 { These::Both(vec!["large value"], n) } else { These::Right(n) }
//! });
//! assert_eq!(checked, These::Both(vec!["trailing whitespace", "large value"], 42));
//! ```

use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::typeclass::{
    Applicative, Apply, Bifunctor, Flattenable, Foldable, Functor, Kind, Kind2, Pointed, Semigroup,
    Traversable,
};

/// A left value, a right value, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum These<E, A> {
    /// Only the left value.
    Left(E),
    /// Only the right value.
    Right(A),
    /// Both values.
    Both(E, A),
}

impl<E, A> These<E, A> {
    /// The left value, if present.
    pub fn left(self) -> Option<E> {
        match self {
            Self::Left(left) | Self::Both(left, _) => Some(left),
            Self::Right(_) => None,
        }
    }

    /// The right value, if present.
    pub fn right(self) -> Option<A> {
        match self {
            Self::Right(right) | Self::Both(_, right) => Some(right),
            Self::Left(_) => None,
        }
    }

    /// Total elimination.
    pub fn fold<B>(
        self,
        on_left: impl FnOnce(E) -> B,
        on_right: impl FnOnce(A) -> B,
        on_both: impl FnOnce(E, A) -> B,
    ) -> B {
        match self {
            Self::Left(left) => on_left(left),
            Self::Right(right) => on_right(right),
            Self::Both(left, right) => on_both(left, right),
        }
    }

    /// Drops the warnings of `Both`; a lone `Left` is a failure.
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Left(left) => Err(left),
            Self::Right(right) | Self::Both(_, right) => Ok(right),
        }
    }

    /// Exchanges the two sides.
    pub fn swap(self) -> These<A, E> {
        match self {
            Self::Left(left) => These::Right(left),
            Self::Right(right) => These::Left(right),
            Self::Both(left, right) => These::Both(right, left),
        }
    }
}

impl<E, A> From<Result<A, E>> for These<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

/// Brand of `These<E, _>`.
///
/// `Pointed`, `Apply` and `Flattenable` need `E: Semigroup` to merge the
/// left values of two computations.
pub struct TheseKind<E>(PhantomData<fn() -> E>);

impl<E> TheseKind<E> {
    /// Creates the brand.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Clone for TheseKind<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for TheseKind<E> {}

impl<E> Default for TheseKind<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for TheseKind<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("TheseKind")
    }
}

impl<E: 'static> Kind for TheseKind<E> {
    type Of<A: 'static> = These<E, A>;
}

impl<E: 'static> Functor for TheseKind<E> {
    fn map<A, B, F>(&self, fa: These<E, A>, mut function: F) -> These<E, B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        match fa {
            These::Left(left) => These::Left(left),
            These::Right(right) => These::Right(function(right)),
            These::Both(left, right) => These::Both(left, function(right)),
        }
    }
}

impl<E: 'static> Pointed for TheseKind<E> {
    fn of<A: 'static>(&self, value: A) -> These<E, A> {
        These::Right(value)
    }
}

impl<E: Semigroup + 'static> Apply for TheseKind<E> {
    fn map2<A, B, C, F>(&self, fa: These<E, A>, fb: These<E, B>, function: F) -> These<E, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        self.flat_map(fa, move |a| match fb {
            These::Left(left) => These::Left(left),
            These::Right(b) => These::Right(function(a, b)),
            These::Both(left, b) => These::Both(left, function(a, b)),
        })
    }
}

impl<E: Semigroup + 'static> Flattenable for TheseKind<E> {
    fn flat_map<A, B, F>(&self, fa: These<E, A>, function: F) -> These<E, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> These<E, B> + 'static,
    {
        match fa {
            These::Left(left) => These::Left(left),
            These::Right(right) => function(right),
            These::Both(left, right) => match function(right) {
                These::Left(next) => These::Left(left.combine(next)),
                These::Right(value) => These::Both(left, value),
                These::Both(next, value) => These::Both(left.combine(next), value),
            },
        }
    }
}

impl<E: 'static> Foldable for TheseKind<E> {
    fn reduce<A, B, F>(&self, fa: These<E, A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(B, A) -> B,
    {
        match fa.right() {
            Some(value) => function(initial, value),
            None => initial,
        }
    }

    fn reduce_right<A, B, F>(&self, fa: These<E, A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(A, B) -> B,
    {
        match fa.right() {
            Some(value) => function(value, initial),
            None => initial,
        }
    }
}

impl<E: 'static> Traversable for TheseKind<E> {
    fn traverse<G, A, B, F>(&self, applicative: &G, ta: These<E, A>, mut function: F) -> G::Of<These<E, B>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> G::Of<B>,
    {
        match ta {
            These::Left(left) => applicative.of(These::Left(left)),
            These::Right(right) => applicative.map(function(right), These::Right),
            These::Both(left, right) => {
                let mut left = Some(left);
                applicative.map(function(right), move |value| match left.take() {
                    Some(left) => These::Both(left, value),
                    None => These::Right(value),
                })
            }
        }
    }
}

/// Brand of `These` as a two-argument kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TheseBifunctor;

impl Kind2 for TheseBifunctor {
    type Of<E: 'static, A: 'static> = These<E, A>;
}

impl Bifunctor for TheseBifunctor {
    fn map_both<E, A, E2, B, F, G>(&self, fea: These<E, A>, left: F, right: G) -> These<E2, B>
    where
        E: 'static,
        A: 'static,
        E2: 'static,
        B: 'static,
        F: FnOnce(E) -> E2 + 'static,
        G: FnOnce(A) -> B + 'static,
    {
        match fea {
            These::Left(value) => These::Left(left(value)),
            These::Right(value) => These::Right(right(value)),
            These::Both(first, second) => These::Both(left(first), right(second)),
        }
    }
}
