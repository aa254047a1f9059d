//! The brand of `Vec<A>`.
//!
//! `Vec` is the crate's array type. It is a [`Traversable`] structure with
//! [`Filterable`] instances, and the [`Alt`] of two vectors is their
//! concatenation.
//!
//! `VecKind` is deliberately not an [`Apply`](crate::typeclass::Apply): the
//! cartesian product would call one `FnOnce` many times. Use [`flat_map`]
//! for the list monad.

use crate::typeclass::{
    Alt, Applicative, Compactable, Filterable, Foldable, Functor, Kind, Pointed, Traversable, Zero,
};

/// Brand of `Vec`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VecKind;

impl Kind for VecKind {
    type Of<A: 'static> = Vec<A>;
}

impl Functor for VecKind {
    fn map<A, B, F>(&self, fa: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Pointed for VecKind {
    fn of<A: 'static>(&self, value: A) -> Vec<A> {
        vec![value]
    }
}

impl Alt for VecKind {
    fn or_else<A, F>(&self, mut first: Vec<A>, that: F) -> Vec<A>
    where
        A: 'static,
        F: FnOnce() -> Vec<A> + 'static,
    {
        first.extend(that());
        first
    }
}

impl Zero for VecKind {
    fn zero<A: 'static>(&self) -> Vec<A> {
        Vec::new()
    }
}

impl Foldable for VecKind {
    fn reduce<A, B, F>(&self, fa: Vec<A>, initial: B, function: F) -> B
    where
        A: 'static,
        F: FnMut(B, A) -> B,
    {
        fa.into_iter().fold(initial, function)
    }

    fn reduce_right<A, B, F>(&self, fa: Vec<A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(A, B) -> B,
    {
        fa.into_iter().rev().fold(initial, |accumulator, element| function(element, accumulator))
    }

    fn length<A: 'static>(&self, fa: Vec<A>) -> usize {
        fa.len()
    }
}

impl Traversable for VecKind {
    fn traverse<G, A, B, F>(&self, applicative: &G, ta: Vec<A>, mut function: F) -> G::Of<Vec<B>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> G::Of<B>,
    {
        let capacity = ta.len();
        ta.into_iter()
            .fold(applicative.of(Vec::with_capacity(capacity)), |accumulator, element| {
                applicative.map2(accumulator, function(element), |mut collected, value| {
                    collected.push(value);
                    collected
                })
            })
    }
}

impl Compactable for VecKind {
    fn compact<A: 'static>(&self, foa: Vec<Option<A>>) -> Vec<A> {
        foa.into_iter().flatten().collect()
    }

    fn separate<E, A>(&self, fea: Vec<Result<A, E>>) -> (Vec<E>, Vec<A>)
    where
        E: 'static,
        A: 'static,
    {
        self.partition_map(fea, |result| result)
    }
}

impl Filterable for VecKind {
    fn filter_map<A, B, F>(&self, fa: Vec<A>, function: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Option<B>,
    {
        fa.into_iter().filter_map(function).collect()
    }

    fn partition_map<A, B, C, F>(&self, fa: Vec<A>, mut function: F) -> (Vec<B>, Vec<C>)
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnMut(A) -> Result<C, B>,
    {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for element in fa {
            match function(element) {
                Ok(right) => rights.push(right),
                Err(left) => lefts.push(left),
            }
        }
        (lefts, rights)
    }
}

/// The list monad's bind: every element expands into a vector and the
/// results are concatenated in order.
///
/// # Examples
///
/// ```rust
/// use kindred::data::vec::flat_map;
///
/// assert_eq!(flat_map(vec![1, 2], |n| vec![n, n * 10]), vec![1, 10, 2, 20]);
/// ```
pub fn flat_map<A, B>(items: Vec<A>, function: impl FnMut(A) -> Vec<B>) -> Vec<B> {
    items.into_iter().flat_map(function).collect()
}

/// Pairs every element of `first` with every element of `second`.
pub fn cartesian<A: Clone, B: Clone>(first: &[A], second: &[B]) -> Vec<(A, B)> {
    first
        .iter()
        .flat_map(|a| second.iter().map(move |b| (a.clone(), b.clone())))
        .collect()
}

static_assertions::assert_not_impl_any!(VecKind: crate::typeclass::Apply, crate::typeclass::Flattenable);
