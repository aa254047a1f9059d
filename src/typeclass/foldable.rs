//! Foldable type class - reducing a structure to a summary value.
//!
//! # Laws
//!
//! ## Consistency between `reduce` and `reduce_right`
//!
//! ```text
//! brand.reduce(fa, init, f) == brand.reduce_right(fa, init, flip(f))  // when f is associative and commutative
//! ```
//!
//! ## Consistency with `to_vec`
//!
//! ```text
//! brand.reduce(fa, init, f) == brand.to_vec(fa).into_iter().fold(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Foldable;
//! use kindred::data::option::OptionKind;
//! use kindred::data::vec::VecKind;
//!
//! assert_eq!(VecKind.reduce(vec![1, 2, 3, 4, 5], 0, |total, n| total + n), 15);
//! assert_eq!(OptionKind.reduce(None::<i32>, 5, |total, n| total + n), 5);
//! ```

use super::kind::Kind;
use super::monoid::Monoid;

/// A type class for structures that can be folded.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::{Foldable, Sum};
/// use kindred::data::vec::VecKind;
///
/// let total: Sum<i32> = VecKind.fold_map(vec![1, 2, 3], Sum);
/// assert_eq!(total, Sum(6));
/// ```
pub trait Foldable: Kind {
    /// Folds from left to right.
    fn reduce<A, B, F>(&self, fa: Self::Of<A>, initial: B, function: F) -> B
    where
        A: 'static,
        F: FnMut(B, A) -> B;

    /// Folds from right to left.
    fn reduce_right<A, B, F>(&self, fa: Self::Of<A>, initial: B, function: F) -> B
    where
        A: 'static,
        F: FnMut(A, B) -> B;

    /// Maps every element into a monoid and combines the results left to right.
    fn fold_map<A, M, F>(&self, fa: Self::Of<A>, mut function: F) -> M
    where
        A: 'static,
        M: Monoid,
        F: FnMut(A) -> M,
    {
        self.reduce(fa, M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Collects the elements in left-to-right order.
    fn to_vec<A>(&self, fa: Self::Of<A>) -> Vec<A>
    where
        A: 'static,
    {
        self.reduce(fa, Vec::new(), |mut collected, element| {
            collected.push(element);
            collected
        })
    }

    /// Counts the elements.
    fn length<A>(&self, fa: Self::Of<A>) -> usize
    where
        A: 'static,
    {
        self.reduce(fa, 0, |count, _| count + 1)
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<A, P>(&self, fa: Self::Of<A>, mut predicate: P) -> bool
    where
        A: 'static,
        P: FnMut(&A) -> bool,
    {
        self.reduce(fa, false, |found, element| found || predicate(&element))
    }
}
