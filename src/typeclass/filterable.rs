//! Compactable, Filterable and Witherable type classes - dropping and
//! splitting elements.
//!
//! - [`Compactable`]: `compact` removes absent values, `separate` splits
//!   failures from successes.
//! - [`Filterable`]: `filter_map`, `filter`, `partition_map` and `partition`.
//! - [`Witherable`]: the effectful versions `wither` and `wilt`.
//!
//! Nothing is silently lost: for kinds that cannot represent "no element"
//! (such as `Result`) the caller supplies the value used in its place, see
//! [`result::filterable`](crate::data::result::filterable).
//!
//! # Laws
//!
//! ```text
//! brand.filter_map(fa, f) == brand.compact(brand.map(fa, f))
//! brand.separate(fea) == (brand.filter_map(fea.clone(), Result::err), brand.filter_map(fea, Result::ok))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Compactable, Filterable};
//! use kindred::data::vec::VecKind;
//!
//! assert_eq!(VecKind.compact(vec![Some(1), None, Some(3)]), vec![1, 3]);
//!
//! let (failures, successes) = VecKind.separate(vec![Ok(1), Err("a"), Ok(2)]);
//! assert_eq!(failures, vec!["a"]);
//! assert_eq!(successes, vec![1, 2]);
//!
//! assert_eq!(VecKind.filter(vec![1, 2, 3, 4], |n| n % 2 == 0), vec![2, 4]);
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use super::kind::Kind;
use super::traversable::Traversable;

/// A type class for kinds whose absent or failed elements can be removed.
pub trait Compactable: Kind {
    /// Keeps the present values, in order.
    fn compact<A>(&self, foa: Self::Of<Option<A>>) -> Self::Of<A>
    where
        A: 'static;

    /// Splits into `(failures, successes)`, each keeping its relative order.
    fn separate<E, A>(&self, fea: Self::Of<Result<A, E>>) -> (Self::Of<E>, Self::Of<A>)
    where
        E: 'static,
        A: 'static;
}

/// A type class for kinds that can be filtered and partitioned.
pub trait Filterable: Functor + Compactable {
    /// Maps and drops the `None` results in one pass.
    fn filter_map<A, B, F>(&self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Option<B>;

    /// Maps every element to a `Result` and splits by outcome.
    fn partition_map<A, B, C, F>(&self, fa: Self::Of<A>, function: F) -> (Self::Of<B>, Self::Of<C>)
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnMut(A) -> Result<C, B>;

    /// Keeps the elements satisfying `predicate`.
    fn filter<A, P>(&self, fa: Self::Of<A>, mut predicate: P) -> Self::Of<A>
    where
        A: 'static,
        P: FnMut(&A) -> bool,
    {
        self.filter_map(fa, move |element| predicate(&element).then_some(element))
    }

    /// Splits into `(excluded, included)` according to `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Filterable;
    /// use kindred::data::vec::VecKind;
    ///
    /// let (odd, even) = VecKind.partition(vec![1, 2, 3, 4], |n| n % 2 == 0);
    /// assert_eq!(odd, vec![1, 3]);
    /// assert_eq!(even, vec![2, 4]);
    /// ```
    fn partition<A, P>(&self, fa: Self::Of<A>, mut predicate: P) -> (Self::Of<A>, Self::Of<A>)
    where
        A: 'static,
        P: FnMut(&A) -> bool,
    {
        self.partition_map(fa, move |element| {
            if predicate(&element) { Ok(element) } else { Err(element) }
        })
    }
}

/// Effectful filtering for brands that are both [`Traversable`] and
/// [`Filterable`].
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Witherable;
/// use kindred::data::result::ResultKind;
/// use kindred::data::vec::VecKind;
///
/// let brand = ResultKind::<String>::new();
/// let kept = VecKind.wither(&brand, vec![1, 2, 3, 4], |n: i32| {
///     if n > 10 { Err("too big".to_string()) } else { Ok((n % 2 == 0).then_some(n)) }
/// });
/// assert_eq!(kept, Ok(vec![2, 4]));
/// ```
pub trait Witherable: Traversable + Filterable {
    /// Traverses with `function` and compacts the result inside the effect.
    fn wither<G, A, B, F>(&self, applicative: &G, ta: Self::Of<A>, function: F) -> G::Of<Self::Of<B>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> G::Of<Option<B>>,
    {
        let brand = self.clone();
        applicative.map(self.traverse(applicative, ta, function), move |options| brand.compact(options))
    }

    /// Traverses with `function` and separates the result inside the effect.
    fn wilt<G, A, B, C, F>(
        &self,
        applicative: &G,
        ta: Self::Of<A>,
        function: F,
    ) -> G::Of<(Self::Of<B>, Self::Of<C>)>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnMut(A) -> G::Of<Result<C, B>>,
    {
        let brand = self.clone();
        applicative.map(self.traverse(applicative, ta, function), move |results| brand.separate(results))
    }
}

impl<K: Traversable + Filterable> Witherable for K {}
