//! Traversable type class - mapping with effects and collecting results.
//!
//! A `Traversable` brand can run an effectful function over every element of
//! its structure and "turn the structure inside out": `T<G<B>>` becomes
//! `G<T<B>>`. The effect `G` is chosen by passing its [`Applicative`] brand,
//! so the same traversal can stop at the first `None`, report the first
//! error, accumulate every error, or run futures concurrently.
//!
//! # Motivation
//!
//! Given a `Vec<&str>` and a parser returning `Option<i32>`:
//! - If all parses succeed: `Some(Vec<i32>)` containing all results
//! - If any parse fails: `None`
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! brand.traverse(&IdentityKind, ta, Identity) == Identity(ta)
//! ```
//!
//! ## Naturality
//!
//! ```text
//! t(brand.traverse(&g, ta, f)) == brand.traverse(&h, ta, |a| t(f(a)))  // for natural transformation t: G ~> H
//! ```
//!
//! ## Composition
//!
//! ```text
//! brand.traverse(&Compose(g, h), ta, |a| g.map(f(a), k))
//!     == g.map(brand.traverse(&g, ta, f), |tb| brand.traverse(&h, tb, k))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Traversable;
//! use kindred::data::option::OptionKind;
//! use kindred::data::vec::VecKind;
//!
//! let parsed = VecKind.traverse(&OptionKind, vec!["1", "2", "3"], |s: &str| s.parse::<i32>().ok());
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//!
//! let broken = VecKind.traverse(&OptionKind, vec!["1", "x", "3"], |s: &str| s.parse::<i32>().ok());
//! assert_eq!(broken, None);
//! ```

use super::applicative::Applicative;
use super::foldable::Foldable;
use super::functor::Functor;

/// A type class for structures that can be traversed with effects.
///
/// Elements are visited left to right and the output keeps the input order.
/// A generic traversal combines per-element effects with the applicative's
/// `map2`, so whether it stops early depends entirely on that applicative.
///
/// Over a lazy applicative (`IOKind`, `AsyncSeq`, `AsyncPar`) the result is
/// one nested `map2` per element, and running it nests as deep as the input
/// is long. The loop-based `io_result::traverse_array` and
/// `async_result::traverse_array_seq` suit large inputs.
pub trait Traversable: Functor + Foldable {
    /// Applies `function` to every element and collects the effects.
    fn traverse<G, A, B, F>(&self, applicative: &G, ta: Self::Of<A>, function: F) -> G::Of<Self::Of<B>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> G::Of<B>;

    /// Turns a structure of effects into an effect of a structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Traversable;
    /// use kindred::data::result::ResultKind;
    /// use kindred::data::vec::VecKind;
    ///
    /// let brand = ResultKind::<String>::new();
    /// assert_eq!(VecKind.sequence(&brand, vec![Ok(1), Ok(2)]), Ok(vec![1, 2]));
    /// assert_eq!(
    ///     VecKind.sequence(&brand, vec![Ok(1), Err("bad".to_string())]),
    ///     Err("bad".to_string())
    /// );
    /// ```
    fn sequence<G, A>(&self, applicative: &G, tga: Self::Of<G::Of<A>>) -> G::Of<Self::Of<A>>
    where
        G: Applicative,
        A: 'static,
    {
        self.traverse(applicative, tga, |ga| ga)
    }

    /// Traverses for the effects only, discarding the rebuilt structure.
    fn traverse_<G, A, B, F>(&self, applicative: &G, ta: Self::Of<A>, function: F) -> G::Of<()>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> G::Of<B>,
    {
        applicative.void(self.traverse(applicative, ta, function))
    }
}
