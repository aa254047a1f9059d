//! Alt, Zero and Alternative type classes - choice between computations.
//!
//! [`Alt`] picks the first successful value of two computations. [`Zero`]
//! provides the computation that never succeeds, and [`Alternative`] is any
//! brand that has both together with [`Applicative`].
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! brand.or_else(brand.or_else(a, || b), || c) == brand.or_else(a, || brand.or_else(b, || c))
//! ```
//!
//! ## Distributivity
//!
//! ```text
//! brand.map(brand.or_else(a, || b), f) == brand.or_else(brand.map(a, f), || brand.map(b, f))
//! ```
//!
//! ## Zero is an identity (Alternative)
//!
//! ```text
//! brand.or_else(brand.zero(), || a) == a == brand.or_else(a, || brand.zero())
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Alt;
//! use kindred::data::option::OptionKind;
//!
//! assert_eq!(OptionKind.or_else(None, || Some(42)), Some(42));
//! assert_eq!(OptionKind.or_else(Some(1), || Some(2)), Some(1));
//! ```

use super::applicative::{Applicative, Pointed};
use super::functor::Functor;
use super::kind::Kind;

/// A type class for choosing the first successful computation.
///
/// `that` is only needed when `first` has failed. Brands with an
/// accumulating strategy (see
/// [`ValidatedAlt`](crate::data::result::ValidatedAlt)) still evaluate it
/// to merge both failures.
pub trait Alt: Functor {
    /// Returns `first` unless it failed, in which case `that` is used.
    fn or_else<A, F>(&self, first: Self::Of<A>, that: F) -> Self::Of<A>
    where
        A: 'static,
        F: FnOnce() -> Self::Of<A> + 'static;
}

/// A type class for kinds with a computation that never yields a value.
pub trait Zero: Kind {
    /// The empty computation.
    fn zero<A>(&self) -> Self::Of<A>
    where
        A: 'static;

    /// Yields `()` when `condition` holds and the empty computation otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Zero;
    /// use kindred::data::vec::VecKind;
    ///
    /// assert_eq!(VecKind.guard(true), vec![()]);
    /// assert!(VecKind.guard(false).is_empty());
    /// ```
    fn guard(&self, condition: bool) -> Self::Of<()>
    where
        Self: Pointed,
    {
        if condition { self.of(()) } else { self.zero() }
    }
}

/// A brand that is [`Alt`], [`Zero`] and [`Applicative`].
pub trait Alternative: Alt + Zero + Applicative {}

impl<K: Alt + Zero + Applicative> Alternative for K {}
