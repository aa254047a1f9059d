//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup supplies the combining strategy used when two values have to
//! become one, most importantly when two failures meet in an accumulating
//! applicative such as
//! [`ValidatedApplicative`](crate::data::result::ValidatedApplicative). The
//! strategy is chosen by the type: `String` concatenates, [`First`] keeps the
//! left value, [`Max`] keeps the larger one, and so on.
//!
//! `combine` is not commutative in general, so the argument order of every
//! accumulating operation in this crate is documented where it is used.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Max, Semigroup};
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!(Max(3).combine(Max(7)), Max(7));
//! ```

use std::cmp::Ordering;
use std::ops::{Add, Mul};

use super::wrappers::{First, Last, Max, Min, Product, Reverse, Sum};

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// assert_eq!(a.combine_ref(&b), "Hello, World!");
    /// assert_eq!(a, "Hello, ");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Folds `iterator` into `start` from left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// let joined = String::from(">").combine_all_with(vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(joined, ">ab");
    /// ```
    #[must_use]
    fn combine_all_with<I>(self, iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(self, Self::combine)
    }

    /// Inserts `middle` between the two values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Semigroup;
    ///
    /// let text = String::from("a").intercalate(String::from(", "), String::from("b"));
    /// assert_eq!(text, "a, b");
    /// ```
    #[must_use]
    fn intercalate(self, middle: Self, other: Self) -> Self
    where
        Self: Sized,
    {
        self.combine(middle).combine(other)
    }

    /// Reduces all elements in an iterator, or `None` if it is empty.
    ///
    /// For a version that returns the identity element for empty iterators,
    /// see [`Monoid::combine_all`](super::Monoid::combine_all).
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

// =============================================================================
// Standard library types
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// Present values are combined; `None` is the identity.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

/// Successes are combined; the first failure wins.
impl<T: Semigroup, E> Semigroup for Result<T, E> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Ok(left), Ok(right)) => Ok(left.combine(right)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

/// Lexicographic: the first non-`Equal` ordering decides.
impl Semigroup for Ordering {
    fn combine(self, other: Self) -> Self {
        self.then(other)
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

// =============================================================================
// Wrappers
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

/// Keeps the larger value; on a tie the left one.
impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

/// Keeps the smaller value; on a tie the left one.
impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}

impl<A> Semigroup for First<A> {
    fn combine(self, _other: Self) -> Self {
        self
    }
}

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        other
    }
}

/// The dual semigroup: arguments are swapped before combining.
impl<A: Semigroup> Semigroup for Reverse<A> {
    fn combine(self, other: Self) -> Self {
        Self(other.0.combine(self.0))
    }
}
