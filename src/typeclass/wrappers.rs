//! Newtype wrappers selecting a combining strategy.
//!
//! The same underlying type can be combined in several ways; the wrapper
//! picks one. They are most useful as the error type of an accumulating
//! instance: a `ValidatedApplicative<Max<u8>>` keeps the most severe error
//! code instead of concatenating.
//!
//! # Available Wrappers
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`Max`]: the larger value (identity: [`Bounded::MIN_VALUE`])
//! - [`Min`]: the smaller value (identity: [`Bounded::MAX_VALUE`])
//! - [`First`]: the left value
//! - [`Last`]: the right value
//! - [`Reverse`]: the wrapped semigroup with its arguments swapped
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Last, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
//! assert_eq!(Sum::<i32>::empty(), Sum(0));
//! assert_eq!(Last("a").combine(Last("b")), Last("b"));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps `value`.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Returns the wrapped value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the wrapped value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self(value)
            }
        }
    };
}

wrapper! {
    /// The additive semigroup: `Sum(a).combine(Sum(b)) == Sum(a + b)`.
    Sum
}

wrapper! {
    /// The multiplicative semigroup: `Product(a).combine(Product(b)) == Product(a * b)`.
    Product
}

wrapper! {
    /// Keeps the larger of two values.
    Max
}

wrapper! {
    /// Keeps the smaller of two values.
    Min
}

wrapper! {
    /// Keeps the left value.
    ///
    /// As the error of an accumulating instance this reproduces first-error
    /// behavior.
    First
}

wrapper! {
    /// Keeps the right value.
    Last
}

wrapper! {
    /// The dual of the wrapped semigroup.
    ///
    /// ```rust
    /// use kindred::typeclass::{Reverse, Semigroup};
    ///
    /// let combined = Reverse(vec![1]).combine(Reverse(vec![2]));
    /// assert_eq!(combined.into_inner(), vec![2, 1]);
    /// ```
    Reverse
}

/// Types with a least and a greatest value.
///
/// Required for [`Max`] and [`Min`] to be monoids.
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! bounded {
    ($($type:ty),* $(,)?) => {
        $(
            impl Bounded for $type {
                const MIN_VALUE: Self = <$type>::MIN;
                const MAX_VALUE: Self = <$type>::MAX;
            }
        )*
    };
}

bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
