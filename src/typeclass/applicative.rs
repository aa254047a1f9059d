//! Pointed, Apply and Applicative type classes - combining independent effects.
//!
//! - [`Pointed`] lifts a pure value into a kind (`of`).
//! - [`Apply`] combines two independent values of a kind (`map2`, `ap`).
//! - [`Applicative`] is any brand that is both.
//!
//! `Apply` is weaker than [`Monad`](super::Monad): the second effect may not
//! depend on the value produced by the first one. That independence is what
//! lets alternative instances change *how* effects are combined, for example
//! accumulating every error ([`ValidatedApplicative`]) or running two futures
//! concurrently ([`AsyncPar`]).
//!
//! [`ValidatedApplicative`]: crate::data::result::ValidatedApplicative
//! [`AsyncPar`]: crate::effect::AsyncPar
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! brand.ap(brand.of(|x| x), v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! brand.ap(brand.of(f), brand.of(x)) == brand.of(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! brand.ap(u, brand.of(y)) == brand.ap(brand.of(|f| f(y)), u)
//! ```
//!
//! ## Associative Composition
//!
//! ```text
//! brand.map2(brand.product(a, b), c, f) == brand.map2(a, brand.product(b, c), f')
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Apply, Pointed};
//! use kindred::data::option::OptionKind;
//!
//! assert_eq!(OptionKind.of(42), Some(42));
//! assert_eq!(OptionKind.map2(Some(1), Some(2), |x, y| x + y), Some(3));
//! assert_eq!(OptionKind.product(Some(1), Some("one")), Some((1, "one")));
//! ```

use super::functor::Functor;
use super::kind::Kind;

/// A type class for kinds that can lift a pure value.
pub trait Pointed: Kind {
    /// Wraps `value` in the minimal context of the kind.
    fn of<A>(&self, value: A) -> Self::Of<A>
    where
        A: 'static;
}

/// A type class for kinds whose independent values can be combined.
///
/// The order of the arguments of `map2` is the order in which the effects
/// are combined. Instances that short-circuit report the first failure in
/// that order.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Apply;
/// use kindred::data::result::ResultKind;
///
/// let brand = ResultKind::<&'static str>::new();
/// assert_eq!(brand.map2(Ok(2), Ok(3), |x: i32, y: i32| x * y), Ok(6));
/// assert_eq!(brand.map2(Err("first"), Err::<i32, _>("second"), |x: i32, y: i32| x * y), Err("first"));
/// ```
pub trait Apply: Functor {
    /// Combines `fa` and `fb` with `function`.
    fn map2<A, B, C, F>(&self, fa: Self::Of<A>, fb: Self::Of<B>, function: F) -> Self::Of<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static;

    /// Applies the function inside `fab` to the value inside `fa`.
    ///
    /// `fab` is combined first, so with a short-circuiting instance its
    /// failure wins over the failure of `fa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Apply;
    /// use kindred::data::option::OptionKind;
    ///
    /// let add_one = |n: i32| n + 1;
    /// assert_eq!(OptionKind.ap(Some(add_one), Some(41)), Some(42));
    /// assert_eq!(OptionKind.ap(None::<fn(i32) -> i32>, Some(41)), None);
    /// ```
    fn ap<A, B, F>(&self, fab: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        self.map2(fab, fa, |function, value| function(value))
    }

    /// Pairs the values of `fa` and `fb`.
    fn product<A, B>(&self, fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<(A, B)>
    where
        A: 'static,
        B: 'static,
    {
        self.map2(fa, fb, |first, second| (first, second))
    }

    /// Combines both effects and keeps the value of the first.
    fn zip_left<A, B>(&self, fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<A>
    where
        A: 'static,
        B: 'static,
    {
        self.map2(fa, fb, |first, _| first)
    }

    /// Combines both effects and keeps the value of the second.
    fn zip_right<A, B>(&self, fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
    {
        self.map2(fa, fb, |_, second| second)
    }

    /// Combines three independent values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Apply;
    /// use kindred::data::option::OptionKind;
    ///
    /// let sum = OptionKind.map3(Some(1), Some(2), Some(3), |a, b, c| a + b + c);
    /// assert_eq!(sum, Some(6));
    /// ```
    fn map3<A, B, C, D, F>(
        &self,
        fa: Self::Of<A>,
        fb: Self::Of<B>,
        fc: Self::Of<C>,
        function: F,
    ) -> Self::Of<D>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
        F: FnOnce(A, B, C) -> D + 'static,
    {
        let pair = self.product(fa, fb);
        self.map2(pair, fc, |(first, second), third| function(first, second, third))
    }
}

/// A brand that is both [`Pointed`] and [`Apply`].
///
/// Implemented automatically; this is the capability generic traversals ask
/// for.
pub trait Applicative: Apply + Pointed {}

impl<K: Apply + Pointed> Applicative for K {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::option::OptionKind;
    use crate::data::result::ResultKind;
    use rstest::rstest;

    #[rstest]
    fn option_of_creates_some() {
        assert_eq!(OptionKind.of("value"), Some("value"));
    }

    #[rstest]
    #[case(Some(1), Some(2), Some(3))]
    #[case(Some(1), None, None)]
    #[case(None, Some(2), None)]
    fn option_map2_requires_both(
        #[case] first: Option<i32>,
        #[case] second: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(OptionKind.map2(first, second, |x, y| x + y), expected);
    }

    #[rstest]
    fn result_ap_reports_function_failure_first() {
        let brand = ResultKind::<String>::new();
        let function: Result<fn(i32) -> i32, String> = Err("b".to_string());
        let value: Result<i32, String> = Err("a".to_string());
        assert_eq!(brand.ap(function, value), Err("b".to_string()));
    }

    #[rstest]
    fn zip_left_and_zip_right_keep_one_side() {
        assert_eq!(OptionKind.zip_left(Some(1), Some("x")), Some(1));
        assert_eq!(OptionKind.zip_right(Some(1), Some("x")), Some("x"));
        assert_eq!(OptionKind.zip_right(None::<i32>, Some("x")), None);
    }

    #[rstest]
    fn homomorphism_law_holds_for_option() {
        let function = |n: i32| n * 3;
        let left = OptionKind.ap(OptionKind.of(function), OptionKind.of(7));
        assert_eq!(left, OptionKind.of(function(7)));
    }
}
