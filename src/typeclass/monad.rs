//! Flattenable and Monad type classes - sequencing dependent computations.
//!
//! [`Flattenable`] adds `flat_map`: the next computation is chosen from the
//! value produced by the previous one. A short-circuiting kind (`Option`,
//! `Result`, `ResultT`) never calls the continuation once it is in its
//! failure state.
//!
//! [`Monad`] is any brand that is both [`Applicative`] and [`Flattenable`].
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! brand.flat_map(brand.of(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! brand.flat_map(m, |x| brand.of(x)) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! brand.flat_map(brand.flat_map(m, f), g) == brand.flat_map(m, |x| brand.flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Flattenable;
//! use kindred::data::option::OptionKind;
//!
//! fn parse(input: &str) -> Option<i32> {
//!     input.parse().ok()
//! }
//!
//! let positive = OptionKind.flat_map(parse("42"), |n| if n > 0 { Some(n) } else { None });
//! assert_eq!(positive, Some(42));
//! ```

use super::applicative::Applicative;
use super::functor::Functor;

/// A type class for kinds supporting dependent sequencing.
///
/// The continuation is `FnOnce`: every kind with a `Flattenable` instance in
/// this crate holds at most one value at a time.
pub trait Flattenable: Functor {
    /// Feeds the value of `fa` to `function` and flattens the result.
    fn flat_map<A, B, F>(&self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Self::Of<B> + 'static;

    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Flattenable;
    /// use kindred::data::option::OptionKind;
    ///
    /// assert_eq!(OptionKind.flatten(Some(Some(1))), Some(1));
    /// assert_eq!(OptionKind.flatten(Some(None::<i32>)), None);
    /// ```
    fn flatten<A>(&self, ffa: Self::Of<Self::Of<A>>) -> Self::Of<A>
    where
        A: 'static,
    {
        self.flat_map(ffa, |fa| fa)
    }

    /// Sequences `fa` and `next`, discarding the value of `fa`.
    fn then<A, B>(&self, fa: Self::Of<A>, next: Self::Of<B>) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
    {
        self.flat_map(fa, move |_| next)
    }

    /// Runs the effect produced by `function` and keeps the original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Flattenable;
    /// use kindred::data::result::ResultKind;
    ///
    /// let brand = ResultKind::<String>::new();
    /// let checked = brand.tap(Ok(5), |n: i32| if n > 0 { Ok(()) } else { Err("negative".to_string()) });
    /// assert_eq!(checked, Ok(5));
    /// ```
    fn tap<A, B, F>(&self, fa: Self::Of<A>, function: F) -> Self::Of<A>
    where
        A: Clone + 'static,
        B: 'static,
        F: FnOnce(A) -> Self::Of<B> + 'static,
    {
        let brand = self.clone();
        self.flat_map(fa, move |value: A| {
            let effect = function(value.clone());
            brand.map(effect, move |_| value.clone())
        })
    }
}

/// A brand that is both [`Applicative`] and [`Flattenable`].
pub trait Monad: Applicative + Flattenable {}

impl<K: Applicative + Flattenable> Monad for K {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::option::OptionKind;
    use crate::data::result::ResultKind;
    use crate::typeclass::Pointed;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn option_flat_map_some_to_none() {
        assert_eq!(OptionKind.flat_map(Some(3), |_: i32| None::<i32>), None);
    }

    #[rstest]
    fn result_flat_map_never_calls_continuation_on_failure() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let brand = ResultKind::<&'static str>::new();
        let result = brand.flat_map(Err::<i32, _>("stop"), move |n| {
            counter.set(counter.get() + 1);
            Ok(n + 1)
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn then_discards_first_value() {
        assert_eq!(OptionKind.then(Some(1), Some("next")), Some("next"));
        assert_eq!(OptionKind.then(None::<i32>, Some("next")), None);
    }

    #[rstest]
    fn tap_propagates_failure_of_side_effect() {
        let brand = ResultKind::<String>::new();
        let tapped = brand.tap(Ok(-1), |n: i32| {
            if n > 0 { Ok(()) } else { Err("negative".to_string()) }
        });
        assert_eq!(tapped, Err("negative".to_string()));
    }

    #[rstest]
    fn left_identity_law_for_option() {
        let function = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
        assert_eq!(OptionKind.flat_map(OptionKind.of(8), function), function(8));
    }

    #[rstest]
    fn associativity_law_for_result() {
        let brand = ResultKind::<String>::new();
        let first = |n: i32| -> Result<i32, String> { Ok(n + 1) };
        let second = |n: i32| -> Result<i32, String> {
            if n > 5 { Ok(n * 2) } else { Err(format!("{n} too small")) }
        };
        let left = brand.flat_map(brand.flat_map(Ok(5), first), second);
        let inner = brand.clone();
        let right = brand.flat_map(Ok(5), move |x| inner.flat_map(first(x), second));
        assert_eq!(left, right);
    }
}
