//! Bifunctor type class - mapping over two type parameters.
//!
//! A `Bifunctor` generalizes [`Functor`](super::Functor) to kinds with two
//! varying parameters. For the result-like kinds of this crate the left side
//! is the error and the right side the success value, so `map_right` agrees
//! with `Functor::map` and `map_left` is the error mapping.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! brand.map_both(fea, |e| e, |a| a) == fea
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! brand.map_both(fea, |e| f2(f1(e)), |a| g2(g1(a))) == brand.map_both(brand.map_both(fea, f1, g1), f2, g2)
//! ```
//!
//! ## Consistency Law
//!
//! ```text
//! brand.map_both(fea, f, g) == brand.map_right(brand.map_left(fea, f), g)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Bifunctor;
//! use kindred::data::result::ResultBifunctor;
//!
//! let failed: Result<i32, String> = Err("boom".to_string());
//! assert_eq!(ResultBifunctor.map_both(failed, |e| e.len(), |n| n * 2), Err(4));
//!
//! let succeeded: Result<i32, String> = Ok(21);
//! assert_eq!(ResultBifunctor.map_both(succeeded, |e| e.len(), |n| n * 2), Ok(42));
//! ```

use super::kind::Kind2;

/// A type class for kinds of two arguments that can be mapped on both sides.
pub trait Bifunctor: Kind2 {
    /// Maps the left value with `left` and the right value with `right`.
    fn map_both<E, A, E2, B, F, G>(&self, fea: Self::Of<E, A>, left: F, right: G) -> Self::Of<E2, B>
    where
        E: 'static,
        A: 'static,
        E2: 'static,
        B: 'static,
        F: FnOnce(E) -> E2 + 'static,
        G: FnOnce(A) -> B + 'static;

    /// Maps the left (error) side only.
    fn map_left<E, A, E2, F>(&self, fea: Self::Of<E, A>, function: F) -> Self::Of<E2, A>
    where
        E: 'static,
        A: 'static,
        E2: 'static,
        F: FnOnce(E) -> E2 + 'static,
    {
        self.map_both(fea, function, |value| value)
    }

    /// Maps the right (success) side only.
    fn map_right<E, A, B, G>(&self, fea: Self::Of<E, A>, function: G) -> Self::Of<E, B>
    where
        E: 'static,
        A: 'static,
        B: 'static,
        G: FnOnce(A) -> B + 'static,
    {
        self.map_both(fea, |error| error, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::result::ResultBifunctor;
    use crate::data::these::{These, TheseBifunctor};
    use rstest::rstest;

    #[rstest]
    fn result_map_left_changes_error_only() {
        let failed: Result<i32, &str> = Err("abc");
        assert_eq!(ResultBifunctor.map_left(failed, str::len), Err(3));
        let succeeded: Result<i32, &str> = Ok(1);
        assert_eq!(ResultBifunctor.map_left(succeeded, str::len), Ok(1));
    }

    #[rstest]
    fn these_both_maps_each_side() {
        let both: These<&str, i32> = These::Both("ab", 5);
        assert_eq!(TheseBifunctor.map_both(both, str::len, |n| n + 1), These::Both(2, 6));
    }

    #[rstest]
    fn consistency_law_for_result() {
        let left = |e: String| e.to_uppercase();
        let right = |n: i32| n - 1;
        let input: Result<i32, String> = Err("x".to_string());
        let direct = ResultBifunctor.map_both(input.clone(), left, right);
        let stepwise = ResultBifunctor.map_right(ResultBifunctor.map_left(input, left), right);
        assert_eq!(direct, stepwise);
    }
}
