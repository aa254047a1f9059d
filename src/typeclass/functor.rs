//! Functor type class - mapping over the contents of a kind.
//!
//! A `Functor` brand knows how to apply a function to every value held by
//! `K::Of<A>` while keeping the surrounding structure (the `None`, the error,
//! the length of a vector) untouched.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! brand.map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! brand.map(brand.map(fa, f), g) == brand.map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::Functor;
//! use kindred::data::option::OptionKind;
//! use kindred::data::vec::VecKind;
//!
//! assert_eq!(OptionKind.map(Some(5), |n: i32| n.to_string()), Some("5".to_string()));
//! assert_eq!(VecKind.map(vec![1, 2, 3], |n: i32| n * 2), vec![2, 4, 6]);
//! ```

use super::kind::Kind;

/// A type class for kinds whose contents can be mapped.
///
/// The mapping function is `FnMut` because multi-element structures such as
/// `Vec` call it once per element; single-value effects call it at most once.
///
/// # Examples
///
/// ```rust
/// use kindred::typeclass::Functor;
/// use kindred::data::result::ResultKind;
///
/// let brand = ResultKind::<String>::new();
/// assert_eq!(brand.map(Ok(20), |n: i32| n + 1), Ok(21));
/// assert_eq!(brand.map(Err("e".to_string()), |n: i32| n + 1), Err("e".to_string()));
/// ```
pub trait Functor: Kind {
    /// Applies `function` to the value(s) inside `fa`.
    fn map<A, B, F>(&self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static;

    /// Replaces every value inside `fa` with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Functor;
    /// use kindred::data::option::OptionKind;
    ///
    /// assert_eq!(OptionKind.replace(Some(5), "replaced"), Some("replaced"));
    /// assert_eq!(OptionKind.replace(None::<i32>, "replaced"), None);
    /// ```
    fn replace<A, B>(&self, fa: Self::Of<A>, value: B) -> Self::Of<B>
    where
        A: 'static,
        B: Clone + 'static,
    {
        self.map(fa, move |_| value.clone())
    }

    /// Discards the contents, keeping only the structure.
    fn void<A>(&self, fa: Self::Of<A>) -> Self::Of<()>
    where
        A: 'static,
    {
        self.map(fa, |_| ())
    }

    /// Applies the function(s) inside `fab` to a plain `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::typeclass::Functor;
    /// use kindred::data::option::OptionKind;
    ///
    /// let double = |n: i32| n * 2;
    /// assert_eq!(OptionKind.flap(Some(double), 21), Some(42));
    /// ```
    fn flap<A, B, F>(&self, fab: Self::Of<F>, value: A) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        self.map(fab, move |mut function| function(value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::option::OptionKind;
    use crate::data::result::ResultKind;
    use crate::data::vec::VecKind;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_map_doubles_present_value(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionKind.map(input, |n| n * 2), expected);
    }

    #[rstest]
    fn result_map_leaves_failure_untouched() {
        let brand = ResultKind::<&'static str>::new();
        assert_eq!(brand.map(Err("boom"), |n: i32| n * 2), Err("boom"));
    }

    #[rstest]
    fn vec_map_visits_every_element_in_order() {
        let mut seen = Vec::new();
        let mapped = VecKind.map(vec![1, 2, 3], |n: i32| n + 10);
        seen.extend(mapped.iter().copied());
        assert_eq!(seen, vec![11, 12, 13]);
    }

    #[rstest]
    fn void_keeps_structure() {
        assert_eq!(VecKind.void(vec!['a', 'b']), vec![(), ()]);
        assert_eq!(OptionKind.void(None::<i32>), None);
    }

    #[rstest]
    fn replace_on_vec_repeats_value() {
        assert_eq!(VecKind.replace(vec![1, 2], "x"), vec!["x", "x"]);
    }

    #[rstest]
    fn flap_applies_each_function() {
        let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
        assert_eq!(VecKind.flap(functions, 4), vec![5, 40]);
    }
}
