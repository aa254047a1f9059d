//! `ResultT` - failure threaded through an outer effect.
//!
//! `ResultT<M, E>` is the brand of `M::Of<Result<A, E>>`: given the
//! dictionary of an outer effect `M` (for example [`IOKind`](super::IOKind)
//! or [`AsyncSeq`](super::AsyncSeq)) it builds a dictionary in which
//! failure composes with that effect.
//!
//! - `flat_map` short-circuits: after a failure no continuation is called.
//! - `map2` goes through `M::map2`, so with a concurrent `M` both effects
//!   run independently. When both fail, the failure of the left one wins.
//! - [`ResultT::map2_seq`] and [`ResultT::ap_seq`] are the dependent
//!   variants built on `flat_map`: the right effect is not run after the
//!   left one failed.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{IO, IOKind, ResultT};
//! use kindred::typeclass::Flattenable;
//!
//! let brand = ResultT::<IOKind, String>::new(IOKind);
//! let parsed = brand.flat_map(brand.succeed("42"), |text: &str| {
//!     IO::pure(text.parse::<i32>().map_err(|error| error.to_string()))
//! });
//! assert_eq!(parsed.run_unsafe(), Ok(42));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::typeclass::{Alt, Applicative, Apply, Flattenable, Functor, Kind, Monad, Pointed};

/// Brand of `M::Of<Result<_, E>>`.
pub struct ResultT<M, E> {
    outer: M,
    error: PhantomData<fn() -> E>,
}

impl<M, E> ResultT<M, E> {
    /// Builds the dictionary on top of the outer effect's.
    pub const fn new(outer: M) -> Self {
        Self {
            outer,
            error: PhantomData,
        }
    }

    /// The outer effect's dictionary.
    pub const fn outer(&self) -> &M {
        &self.outer
    }
}

impl<M: Clone, E> Clone for ResultT<M, E> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone())
    }
}

impl<M: Copy, E> Copy for ResultT<M, E> {}

impl<M: Default, E> Default for ResultT<M, E> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<M: fmt::Debug, E> fmt::Debug for ResultT<M, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ResultT").field(&self.outer).finish()
    }
}

impl<M: Kind, E: 'static> Kind for ResultT<M, E> {
    type Of<A: 'static> = M::Of<Result<A, E>>;
}

impl<M: Functor, E: 'static> Functor for ResultT<M, E> {
    fn map<A, B, F>(&self, fa: Self::Of<A>, mut function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        self.outer.map(fa, move |result: Result<A, E>| result.map(&mut function))
    }
}

impl<M: Pointed, E: 'static> Pointed for ResultT<M, E> {
    fn of<A: 'static>(&self, value: A) -> Self::Of<A> {
        self.outer.of(Ok(value))
    }
}

impl<M: Apply, E: 'static> Apply for ResultT<M, E> {
    fn map2<A, B, C, F>(&self, fa: Self::Of<A>, fb: Self::Of<B>, function: F) -> Self::Of<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        self.outer.map2(fa, fb, move |first: Result<A, E>, second: Result<B, E>| match (first, second) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        })
    }
}

impl<M: Monad, E: 'static> Flattenable for ResultT<M, E> {
    fn flat_map<A, B, F>(&self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Self::Of<B> + 'static,
    {
        let outer = self.outer.clone();
        self.outer.flat_map(fa, move |result: Result<A, E>| match result {
            Ok(value) => function(value),
            Err(error) => outer.of(Err(error)),
        })
    }
}

impl<M: Monad, E: 'static> Alt for ResultT<M, E> {
    fn or_else<A, F>(&self, first: Self::Of<A>, that: F) -> Self::Of<A>
    where
        A: 'static,
        F: FnOnce() -> Self::Of<A> + 'static,
    {
        let outer = self.outer.clone();
        self.outer.flat_map(first, move |result: Result<A, E>| match result {
            Ok(value) => outer.of(Ok(value)),
            Err(_) => that(),
        })
    }
}

impl<M: Pointed, E: 'static> ResultT<M, E> {
    /// A successful computation.
    pub fn succeed<A: 'static>(&self, value: A) -> M::Of<Result<A, E>> {
        self.outer.of(Ok(value))
    }

    /// A failed computation.
    pub fn fail<A: 'static>(&self, error: E) -> M::Of<Result<A, E>> {
        self.outer.of(Err(error))
    }

    /// Lifts a plain `Result`.
    pub fn from_result<A: 'static>(&self, result: Result<A, E>) -> M::Of<Result<A, E>> {
        self.outer.of(result)
    }
}

impl<M: Functor, E: 'static> ResultT<M, E> {
    /// Lifts an effect that cannot fail.
    pub fn lift<A: 'static>(&self, effect: M::Of<A>) -> M::Of<Result<A, E>> {
        self.outer.map(effect, Ok)
    }

    /// Lifts an effect producing the error.
    pub fn lift_error<A: 'static>(&self, effect: M::Of<E>) -> M::Of<Result<A, E>> {
        self.outer.map(effect, Err)
    }

    /// Changes the error.
    pub fn map_error<A, E2, F>(&self, fa: M::Of<Result<A, E>>, mut function: F) -> M::Of<Result<A, E2>>
    where
        A: 'static,
        E2: 'static,
        F: FnMut(E) -> E2 + 'static,
    {
        self.outer.map(fa, move |result: Result<A, E>| result.map_err(&mut function))
    }

    /// Changes both sides.
    pub fn map_both<A, B, E2, G, F>(
        &self,
        fa: M::Of<Result<A, E>>,
        mut on_failure: G,
        mut on_success: F,
    ) -> M::Of<Result<B, E2>>
    where
        A: 'static,
        B: 'static,
        E2: 'static,
        G: FnMut(E) -> E2 + 'static,
        F: FnMut(A) -> B + 'static,
    {
        self.outer.map(fa, move |result: Result<A, E>| match result {
            Ok(value) => Ok(on_success(value)),
            Err(error) => Err(on_failure(error)),
        })
    }

    /// Exchanges success and failure.
    pub fn swap<A: 'static>(&self, fa: M::Of<Result<A, E>>) -> M::Of<Result<E, A>> {
        self.outer.map(fa, |result: Result<A, E>| match result {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        })
    }

    /// Converts the error into a wider error type.
    pub fn widen_error<A, E2>(&self, fa: M::Of<Result<A, E>>) -> M::Of<Result<A, E2>>
    where
        A: 'static,
        E2: From<E> + 'static,
    {
        self.outer.map(fa, |result: Result<A, E>| result.map_err(E2::from))
    }

    /// Eliminates the `Result` inside the effect.
    pub fn fold<A, B, G, F>(&self, fa: M::Of<Result<A, E>>, mut on_failure: G, mut on_success: F) -> M::Of<B>
    where
        A: 'static,
        B: 'static,
        G: FnMut(E) -> B + 'static,
        F: FnMut(A) -> B + 'static,
    {
        self.outer.map(fa, move |result: Result<A, E>| match result {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        })
    }

    /// The success value, or one computed from the error.
    pub fn get_or_else<A, F>(&self, fa: M::Of<Result<A, E>>, mut on_failure: F) -> M::Of<A>
    where
        A: 'static,
        F: FnMut(E) -> A + 'static,
    {
        self.outer.map(fa, move |result: Result<A, E>| result.unwrap_or_else(&mut on_failure))
    }

    /// Chains a pure fallible step.
    pub fn flat_map_result<A, B, F>(&self, fa: M::Of<Result<A, E>>, mut function: F) -> M::Of<Result<B, E>>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> Result<B, E> + 'static,
    {
        self.outer.map(fa, move |result: Result<A, E>| result.and_then(&mut function))
    }

    /// Fails with `on_false(&value)` when `predicate` rejects the value.
    pub fn filter_or_else<A, P, G>(&self, fa: M::Of<Result<A, E>>, mut predicate: P, mut on_false: G) -> M::Of<Result<A, E>>
    where
        A: 'static,
        P: FnMut(&A) -> bool + 'static,
        G: FnMut(&A) -> E + 'static,
    {
        self.outer.map(fa, move |result: Result<A, E>| match result {
            Ok(value) if predicate(&value) => Ok(value),
            Ok(value) => Err(on_false(&value)),
            Err(error) => Err(error),
        })
    }
}

impl<M: Monad, E: 'static> ResultT<M, E> {
    /// Recovers from a failure with a new computation, possibly changing
    /// the error type.
    pub fn catch_all<A, E2, F>(&self, fa: M::Of<Result<A, E>>, handler: F) -> M::Of<Result<A, E2>>
    where
        A: 'static,
        E2: 'static,
        F: FnOnce(E) -> M::Of<Result<A, E2>> + 'static,
    {
        let outer = self.outer.clone();
        self.outer.flat_map(fa, move |result: Result<A, E>| match result {
            Ok(value) => outer.of(Ok(value)),
            Err(error) => handler(error),
        })
    }

    /// Eliminates the `Result` with effectful handlers.
    pub fn fold_effect<A, B, G, F>(&self, fa: M::Of<Result<A, E>>, on_failure: G, on_success: F) -> M::Of<B>
    where
        A: 'static,
        B: 'static,
        G: FnOnce(E) -> M::Of<B> + 'static,
        F: FnOnce(A) -> M::Of<B> + 'static,
    {
        self.outer.flat_map(fa, move |result: Result<A, E>| match result {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        })
    }

    /// Runs `effect` on a failure, then fails with the original error.
    ///
    /// A failure of `effect` itself replaces the original error.
    pub fn tap_error<A, B, F>(&self, fa: M::Of<Result<A, E>>, effect: F) -> M::Of<Result<A, E>>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(&E) -> M::Of<Result<B, E>> + 'static,
    {
        let outer = self.outer.clone();
        self.outer.flat_map(fa, move |result: Result<A, E>| match result {
            Ok(value) => outer.of(Ok(value)),
            Err(error) => {
                let side_effect = effect(&error);
                let inner = outer.clone();
                outer.flat_map(side_effect, move |outcome: Result<B, E>| match outcome {
                    Ok(_) => inner.of(Err(error)),
                    Err(replacement) => inner.of(Err(replacement)),
                })
            }
        })
    }

    /// Acquires a resource, uses it and releases it.
    ///
    /// `release` runs exactly once when `acquire` succeeded, whether `use_resource`
    /// succeeded or not, and sees its outcome. A failing release replaces the
    /// outcome of `use_resource`. A panic is not intercepted here; the
    /// concrete `io_result::bracket` and `async_result::bracket` handle it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::{IO, IOKind, ResultT};
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let brand = ResultT::<IOKind, String>::new(IOKind);
    /// let released = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&released);
    /// let outcome = brand.bracket(
    ///     brand.succeed("handle"),
    ///     |_handle: &str| IO::pure(Err::<i32, _>("boom".to_string())),
    ///     move |_handle, _outcome| {
    ///         counter.set(counter.get() + 1);
    ///         IO::pure(Ok(()))
    ///     },
    /// );
    /// assert_eq!(outcome.run_unsafe(), Err("boom".to_string()));
    /// assert_eq!(released.get(), 1);
    /// ```
    pub fn bracket<R, B, U, L>(
        &self,
        acquire: M::Of<Result<R, E>>,
        use_resource: U,
        release: L,
    ) -> M::Of<Result<B, E>>
    where
        R: Clone + 'static,
        B: 'static,
        U: FnOnce(R) -> M::Of<Result<B, E>> + 'static,
        L: FnOnce(R, &Result<B, E>) -> M::Of<Result<(), E>> + 'static,
    {
        let outer = self.outer.clone();
        self.outer.flat_map(acquire, move |acquired: Result<R, E>| match acquired {
            Err(error) => outer.of(Err(error)),
            Ok(resource) => {
                let used = use_resource(resource.clone());
                let after_use = outer.clone();
                outer.flat_map(used, move |outcome: Result<B, E>| {
                    let released = release(resource, &outcome);
                    let after_release = after_use.clone();
                    after_use.flat_map(released, move |release_outcome: Result<(), E>| match release_outcome {
                        Ok(()) => after_release.of(outcome),
                        Err(error) => after_release.of(Err(error)),
                    })
                })
            }
        })
    }

    /// `map2` that does not run `fb` once `fa` has failed.
    pub fn map2_seq<A, B, C, F>(&self, fa: M::Of<Result<A, E>>, fb: M::Of<Result<B, E>>, function: F) -> M::Of<Result<C, E>>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        let brand = self.clone();
        self.flat_map(fa, move |a: A| {
            let inner = brand.clone();
            brand.flat_map(fb, move |b: B| inner.of(function(a, b)))
        })
    }

    /// `ap` that does not run `fa` once `fab` has failed.
    pub fn ap_seq<A, B, F>(&self, fab: M::Of<Result<F, E>>, fa: M::Of<Result<A, E>>) -> M::Of<Result<B, E>>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        self.map2_seq(fab, fa, |function: F, value: A| function(value))
    }

    /// Runs `function` on every item in order and stops at the first failure:
    /// later items are never passed to `function`.
    ///
    /// The result is a chain of one `flat_map` per item, and running it nests
    /// as deep as the input is long. For large inputs over `IO` or `Async`
    /// use [`io_result::traverse_array`](super::io_result::traverse_array) or
    /// `async_result::traverse_array_seq`, which run the items in a loop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::{IO, IOKind, ResultT};
    ///
    /// let brand = ResultT::<IOKind, String>::new(IOKind);
    /// let checked = brand.traverse_array_seq(vec![1, -2, 3], |n: i32| {
    ///     IO::pure(if n > 0 { Ok(n) } else { Err(format!("{n} is negative")) })
    /// });
    /// assert_eq!(checked.run_unsafe(), Err("-2 is negative".to_string()));
    /// ```
    pub fn traverse_array_seq<A, B, F>(&self, items: Vec<A>, function: F) -> M::Of<Result<Vec<B>, E>>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> M::Of<Result<B, E>> + 'static,
    {
        let function = Rc::new(RefCell::new(function));
        let capacity = items.len();
        items
            .into_iter()
            .fold(self.of(Vec::with_capacity(capacity)), |accumulator, item| {
                let function = Rc::clone(&function);
                let brand = self.clone();
                self.flat_map(accumulator, move |mut collected: Vec<B>| {
                    let next = (*function.borrow_mut())(item);
                    let inner = brand.clone();
                    brand.flat_map(next, move |value: B| {
                        collected.push(value);
                        inner.of(collected)
                    })
                })
            })
    }

    /// `traverse_array_seq` with the identity function.
    pub fn sequence_array_seq<A: 'static>(&self, effects: Vec<M::Of<Result<A, E>>>) -> M::Of<Result<Vec<A>, E>> {
        self.traverse_array_seq(effects, |effect| effect)
    }
}

impl<M: Applicative, E: 'static> ResultT<M, E> {
    /// Builds every effect up front and combines them with `M`'s `map2`,
    /// reporting the failure with the smallest index.
    ///
    /// Like [`Traversable::traverse`](crate::typeclass::Traversable::traverse),
    /// this nests one `map2` per item.
    pub fn traverse_array_par<A, B, F>(&self, items: Vec<A>, function: F) -> M::Of<Result<Vec<B>, E>>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> M::Of<Result<B, E>>,
    {
        let capacity = items.len();
        items
            .into_iter()
            .map(function)
            .fold(self.of(Vec::with_capacity(capacity)), |accumulator, next| {
                self.map2(accumulator, next, |mut collected: Vec<B>, value: B| {
                    collected.push(value);
                    collected
                })
            })
    }

    /// `traverse_array_par` with the identity function.
    pub fn sequence_array_par<A: 'static>(&self, effects: Vec<M::Of<Result<A, E>>>) -> M::Of<Result<Vec<A>, E>> {
        self.traverse_array_par(effects, |effect| effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::identity::{Identity, IdentityKind};
    use crate::data::option::OptionKind;
    use crate::effect::{IO, IOKind};
    use rstest::rstest;
    use std::cell::Cell;

    fn io_brand() -> ResultT<IOKind, String> {
        ResultT::new(IOKind)
    }

    #[rstest]
    fn flat_map_never_calls_continuation_after_failure() {
        let brand = io_brand();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let chained = brand.flat_map(brand.fail::<i32>("stop".to_string()), move |n: i32| {
            counter.set(counter.get() + 1);
            IO::pure(Ok(n))
        });
        assert_eq!(chained.run_unsafe(), Err("stop".to_string()));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Ok(1), Ok(2), Ok(3))]
    #[case(Err("left"), Err("right"), Err("left"))]
    #[case(Ok(1), Err("right"), Err("right"))]
    fn map2_reports_leftmost_failure(
        #[case] first: Result<i32, &'static str>,
        #[case] second: Result<i32, &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        let brand = ResultT::<OptionKind, &'static str>::new(OptionKind);
        assert_eq!(brand.map2(Some(first), Some(second), |a, b| a + b), Some(expected));
    }

    #[rstest]
    fn map2_seq_skips_right_effect_after_failure() {
        let brand = io_brand();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let right = IO::new(move || {
            flag.set(true);
            Ok::<i32, String>(1)
        });
        let combined = brand.map2_seq(brand.fail::<i32>("first".to_string()), right, |a, b| a + b);
        assert_eq!(combined.run_unsafe(), Err("first".to_string()));
        assert!(!ran.get());
    }

    #[rstest]
    fn map2_runs_both_effects_even_after_failure() {
        let brand = io_brand();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let right = IO::new(move || {
            flag.set(true);
            Ok::<i32, String>(1)
        });
        let combined = brand.map2(brand.fail::<i32>("first".to_string()), right, |a, b| a + b);
        assert_eq!(combined.run_unsafe(), Err("first".to_string()));
        assert!(ran.get());
    }

    #[rstest]
    fn traverse_array_seq_stops_calling_after_failure() {
        let brand = io_brand();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let traversed = brand.traverse_array_seq(vec![1, -2, 3], move |n: i32| {
            counter.set(counter.get() + 1);
            IO::pure(if n > 0 { Ok(n) } else { Err("neg".to_string()) })
        });
        assert_eq!(traversed.run_unsafe(), Err("neg".to_string()));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn traverse_array_seq_keeps_order() {
        let brand = io_brand();
        let traversed = brand.traverse_array_seq(vec![1, 2, 3], |n: i32| IO::pure(Ok(n * 10)));
        assert_eq!(traversed.run_unsafe(), Ok(vec![10, 20, 30]));
    }

    #[rstest]
    fn traverse_array_par_calls_every_item() {
        let brand = io_brand();
        let mut calls = 0;
        let traversed = brand.traverse_array_par(vec![1, -2, -3], |n: i32| {
            calls += 1;
            IO::pure(if n > 0 { Ok(n) } else { Err(format!("{n}")) })
        });
        assert_eq!(calls, 3);
        assert_eq!(traversed.run_unsafe(), Err("-2".to_string()));
    }

    #[rstest]
    fn bracket_releases_once_on_failure() {
        let brand = io_brand();
        let released = Rc::new(Cell::new(0));
        let counter = Rc::clone(&released);
        let outcome = brand.bracket(
            brand.succeed(7),
            |_: i32| IO::pure(Err::<i32, _>("boom".to_string())),
            move |_, _| {
                counter.set(counter.get() + 1);
                IO::pure(Ok(()))
            },
        );
        assert_eq!(outcome.run_unsafe(), Err("boom".to_string()));
        assert_eq!(released.get(), 1);
    }

    #[rstest]
    fn bracket_release_failure_overrides_success() {
        let brand = io_brand();
        let outcome = brand.bracket(
            brand.succeed(7),
            |resource: i32| IO::pure(Ok(resource * 2)),
            |_, outcome: &Result<i32, String>| {
                assert_eq!(outcome, &Ok(14));
                IO::pure(Err("release failed".to_string()))
            },
        );
        assert_eq!(outcome.run_unsafe(), Err("release failed".to_string()));
    }

    #[rstest]
    fn bracket_skips_use_and_release_when_acquire_fails() {
        let brand = io_brand();
        let outcome = brand.bracket(
            brand.fail::<i32>("no resource".to_string()),
            |_: i32| -> IO<Result<i32, String>> { unreachable!("use must not run") },
            |_, _| -> IO<Result<(), String>> { unreachable!("release must not run") },
        );
        assert_eq!(outcome.run_unsafe(), Err("no resource".to_string()));
    }

    #[rstest]
    fn or_else_is_lazy_on_success() {
        let brand = ResultT::<IdentityKind, String>::new(IdentityKind);
        let kept = brand.or_else(Identity(Ok(1)), || -> Identity<Result<i32, String>> { unreachable!() });
        assert_eq!(kept, Identity(Ok(1)));
        let recovered = brand.or_else(Identity(Err("x".to_string())), || Identity(Ok(2)));
        assert_eq!(recovered, Identity(Ok(2)));
    }

    #[rstest]
    fn tap_error_keeps_original_error() {
        let brand = io_brand();
        let seen = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&seen);
        let tapped = brand.tap_error(brand.fail::<i32>("original".to_string()), move |error: &String| {
            sink.borrow_mut().push_str(error);
            IO::pure(Ok::<(), String>(()))
        });
        assert_eq!(tapped.run_unsafe(), Err("original".to_string()));
        assert_eq!(*seen.borrow(), "original");
    }

    #[rstest]
    fn widen_error_uses_from() {
        let brand = ResultT::<OptionKind, u8>::new(OptionKind);
        let widened: Option<Result<i32, u32>> = brand.widen_error(Some(Err(7_u8)));
        assert_eq!(widened, Some(Err(7_u32)));
    }

    #[rstest]
    fn filter_or_else_and_fold() {
        let brand = ResultT::<OptionKind, String>::new(OptionKind);
        let filtered = brand.filter_or_else(Some(Ok(3)), |n: &i32| *n > 5, |n: &i32| format!("{n} too small"));
        assert_eq!(filtered, Some(Err("3 too small".to_string())));
        let folded = brand.fold(filtered, |error| error.len(), |n: i32| n as usize);
        assert_eq!(folded, Some(11));
    }

    #[rstest]
    fn catch_all_changes_error_type() {
        let brand = ResultT::<OptionKind, String>::new(OptionKind);
        let recovered: Option<Result<i32, u8>> = brand.catch_all(Some(Err("bad".to_string())), |error| Some(Err(error.len() as u8)));
        assert_eq!(recovered, Some(Err(3)));
    }

    #[rstest]
    fn lift_and_swap() {
        let brand = ResultT::<OptionKind, String>::new(OptionKind);
        assert_eq!(brand.lift(Some(1)), Some(Ok::<i32, String>(1)));
        assert_eq!(brand.swap(brand.lift_error::<i32>(Some("e".to_string()))), Some(Ok("e".to_string())));
        assert_eq!(brand.lift::<i32>(None), None);
    }
}
