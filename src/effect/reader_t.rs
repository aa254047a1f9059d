//! `ReaderT` - an environment threaded through an outer effect.
//!
//! `ReaderT<R, M>` is the brand of `Reader<R, M::Of<A>>`: a function of the
//! environment producing an `M` computation. Every step of a chain sees the
//! same environment, cloned once per step.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::result::ResultKind;
//! use kindred::effect::{Reader, ReaderT};
//! use kindred::typeclass::Flattenable;
//!
//! #[derive(Clone)]
//! struct Limits {
//!     max_len: usize,
//! }
//!
//! let brand = ReaderT::<Limits, ResultKind<String>>::new(ResultKind::new());
//! let checked = brand.flat_map(brand.asks(|limits: Limits| limits.max_len), |max_len: usize| {
//!     Reader::new(move |_: Limits| if "kindred".len() <= max_len { Ok("kindred") } else { Err("too long".to_string()) })
//! });
//! assert_eq!(checked.run(Limits { max_len: 3 }), Err("too long".to_string()));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::reader::Reader;
use crate::typeclass::{Apply, Flattenable, Functor, Kind, Pointed};

/// Brand of `Reader<R, M::Of<_>>`.
pub struct ReaderT<R, M> {
    outer: M,
    environment: PhantomData<fn(R)>,
}

impl<R, M> ReaderT<R, M> {
    /// Builds the dictionary on top of the outer effect's.
    pub const fn new(outer: M) -> Self {
        Self {
            outer,
            environment: PhantomData,
        }
    }

    /// The outer effect's dictionary.
    pub const fn outer(&self) -> &M {
        &self.outer
    }
}

impl<R, M: Clone> Clone for ReaderT<R, M> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone())
    }
}

impl<R, M: Copy> Copy for ReaderT<R, M> {}

impl<R, M: Default> Default for ReaderT<R, M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

impl<R, M: fmt::Debug> fmt::Debug for ReaderT<R, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ReaderT").field(&self.outer).finish()
    }
}

impl<R: 'static, M: Kind> Kind for ReaderT<R, M> {
    type Of<A: 'static> = Reader<R, M::Of<A>>;
}

impl<R: 'static, M: Functor> Functor for ReaderT<R, M> {
    fn map<A, B, F>(&self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        let outer = self.outer.clone();
        fa.map(move |effect: M::Of<A>| outer.map(effect, function))
    }
}

impl<R: 'static, M: Pointed> Pointed for ReaderT<R, M> {
    fn of<A: 'static>(&self, value: A) -> Self::Of<A> {
        let outer = self.outer.clone();
        Reader::new(move |_| outer.of(value))
    }
}

impl<R: Clone + 'static, M: Apply> Apply for ReaderT<R, M> {
    fn map2<A, B, C, F>(&self, fa: Self::Of<A>, fb: Self::Of<B>, function: F) -> Self::Of<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        let outer = self.outer.clone();
        fa.map2(fb, move |first: M::Of<A>, second: M::Of<B>| outer.map2(first, second, function))
    }
}

impl<R: Clone + 'static, M: Flattenable> Flattenable for ReaderT<R, M> {
    fn flat_map<A, B, F>(&self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Self::Of<B> + 'static,
    {
        let outer = self.outer.clone();
        Reader::new(move |environment: R| {
            let effect = fa.run(environment.clone());
            outer.flat_map(effect, move |value: A| function(value).run(environment))
        })
    }
}

impl<R: 'static, M: Pointed> ReaderT<R, M> {
    /// Reads the whole environment.
    pub fn ask(&self) -> Reader<R, M::Of<R>> {
        let outer = self.outer.clone();
        Reader::new(move |environment| outer.of(environment))
    }

    /// Reads a projection of the environment.
    pub fn asks<A, F>(&self, projection: F) -> Reader<R, M::Of<A>>
    where
        A: 'static,
        F: FnOnce(R) -> A + 'static,
    {
        let outer = self.outer.clone();
        Reader::new(move |environment| outer.of(projection(environment)))
    }
}

impl<R: 'static, M: Kind> ReaderT<R, M> {
    /// Lifts an effect that ignores the environment.
    pub fn lift<A: 'static>(&self, effect: M::Of<A>) -> Reader<R, M::Of<A>> {
        Reader::new(move |_| effect)
    }

    /// Runs `computation` in an environment derived by `modifier`.
    pub fn local<A, F>(&self, modifier: F, computation: Reader<R, M::Of<A>>) -> Reader<R, M::Of<A>>
    where
        A: 'static,
        F: FnOnce(R) -> R + 'static,
    {
        Reader::local(modifier, computation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::option::OptionKind;
    use crate::effect::{IO, IOKind};
    use rstest::rstest;

    #[rstest]
    fn flat_map_passes_environment_to_both_steps() {
        let brand = ReaderT::<i32, OptionKind>::new(OptionKind);
        let reader = brand.flat_map(brand.ask(), |first: i32| Reader::new(move |second: i32| Some(first * second)));
        assert_eq!(reader.run(6), Some(36));
    }

    #[rstest]
    fn flat_map_stops_on_inner_failure() {
        let brand = ReaderT::<i32, OptionKind>::new(OptionKind);
        let reader = brand.flat_map(brand.lift(None::<i32>), |_: i32| -> Reader<i32, Option<i32>> { unreachable!() });
        assert_eq!(reader.run(1), None);
    }

    #[rstest]
    fn local_applies_to_inner_reader_only() {
        let brand = ReaderT::<String, IOKind>::new(IOKind);
        let shouted = brand.local(|name: String| name.to_uppercase(), brand.ask());
        let both = brand.map2(shouted, brand.ask(), |inner: String, outer: String| format!("{inner}/{outer}"));
        assert_eq!(both.run("kind".to_string()).run_unsafe(), "KIND/kind");
    }

    #[rstest]
    fn map_and_asks() {
        let brand = ReaderT::<(u8, u8), IOKind>::new(IOKind);
        let sum = brand.map(brand.asks(|(a, b): (u8, u8)| a + b), |total: u8| total * 2);
        assert_eq!(sum.run((3, 4)).run_unsafe(), 14);
        assert_eq!(brand.of("pure").run((0, 0)).run_unsafe(), "pure");
        let _: Reader<(u8, u8), IO<()>> = brand.lift(IO::pure(()));
    }
}
