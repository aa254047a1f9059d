//! `OptionT` - absence threaded through an outer effect.
//!
//! `OptionT<M>` is the brand of `M::Of<Option<A>>`. `flat_map` stops at the
//! first `None`, and `or_else` runs its fallback only after a `None`.

use std::fmt;

use crate::typeclass::{Alt, Apply, Flattenable, Functor, Kind, Monad, Pointed};

/// Brand of `M::Of<Option<_>>`.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionT<M> {
    outer: M,
}

impl<M> OptionT<M> {
    /// Builds the dictionary on top of the outer effect's.
    pub const fn new(outer: M) -> Self {
        Self { outer }
    }

    /// The outer effect's dictionary.
    pub const fn outer(&self) -> &M {
        &self.outer
    }
}

impl<M: fmt::Debug> fmt::Debug for OptionT<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("OptionT").field(&self.outer).finish()
    }
}

impl<M: Kind> Kind for OptionT<M> {
    type Of<A: 'static> = M::Of<Option<A>>;
}

impl<M: Functor> Functor for OptionT<M> {
    fn map<A, B, F>(&self, fa: Self::Of<A>, mut function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        self.outer.map(fa, move |option: Option<A>| option.map(&mut function))
    }
}

impl<M: Pointed> Pointed for OptionT<M> {
    fn of<A: 'static>(&self, value: A) -> Self::Of<A> {
        self.outer.of(Some(value))
    }
}

impl<M: Apply> Apply for OptionT<M> {
    fn map2<A, B, C, F>(&self, fa: Self::Of<A>, fb: Self::Of<B>, function: F) -> Self::Of<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        self.outer.map2(fa, fb, move |first: Option<A>, second: Option<B>| {
            first.zip(second).map(|(a, b)| function(a, b))
        })
    }
}

impl<M: Monad> Flattenable for OptionT<M> {
    fn flat_map<A, B, F>(&self, fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Self::Of<B> + 'static,
    {
        let outer = self.outer.clone();
        self.outer.flat_map(fa, move |option: Option<A>| match option {
            Some(value) => function(value),
            None => outer.of(None),
        })
    }
}

impl<M: Monad> Alt for OptionT<M> {
    fn or_else<A, F>(&self, first: Self::Of<A>, that: F) -> Self::Of<A>
    where
        A: 'static,
        F: FnOnce() -> Self::Of<A> + 'static,
    {
        let outer = self.outer.clone();
        self.outer.flat_map(first, move |option: Option<A>| match option {
            Some(value) => outer.of(Some(value)),
            None => that(),
        })
    }
}

impl<M: Pointed> OptionT<M> {
    /// A present value.
    pub fn some<A: 'static>(&self, value: A) -> M::Of<Option<A>> {
        self.outer.of(Some(value))
    }

    /// An absent value.
    pub fn none<A: 'static>(&self) -> M::Of<Option<A>> {
        self.outer.of(None)
    }

    /// Lifts a plain `Option`.
    pub fn from_option<A: 'static>(&self, option: Option<A>) -> M::Of<Option<A>> {
        self.outer.of(option)
    }
}

impl<M: Functor> OptionT<M> {
    /// Lifts an effect whose value is always present.
    pub fn lift<A: 'static>(&self, effect: M::Of<A>) -> M::Of<Option<A>> {
        self.outer.map(effect, Some)
    }

    /// Eliminates the `Option` inside the effect.
    pub fn fold<A, B, N, F>(&self, fa: M::Of<Option<A>>, mut on_none: N, mut on_some: F) -> M::Of<B>
    where
        A: 'static,
        B: 'static,
        N: FnMut() -> B + 'static,
        F: FnMut(A) -> B + 'static,
    {
        self.outer.map(fa, move |option: Option<A>| match option {
            Some(value) => on_some(value),
            None => on_none(),
        })
    }

    /// The value, or `on_none()` when it is absent.
    pub fn get_or_else<A, N>(&self, fa: M::Of<Option<A>>, mut on_none: N) -> M::Of<A>
    where
        A: 'static,
        N: FnMut() -> A + 'static,
    {
        self.outer.map(fa, move |option: Option<A>| option.unwrap_or_else(&mut on_none))
    }

    /// Turns absence into the failure `on_none()`.
    pub fn to_result<A, E, N>(&self, fa: M::Of<Option<A>>, mut on_none: N) -> M::Of<Result<A, E>>
    where
        A: 'static,
        E: 'static,
        N: FnMut() -> E + 'static,
    {
        self.outer.map(fa, move |option: Option<A>| option.ok_or_else(&mut on_none))
    }
}
