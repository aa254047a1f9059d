//! Composition of two brands.
//!
//! `Compose(outer, inner)` is the brand of `F<G<A>>`. Functors, applicatives,
//! foldables and traversables are closed under composition, so the instances
//! here are derived from the instances of the two parts.
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Apply, Compose, Functor};
//! use kindred::data::option::OptionKind;
//! use kindred::data::result::ResultKind;
//! use kindred::data::vec::VecKind;
//!
//! let nested = Compose(VecKind, OptionKind);
//! assert_eq!(nested.map(vec![Some(1), None, Some(3)], |n: i32| n * 2), vec![Some(2), None, Some(6)]);
//!
//! let stacked = Compose(ResultKind::<String>::new(), OptionKind);
//! let sum = stacked.map2(Ok(Some(1)), Ok(Some(2)), |a: i32, b: i32| a + b);
//! assert_eq!(sum, Ok(Some(3)));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::applicative::{Applicative, Apply, Pointed};
use super::foldable::Foldable;
use super::functor::Functor;
use super::kind::Kind;
use super::traversable::Traversable;

/// The brand of `F::Of<G::Of<A>>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compose<F, G>(pub F, pub G);

impl<F: Kind, G: Kind> Kind for Compose<F, G> {
    type Of<A: 'static> = F::Of<G::Of<A>>;
}

impl<F: Functor, G: Functor> Functor for Compose<F, G> {
    fn map<A, B, Function>(&self, fga: Self::Of<A>, function: Function) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        Function: FnMut(A) -> B + 'static,
    {
        let shared = Rc::new(RefCell::new(function));
        let inner = self.1.clone();
        self.0.map(fga, move |ga| {
            let shared = Rc::clone(&shared);
            inner.map(ga, move |value| {
                let mut function = shared.borrow_mut();
                (*function)(value)
            })
        })
    }
}

impl<F: Pointed, G: Pointed> Pointed for Compose<F, G> {
    fn of<A>(&self, value: A) -> Self::Of<A>
    where
        A: 'static,
    {
        self.0.of(self.1.of(value))
    }
}

impl<F: Applicative, G: Applicative> Apply for Compose<F, G> {
    fn map2<A, B, C, Function>(&self, fga: Self::Of<A>, fgb: Self::Of<B>, function: Function) -> Self::Of<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        Function: FnOnce(A, B) -> C + 'static,
    {
        let inner = self.1.clone();
        self.0.map2(fga, fgb, move |ga, gb| inner.map2(ga, gb, function))
    }
}

impl<F: Foldable, G: Foldable> Foldable for Compose<F, G> {
    fn reduce<A, B, Function>(&self, fga: Self::Of<A>, initial: B, mut function: Function) -> B
    where
        A: 'static,
        Function: FnMut(B, A) -> B,
    {
        let inner = &self.1;
        self.0.reduce(fga, initial, |accumulator, ga| inner.reduce(ga, accumulator, &mut function))
    }

    fn reduce_right<A, B, Function>(&self, fga: Self::Of<A>, initial: B, mut function: Function) -> B
    where
        A: 'static,
        Function: FnMut(A, B) -> B,
    {
        let inner = &self.1;
        self.0.reduce_right(fga, initial, |ga, accumulator| {
            inner.reduce_right(ga, accumulator, &mut function)
        })
    }
}

impl<F: Traversable, G: Traversable> Traversable for Compose<F, G> {
    fn traverse<H, A, B, Function>(&self, applicative: &H, fga: Self::Of<A>, mut function: Function) -> H::Of<Self::Of<B>>
    where
        H: Applicative,
        A: 'static,
        B: 'static,
        Function: FnMut(A) -> H::Of<B>,
    {
        let inner = &self.1;
        self.0.traverse(applicative, fga, |ga| inner.traverse(applicative, ga, &mut function))
    }
}
