//! Identity wrapper type - the identity functor.
//!
//! `Identity` adds no effect at all. It is the base of transformer stacks
//! (`ResultT<IdentityKind, E>` behaves like plain `Result`) and the reference
//! instance in the traversable identity law.

use crate::typeclass::{
    Apply, Flattenable, Foldable, Functor, Kind, Monoid, Pointed, Semigroup, Traversable,
};

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use kindred::data::identity::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// assert_eq!(Identity(42).0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

/// Brand of [`Identity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityKind;

impl Kind for IdentityKind {
    type Of<A: 'static> = Identity<A>;
}

impl Functor for IdentityKind {
    fn map<A, B, F>(&self, fa: Identity<A>, mut function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        Identity(function(fa.0))
    }
}

impl Pointed for IdentityKind {
    fn of<A: 'static>(&self, value: A) -> Identity<A> {
        Identity(value)
    }
}

impl Apply for IdentityKind {
    fn map2<A, B, C, F>(&self, fa: Identity<A>, fb: Identity<B>, function: F) -> Identity<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Identity(function(fa.0, fb.0))
    }
}

impl Flattenable for IdentityKind {
    fn flat_map<A, B, F>(&self, fa: Identity<A>, function: F) -> Identity<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Identity<B> + 'static,
    {
        function(fa.0)
    }
}

impl Foldable for IdentityKind {
    fn reduce<A, B, F>(&self, fa: Identity<A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(B, A) -> B,
    {
        function(initial, fa.0)
    }

    fn reduce_right<A, B, F>(&self, fa: Identity<A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(A, B) -> B,
    {
        function(fa.0, initial)
    }
}

impl Traversable for IdentityKind {
    fn traverse<G, A, B, F>(&self, applicative: &G, ta: Identity<A>, mut function: F) -> G::Of<Identity<B>>
    where
        G: crate::typeclass::Applicative,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> G::Of<B>,
    {
        applicative.map(function(ta.0), Identity)
    }
}
