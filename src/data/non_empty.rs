//! Non-empty vector type.
//!
//! A `NonEmptyVec` stores its first element separately, so the "at least one
//! element" guarantee holds by construction and [`NonEmptyVec::head`] needs
//! no `Option`. It is also the natural error carrier of an accumulating
//! instance: combining two non-empty lists of errors is never empty.
//!
//! # Examples
//!
//! ```rust
//! use kindred::data::non_empty::NonEmptyVec;
//! use kindred::data::result::validated_applicative;
//! use kindred::typeclass::Apply;
//!
//! let brand = validated_applicative::<NonEmptyVec<&str>>();
//! let name: Result<&str, _> = Err(NonEmptyVec::singleton("name is empty"));
//! let age: Result<u8, _> = Err(NonEmptyVec::singleton("age is negative"));
//! let errors = brand.map2(name, age, |name, age| (name, age)).unwrap_err();
//! assert_eq!(errors.into_vec(), vec!["name is empty", "age is negative"]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EmptyVecError;
use crate::typeclass::{Alt, Applicative, Foldable, Functor, Kind, Pointed, Semigroup, Traversable};

/// A vector guaranteed to contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<A>", into = "Vec<A>", bound(deserialize = "A: Deserialize<'de>", serialize = "A: Serialize + Clone"))
)]
pub struct NonEmptyVec<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmptyVec<A> {
    /// Creates a vector from its first element and the rest.
    #[inline]
    pub const fn new(head: A, tail: Vec<A>) -> Self {
        Self { head, tail }
    }

    /// A vector with exactly one element.
    #[inline]
    pub const fn singleton(value: A) -> Self {
        Self::new(value, Vec::new())
    }

    /// Prepends `head` to an ordinary vector.
    pub fn cons(head: A, tail: Vec<A>) -> Self {
        Self::new(head, tail)
    }

    /// Appends `last` to an ordinary vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::data::non_empty::NonEmptyVec;
    ///
    /// let items = NonEmptyVec::snoc(vec![1, 2], 3);
    /// assert_eq!(items.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn snoc(init: Vec<A>, last: A) -> Self {
        let mut items = init.into_iter();
        match items.next() {
            Some(head) => {
                let mut tail: Vec<A> = items.collect();
                tail.push(last);
                Self::new(head, tail)
            }
            None => Self::singleton(last),
        }
    }

    /// `None` for an empty vector.
    pub fn from_vec(items: Vec<A>) -> Option<Self> {
        let mut items = items.into_iter();
        let head = items.next()?;
        Some(Self::new(head, items.collect()))
    }

    /// The first element.
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Every element after the first.
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// The last element.
    pub fn last(&self) -> &A {
        self.tail.last().unwrap_or(&self.head)
    }

    /// The number of elements, at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Appends an element.
    pub fn push(&mut self, value: A) {
        self.tail.push(value);
    }

    /// Maps every element, keeping the length.
    pub fn map<B>(self, mut function: impl FnMut(A) -> B) -> NonEmptyVec<B> {
        let head = function(self.head);
        NonEmptyVec::new(head, self.tail.into_iter().map(function).collect())
    }

    /// Appends all elements of `other`.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    /// The elements in reverse order.
    #[must_use]
    pub fn reverse(self) -> Self {
        let (head, tail) = self.into_parts();
        Self::snoc(tail.into_iter().rev().collect(), head)
    }

    /// Splits into the first element and the rest.
    pub fn into_parts(self) -> (A, Vec<A>) {
        (self.head, self.tail)
    }

    /// Converts into an ordinary vector.
    pub fn into_vec(self) -> Vec<A> {
        let mut items = Vec::with_capacity(self.len());
        items.push(self.head);
        items.extend(self.tail);
        items
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &A> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<A> TryFrom<Vec<A>> for NonEmptyVec<A> {
    type Error = EmptyVecError;

    fn try_from(items: Vec<A>) -> Result<Self, Self::Error> {
        Self::from_vec(items).ok_or(EmptyVecError)
    }
}

impl<A> From<NonEmptyVec<A>> for Vec<A> {
    fn from(items: NonEmptyVec<A>) -> Self {
        items.into_vec()
    }
}

impl<A> IntoIterator for NonEmptyVec<A> {
    type Item = A;
    type IntoIter = std::iter::Chain<std::iter::Once<A>, std::vec::IntoIter<A>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<A> Semigroup for NonEmptyVec<A> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

/// Brand of [`NonEmptyVec`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonEmptyKind;

impl Kind for NonEmptyKind {
    type Of<A: 'static> = NonEmptyVec<A>;
}

impl Functor for NonEmptyKind {
    fn map<A, B, F>(&self, fa: NonEmptyVec<A>, function: F) -> NonEmptyVec<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Pointed for NonEmptyKind {
    fn of<A: 'static>(&self, value: A) -> NonEmptyVec<A> {
        NonEmptyVec::singleton(value)
    }
}

impl Alt for NonEmptyKind {
    fn or_else<A, F>(&self, first: NonEmptyVec<A>, that: F) -> NonEmptyVec<A>
    where
        A: 'static,
        F: FnOnce() -> NonEmptyVec<A> + 'static,
    {
        first.concat(that())
    }
}

impl Foldable for NonEmptyKind {
    fn reduce<A, B, F>(&self, fa: NonEmptyVec<A>, initial: B, function: F) -> B
    where
        A: 'static,
        F: FnMut(B, A) -> B,
    {
        fa.into_iter().fold(initial, function)
    }

    fn reduce_right<A, B, F>(&self, fa: NonEmptyVec<A>, initial: B, mut function: F) -> B
    where
        A: 'static,
        F: FnMut(A, B) -> B,
    {
        fa.into_vec()
            .into_iter()
            .rev()
            .fold(initial, |accumulator, element| function(element, accumulator))
    }
}

impl Traversable for NonEmptyKind {
    fn traverse<G, A, B, F>(&self, applicative: &G, ta: NonEmptyVec<A>, mut function: F) -> G::Of<NonEmptyVec<B>>
    where
        G: Applicative,
        A: 'static,
        B: 'static,
        F: FnMut(A) -> G::Of<B>,
    {
        let (head, tail) = ta.into_parts();
        let first = applicative.map(function(head), NonEmptyVec::singleton);
        tail.into_iter().fold(first, |accumulator, element| {
            applicative.map2(accumulator, function(element), |mut collected, value| {
                collected.push(value);
                collected
            })
        })
    }
}
