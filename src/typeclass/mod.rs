//! Type class traits for functional programming abstractions.
//!
//! Every type class is implemented on a *brand* (see [`Kind`]), not on the
//! data type itself. The brand value is the dictionary: generic algorithms
//! take it as an explicit argument, and choosing a different brand for the
//! same data type chooses a different instance.
//!
//! - [`Functor`]: mapping over contents
//! - [`Pointed`], [`Apply`], [`Applicative`]: lifting and combining independent effects
//! - [`Flattenable`], [`Monad`]: sequencing dependent effects
//! - [`Alt`], [`Zero`], [`Alternative`]: choice
//! - [`Foldable`], [`Traversable`]: reducing and traversing structures
//! - [`Compactable`], [`Filterable`], [`Witherable`]: removing and splitting elements
//! - [`Bifunctor`]: mapping both sides of a two-argument kind
//! - [`Compose`]: the composition of two brands
//! - [`Semigroup`], [`Monoid`]: combining plain values
//!
//! # Examples
//!
//! ```rust
//! use kindred::typeclass::{Apply, Traversable};
//! use kindred::data::result::{ResultKind, ValidatedApplicative};
//! use kindred::data::vec::VecKind;
//!
//! fn check(n: i32) -> Result<i32, String> {
//!     if n >= 0 { Ok(n) } else { Err(format!("[{n}]")) }
//! }
//!
//! // First error only
//! let first = VecKind.traverse(&ResultKind::<String>::new(), vec![1, -2, -3], check);
//! assert_eq!(first, Err("[-2]".to_string()));
//!
//! // Every error, combined with String's semigroup
//! let all = VecKind.traverse(&ValidatedApplicative::<String>::new(), vec![1, -2, -3], check);
//! assert_eq!(all, Err("[-2][-3]".to_string()));
//! ```

mod alt;
mod applicative;
mod bifunctor;
mod compose;
mod filterable;
mod foldable;
mod functor;
mod kind;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use alt::{Alt, Alternative, Zero};
pub use applicative::{Applicative, Apply, Pointed};
pub use bifunctor::Bifunctor;
pub use compose::Compose;
pub use filterable::{Compactable, Filterable, Witherable};
pub use foldable::Foldable;
pub use functor::Functor;
pub use kind::{Kind, Kind2};
pub use monad::{Flattenable, Monad};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{Bounded, First, Last, Max, Min, Product, Reverse, Sum};
