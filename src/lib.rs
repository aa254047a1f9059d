//! # kindred
//!
//! Typeclasses over brands, the `Option` / `Result` algebra, and effect
//! types composed from them.
//!
//! ## Overview
//!
//! Rust has no higher-kinded types, so a type constructor such as `Option`
//! is represented by a *brand*: a small value implementing [`Kind`](typeclass::Kind) whose
//! generic associated type `Of<A>` applies the constructor. Typeclasses
//! (`Functor`, `Apply`, `Flattenable`, `Traversable`, ...) are traits
//! implemented by brands, and generic code receives the brands it needs as
//! explicit dictionaries:
//!
//! ```rust
//! use kindred::prelude::*;
//!
//! let parsed = VecKind.traverse(&OptionKind, vec!["1", "2", "3"], |text: &str| text.parse::<i32>().ok());
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//!
//! let errors = VecKind.traverse(&validated_applicative::<Vec<String>>(), vec![1, -2, -3], |n: i32| {
//!     if n > 0 { Ok(n) } else { Err(vec![format!("{n} is negative")]) }
//! });
//! assert_eq!(errors, Err(vec!["-2 is negative".to_string(), "-3 is negative".to_string()]));
//! ```
//!
//! Choosing a different brand for the same type changes its behaviour:
//! [`ResultKind`](data::result::ResultKind) keeps the first error,
//! [`ValidatedApplicative`](data::result::ValidatedApplicative) combines
//! them.
//!
//! ## Modules
//!
//! - [`typeclass`]: `Kind`, the typeclass traits, `Semigroup` / `Monoid`
//!   and their wrappers.
//! - [`data`]: `Option`, `Result`, `Vec`, `NonEmptyVec`, `These` and
//!   `Identity`, each with its brands and free functions.
//! - [`effect`]: `IO`, `Reader`, `Async`, the transformer brands and the
//!   composed types (`io_result`, `async_result`, ...).
//! - [`error`]: the crate's own error types.
//!
//! ## Feature Flags
//!
//! - `effect` (default): the [`effect`] module.
//! - `async` (default): `Async` and the async composed types; pulls in
//!   `futures` and `tokio`'s timer.
//! - `serde`: `Serialize` / `Deserialize` for `NonEmptyVec` and `These`.
//! - `tracing`: events at the panic boundaries.
//! - `full`: everything.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use kindred::prelude::*;
/// ```
pub mod prelude {
    pub use crate::typeclass::*;

    pub use crate::data::identity::{Identity, IdentityKind};
    pub use crate::data::non_empty::{NonEmptyKind, NonEmptyVec};
    pub use crate::data::option::OptionKind;
    pub use crate::data::result::{
        ResultBifunctor, ResultFilterable, ResultKind, ValidatedAlt, ValidatedApplicative, validated_alt,
        validated_applicative,
    };
    pub use crate::data::these::{These, TheseBifunctor, TheseKind};
    pub use crate::data::vec::VecKind;
    pub use crate::error::{EmptyVecError, PanicError};

    #[cfg(feature = "effect")]
    pub use crate::effect::{IO, IOKind, OptionT, Reader, ReaderKind, ReaderT, ResultT, ValidatedT};

    #[cfg(feature = "async")]
    pub use crate::effect::{Async, AsyncPar, AsyncSeq};
}

pub mod data;
pub mod error;
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
