//! Effects and the composed types built on them.
//!
//! # Base effects
//!
//! - [`IO`]: deferred synchronous computations ([`IOKind`]).
//! - [`Reader`]: computations reading an environment ([`ReaderKind`]).
//! - [`Async`]: deferred asynchronous computations, with the brands
//!   [`AsyncSeq`] and [`AsyncPar`] (feature `async`).
//!
//! # Transformer brands
//!
//! Each transformer takes the dictionary of an outer effect and builds the
//! dictionary of a composed one:
//!
//! - [`ResultT`]: `M::Of<Result<A, E>>`, first error wins.
//! - [`ValidatedT`]: `M::Of<Result<A, E>>`, errors are combined.
//! - [`OptionT`]: `M::Of<Option<A>>`.
//! - [`ReaderT`]: `Reader<R, M::Of<A>>`.
//!
//! # Composed types
//!
//! | module                  | type                                  |
//! |-------------------------|---------------------------------------|
//! | [`io_result`]           | `IO<Result<A, E>>`                    |
//! | [`reader_result`]       | `Reader<R, Result<A, E>>`             |
//! | `async_result`          | `Async<Result<A, E>>`                 |
//! | `reader_async_result`   | `Reader<R, Async<Result<A, E>>>`      |
//! | `async_option`          | `Async<Option<A>>`                    |
//!
//! ```rust
//! use kindred::effect::{io_result, IO};
//! use kindred::typeclass::Flattenable;
//!
//! let brand = io_result::instance::<String>();
//! let io = brand.flat_map(io_result::succeed(10), |x: i32| IO::pure(Ok(x * 2 + 1)));
//! assert_eq!(io.run_unsafe(), Ok(21));
//! ```

mod io;
mod option_t;
mod reader;
mod reader_t;
mod result_t;
mod validated_t;

pub mod io_result;
pub mod reader_result;

pub use io::{IO, IOKind};
pub use option_t::OptionT;
pub use reader::{Reader, ReaderKind};
pub use reader_t::ReaderT;
pub use result_t::ResultT;
pub use validated_t::ValidatedT;

#[cfg(feature = "async")]
mod async_io;

#[cfg(feature = "async")]
pub mod async_option;
#[cfg(feature = "async")]
pub mod async_result;
#[cfg(feature = "async")]
pub mod reader_async_result;

#[cfg(feature = "async")]
pub use async_io::{Async, AsyncPar, AsyncSeq};
