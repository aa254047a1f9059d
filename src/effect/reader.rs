//! Reader - computations that depend on an environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads the
//! same environment through every step, which makes it the dependency
//! injection layer of [`reader_result`](super::reader_result) and
//! [`reader_async_result`](super::reader_async_result).
//!
//! Readers are single-shot: [`Reader::run`] consumes the reader. Sequencing
//! hands a clone of the environment to each step, so combinators that run
//! more than one reader require `R: Clone`.
//!
//! # Laws
//!
//! - Left Identity: `Reader::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Reader::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - Local Identity: `Reader::local(|r| r, m) == m`
//! - Ask Retrieval: `Reader::ask().run(r) == r`
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! fn address() -> Reader<Config, String> {
//!     Reader::asks(|config: Config| config.host)
//!         .map2(Reader::asks(|config: Config| config.port), |host, port| format!("{host}:{port}"))
//! }
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address().run(config), "localhost:8080");
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{Apply, Flattenable, Functor, Kind, Pointed};

/// A single-shot computation reading an environment of type `R`.
pub struct Reader<R, A> {
    run_function: Box<dyn FnOnce(R) -> A>,
}

impl<R: 'static, A: 'static> Reader<R, A> {
    /// Creates a reader from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(R) -> A + 'static,
    {
        Self {
            run_function: Box::new(function),
        }
    }

    /// Runs the computation with `environment`.
    pub fn run(self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// A reader ignoring its environment.
    pub fn pure(value: A) -> Self {
        Self::new(move |_| value)
    }

    /// Reads a projection of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: FnOnce(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` in an environment derived by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::Reader;
    ///
    /// let doubled = Reader::local(|n: i32| n * 2, Reader::ask());
    /// assert_eq!(doubled.run(21), 42);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(R) -> R + 'static,
    {
        Self::new(move |environment| computation.run(modifier(environment)))
    }

    /// Maps the produced value.
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Reader::new(move |environment| function(self.run(environment)))
    }
}

impl<R: Clone + 'static, A: 'static> Reader<R, A> {
    /// Runs `self`, then the reader chosen from its value, in the same
    /// environment.
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        B: 'static,
        F: FnOnce(A) -> Reader<R, B> + 'static,
    {
        Reader::new(move |environment: R| {
            let value = self.run(environment.clone());
            function(value).run(environment)
        })
    }

    /// Runs both readers in the same environment and combines the values.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Reader::new(move |environment: R| {
            let first = self.run(environment.clone());
            let second = other.run(environment);
            function(first, second)
        })
    }
}

impl<R: 'static> Reader<R, R> {
    /// Reads the whole environment.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> fmt::Debug for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Reader(<function>)")
    }
}

/// Brand of `Reader<R, _>`.
pub struct ReaderKind<R>(PhantomData<fn(R)>);

impl<R> ReaderKind<R> {
    /// Creates the brand.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Clone for ReaderKind<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ReaderKind<R> {}

impl<R> Default for ReaderKind<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for ReaderKind<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ReaderKind")
    }
}

impl<R: 'static> Kind for ReaderKind<R> {
    type Of<A: 'static> = Reader<R, A>;
}

impl<R: 'static> Functor for ReaderKind<R> {
    fn map<A, B, F>(&self, fa: Reader<R, A>, function: F) -> Reader<R, B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl<R: 'static> Pointed for ReaderKind<R> {
    fn of<A: 'static>(&self, value: A) -> Reader<R, A> {
        Reader::pure(value)
    }
}

impl<R: Clone + 'static> Apply for ReaderKind<R> {
    fn map2<A, B, C, F>(&self, fa: Reader<R, A>, fb: Reader<R, B>, function: F) -> Reader<R, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        fa.map2(fb, function)
    }
}

impl<R: Clone + 'static> Flattenable for ReaderKind<R> {
    fn flat_map<A, B, F>(&self, fa: Reader<R, A>, function: F) -> Reader<R, B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> Reader<R, B> + 'static,
    {
        fa.flat_map(function)
    }
}
