//! IO - deferred synchronous effects.
//!
//! An `IO<A>` describes a computation producing an `A`; nothing runs until
//! [`IO::run_unsafe`] is called, at the edge of the program. It is the
//! synchronous outer effect of [`io_result`](super::io_result).
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let executed = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&executed);
//!
//! let io = IO::new(move || {
//!     flag.set(true);
//!     42
//! })
//! .map(|n| n + 1);
//!
//! assert!(!executed.get());
//! assert_eq!(io.run_unsafe(), 43);
//! assert!(executed.get());
//! ```

use std::fmt;
use std::time::Duration;

use crate::error::{PanicError, catch_panic};
use crate::typeclass::{Apply, Flattenable, Functor, Kind, Pointed};

/// A deferred, single-shot synchronous computation.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    run_io: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Suspends `action`.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// An action returning `value` without side effects.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Runs the computation.
    pub fn run_unsafe(self) -> A {
        (self.run_io)()
    }

    /// Maps the produced value.
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Runs `self`, then the action chosen from its value.
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        B: 'static,
        F: FnOnce(A) -> IO<B> + 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Runs `self` then `other` and combines both values.
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        IO::new(move || {
            let first = self.run_unsafe();
            let second = other.run_unsafe();
            function(first, second)
        })
    }

    /// Runs `self`; a panic is handed to `handler` instead of unwinding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindred::effect::IO;
    ///
    /// let recovered = IO::catch(IO::new(|| -> String { panic!("oops") }), |error| error.message);
    /// assert_eq!(recovered.run_unsafe(), "oops");
    /// ```
    pub fn catch<F>(io: Self, handler: F) -> Self
    where
        F: FnOnce(PanicError) -> A + 'static,
    {
        IO::new(move || catch_panic(move || io.run_unsafe()).unwrap_or_else(handler))
    }
}

impl IO<()> {
    /// Blocks the current thread for `duration` when run.
    pub fn delay(duration: Duration) -> Self {
        Self::new(move || std::thread::sleep(duration))
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IO(<deferred>)")
    }
}

/// Brand of [`IO`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IOKind;

impl Kind for IOKind {
    type Of<A: 'static> = IO<A>;
}

impl Functor for IOKind {
    fn map<A, B, F>(&self, fa: IO<A>, function: F) -> IO<B>
    where
        A: 'static,
        B: 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Pointed for IOKind {
    fn of<A: 'static>(&self, value: A) -> IO<A> {
        IO::pure(value)
    }
}

impl Apply for IOKind {
    fn map2<A, B, C, F>(&self, fa: IO<A>, fb: IO<B>, function: F) -> IO<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        fa.map2(fb, function)
    }
}

impl Flattenable for IOKind {
    fn flat_map<A, B, F>(&self, fa: IO<A>, function: F) -> IO<B>
    where
        A: 'static,
        B: 'static,
        F: FnOnce(A) -> IO<B> + 'static,
    {
        fa.flat_map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[rstest]
    fn map2_runs_left_then_right() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first_log = Rc::clone(&log);
        let second_log = Rc::clone(&log);
        let first = IO::new(move || first_log.borrow_mut().push("first"));
        let second = IO::new(move || second_log.borrow_mut().push("second"));
        IOKind.map2(first, second, |(), ()| ()).run_unsafe();
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[rstest]
    fn flat_map_defers_until_run() {
        let runs = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&runs);
        let io = IOKind.flat_map(IO::pure(2), move |n: i32| {
            *counter.borrow_mut() += 1;
            IO::pure(n * 5)
        });
        assert_eq!(*runs.borrow(), 0);
        assert_eq!(io.run_unsafe(), 10);
        assert_eq!(*runs.borrow(), 1);
    }

    #[rstest]
    fn catch_passes_success_through() {
        assert_eq!(IO::catch(IO::pure(1), |_| 0).run_unsafe(), 1);
    }

    #[rstest]
    fn delay_completes() {
        IO::delay(Duration::from_millis(1)).run_unsafe();
    }
}
