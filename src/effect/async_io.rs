//! Async - deferred asynchronous computations.
//!
//! An `Async<A>` describes a computation that eventually produces an `A`.
//! Like [`IO`](super::IO) it is lazy: building it starts nothing, and the
//! work begins when the value is awaited. It is single-shot, since awaiting
//! consumes it.
//!
//! Whether two computations run one after another or concurrently is a
//! choice of brand:
//!
//! - [`AsyncSeq`] awaits the first computation, then the second.
//! - [`AsyncPar`] drives both with [`futures::future::join`]. The values
//!   still come back in positional order.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::{Async, AsyncPar};
//! use kindred::typeclass::Apply;
//!
//! let total = AsyncPar.map2(Async::pure(40), Async::new(|| async { 2 }), |a, b| a + b);
//! assert_eq!(futures::executor::block_on(total), 42);
//! ```

use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::error::PanicError;
use crate::typeclass::{Apply, Flattenable, Functor, Kind, Pointed};

/// A deferred, single-shot asynchronous computation.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `Async::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Async::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[must_use = "an Async does nothing until it is awaited"]
pub struct Async<A> {
    future: LocalBoxFuture<'static, A>,
}

impl<A: 'static> Async<A> {
    /// Suspends `thunk`; it is called on the first poll.
    pub fn new<F, Fut>(thunk: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = A> + 'static,
    {
        Self::from_future(async move { thunk().await })
    }

    /// Wraps an existing future.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + 'static,
    {
        Self {
            future: future.boxed_local(),
        }
    }

    /// A computation completing immediately with `value`.
    pub fn pure(value: A) -> Self {
        Self::from_future(futures::future::ready(value))
    }

    /// Runs the computation to completion.
    pub async fn run(self) -> A {
        self.await
    }

    /// Maps the produced value.
    pub fn map<B, F>(self, function: F) -> Async<B>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        Async::from_future(self.future.map(function))
    }

    /// Awaits `self`, then the computation chosen from its value.
    pub fn flat_map<B, F>(self, function: F) -> Async<B>
    where
        B: 'static,
        F: FnOnce(A) -> Async<B> + 'static,
    {
        Async::from_future(self.future.then(function))
    }

    /// Awaits `self`; a panic is handed to `handler` instead of unwinding.
    pub fn catch<F>(computation: Self, handler: F) -> Self
    where
        F: FnOnce(PanicError) -> A + 'static,
    {
        Self::from_future(async move {
            match AssertUnwindSafe(computation).catch_unwind().await {
                Ok(value) => value,
                Err(payload) => {
                    let error = PanicError::from_payload(&*payload);
                    #[cfg(feature = "tracing")]
                    tracing::debug!(panic.message = %error.message, "async panic converted into a failure");
                    handler(error)
                }
            }
        })
    }
}

impl Async<()> {
    /// Completes after `duration` on the tokio timer.
    pub fn delay(duration: Duration) -> Self {
        Self::from_future(tokio::time::sleep(duration))
    }
}

impl<A> Future for Async<A> {
    type Output = A;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<A> {
        self.future.poll_unpin(context)
    }
}

impl<A> fmt::Debug for Async<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Async(<future>)")
    }
}

/// Brand of [`Async`] with sequential `map2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsyncSeq;

/// Brand of [`Async`] with concurrent `map2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsyncPar;

macro_rules! async_brand {
    ($brand:ident) => {
        impl Kind for $brand {
            type Of<A: 'static> = Async<A>;
        }

        impl Functor for $brand {
            fn map<A, B, F>(&self, fa: Async<A>, function: F) -> Async<B>
            where
                A: 'static,
                B: 'static,
                F: FnMut(A) -> B + 'static,
            {
                fa.map(function)
            }
        }

        impl Pointed for $brand {
            fn of<A: 'static>(&self, value: A) -> Async<A> {
                Async::pure(value)
            }
        }

        impl Flattenable for $brand {
            fn flat_map<A, B, F>(&self, fa: Async<A>, function: F) -> Async<B>
            where
                A: 'static,
                B: 'static,
                F: FnOnce(A) -> Async<B> + 'static,
            {
                fa.flat_map(function)
            }
        }
    };
}

async_brand!(AsyncSeq);
async_brand!(AsyncPar);

impl Apply for AsyncSeq {
    fn map2<A, B, C, F>(&self, fa: Async<A>, fb: Async<B>, function: F) -> Async<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Async::from_future(async move {
            let first = fa.await;
            let second = fb.await;
            function(first, second)
        })
    }
}

impl Apply for AsyncPar {
    fn map2<A, B, C, F>(&self, fa: Async<A>, fb: Async<B>, function: F) -> Async<C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        Async::from_future(futures::future::join(fa, fb).map(move |(first, second)| function(first, second)))
    }
}

// Async wraps a local future and stays on the thread that created it.
static_assertions::assert_not_impl_any!(Async<i32>: Send, Sync);
static_assertions::assert_impl_all!(AsyncSeq: crate::typeclass::Monad);
static_assertions::assert_impl_all!(AsyncPar: crate::typeclass::Monad);
