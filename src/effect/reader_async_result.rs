//! `ReaderAsyncResult` - asynchronous computations that read an environment
//! and may fail.
//!
//! `ReaderAsyncResult<R, E, A>` is `Reader<R, AsyncResult<E, A>>`. Running
//! the reader hands over the environment and yields an
//! [`AsyncResult`]; awaiting that runs the effects. As with
//! [`async_result`](super::async_result), [`seq`] and [`par`] pick how
//! independent computations are scheduled.
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::reader_async_result::{self, ReaderAsyncResult};
//! use kindred::typeclass::Apply;
//!
//! #[derive(Clone)]
//! struct Endpoints {
//!     primary: &'static str,
//!     mirror: &'static str,
//! }
//!
//! fn primary() -> ReaderAsyncResult<Endpoints, String, &'static str> {
//!     reader_async_result::asks(|endpoints: Endpoints| endpoints.primary)
//! }
//!
//! fn mirror() -> ReaderAsyncResult<Endpoints, String, &'static str> {
//!     reader_async_result::asks(|endpoints: Endpoints| endpoints.mirror)
//! }
//!
//! let both = reader_async_result::par::<Endpoints, String>().map2(primary(), mirror(), |a, b| vec![a, b]);
//! let endpoints = Endpoints { primary: "eu", mirror: "us" };
//! assert_eq!(futures::executor::block_on(both.run(endpoints)), Ok(vec!["eu", "us"]));
//! ```

use super::async_io::{Async, AsyncPar, AsyncSeq};
use super::async_result::{self, AsyncResult};
use super::reader::Reader;
use super::reader_t::ReaderT;
use super::result_t::ResultT;

/// A computation reading `R` and producing an [`AsyncResult`].
pub type ReaderAsyncResult<R, E, A> = Reader<R, AsyncResult<E, A>>;

/// Dictionary whose `map2` awaits one computation after the other.
pub const fn seq<R, E>() -> ReaderT<R, ResultT<AsyncSeq, E>> {
    ReaderT::new(ResultT::new(AsyncSeq))
}

/// Dictionary whose `map2` drives both computations concurrently.
pub const fn par<R, E>() -> ReaderT<R, ResultT<AsyncPar, E>> {
    ReaderT::new(ResultT::new(AsyncPar))
}

/// Reads the whole environment.
pub fn ask<R: 'static, E: 'static>() -> ReaderAsyncResult<R, E, R> {
    Reader::new(async_result::succeed)
}

/// Reads a projection of the environment.
pub fn asks<R, E, A, F>(projection: F) -> ReaderAsyncResult<R, E, A>
where
    R: 'static,
    E: 'static,
    A: 'static,
    F: FnOnce(R) -> A + 'static,
{
    Reader::new(move |environment| async_result::succeed(projection(environment)))
}

/// Lifts a computation that ignores the environment.
pub fn from_async_result<R: 'static, E: 'static, A: 'static>(computation: AsyncResult<E, A>) -> ReaderAsyncResult<R, E, A> {
    Reader::new(move |_| computation)
}

/// A computation that succeeds with `value` in every environment.
pub fn succeed<R: 'static, E: 'static, A: 'static>(value: A) -> ReaderAsyncResult<R, E, A> {
    from_async_result(async_result::succeed(value))
}

/// A computation that fails with `error` in every environment.
pub fn fail<R: 'static, E: 'static, A: 'static>(error: E) -> ReaderAsyncResult<R, E, A> {
    from_async_result(async_result::fail(error))
}

/// Lifts a plain `Result`.
pub fn from_result<R: 'static, E: 'static, A: 'static>(result: Result<A, E>) -> ReaderAsyncResult<R, E, A> {
    from_async_result(Async::pure(result))
}

/// Runs `computation` in an environment derived by `modifier`.
pub fn local<R, E, A, F>(modifier: F, computation: ReaderAsyncResult<R, E, A>) -> ReaderAsyncResult<R, E, A>
where
    R: 'static,
    E: 'static,
    A: 'static,
    F: FnOnce(R) -> R + 'static,
{
    Reader::local(modifier, computation)
}

/// Runs `function` on every item one after another in the same
/// environment, stopping at the first failure.
pub fn traverse_array_seq<R, A, B, E, F>(items: Vec<A>, mut function: F) -> ReaderAsyncResult<R, E, Vec<B>>
where
    R: Clone + 'static,
    A: 'static,
    B: 'static,
    E: 'static,
    F: FnMut(A) -> ReaderAsyncResult<R, E, B> + 'static,
{
    Reader::new(move |environment: R| {
        async_result::traverse_array_seq(items, move |item| function(item).run(environment.clone()))
    })
}

/// Drives the computations of every item concurrently in the same
/// environment; the failure with the smallest index is reported.
pub fn traverse_array_par<R, A, B, E, F>(items: Vec<A>, mut function: F) -> ReaderAsyncResult<R, E, Vec<B>>
where
    R: Clone + 'static,
    A: 'static,
    B: 'static,
    E: 'static,
    F: FnMut(A) -> ReaderAsyncResult<R, E, B> + 'static,
{
    Reader::new(move |environment: R| {
        async_result::traverse_array_par(items, |item| function(item).run(environment.clone()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Flattenable;
    use std::time::Duration;
    use tokio::time::Instant;

    fn delayed_lookup(millis: u64) -> ReaderAsyncResult<u64, String, u64> {
        Reader::new(move |base: u64| {
            Async::new(move || async move {
                tokio::time::sleep(Duration::from_millis(millis)).await;
                Ok(base + millis)
            })
        })
    }

    #[tokio::test(start_paused = true)]
    async fn traverse_array_par_overlaps_lookups() {
        let start = Instant::now();
        let collected = traverse_array_par(vec![100, 50, 100], delayed_lookup).run(1).await;
        assert_eq!(collected, Ok(vec![101, 51, 101]));
        assert!(start.elapsed() < Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn traverse_array_seq_adds_up_lookups() {
        let start = Instant::now();
        let collected = traverse_array_seq(vec![100, 50, 100], delayed_lookup).run(1).await;
        assert_eq!(collected, Ok(vec![101, 51, 101]));
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test]
    async fn traverse_array_seq_handles_long_inputs() {
        let items: Vec<u32> = (0..100_000).collect();
        let traversed = traverse_array_seq(items, |n: u32| asks::<u32, String, _, _>(move |offset: u32| n + offset)).run(1).await;
        assert_eq!(traversed.map(|values| values[99_999]), Ok(100_000));
    }

    #[tokio::test]
    async fn flat_map_threads_environment() {
        let brand = seq::<String, String>();
        let greeting = brand.flat_map(ask(), |name: String| {
            asks(move |greeting_target: String| format!("{name} greets {greeting_target}"))
        });
        assert_eq!(greeting.run("ada".to_string()).await, Ok("ada greets ada".to_string()));
    }

    #[tokio::test]
    async fn local_and_fail() {
        let shifted = local(|n: i32| n + 10, ask::<i32, String>());
        assert_eq!(shifted.run(1).await, Ok(11));
        let failed = fail::<i32, String, i32>("down".to_string());
        assert_eq!(failed.run(1).await, Err("down".to_string()));
        let lifted = from_result::<i32, String, _>(Ok(2));
        assert_eq!(lifted.run(0).await, Ok(2));
    }
}
