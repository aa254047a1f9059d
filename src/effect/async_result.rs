//! `AsyncResult` - asynchronous computations that may fail.
//!
//! `AsyncResult<E, A>` is `Async<Result<A, E>>`. There is one dictionary per
//! combination of scheduling and error strategy, and picking one is always
//! explicit:
//!
//! | dictionary        | `map2` runs effects | both fail        |
//! |-------------------|---------------------|------------------|
//! | [`seq`]           | one after another   | first error      |
//! | [`par`]           | concurrently        | first error      |
//! | [`validated_seq`] | one after another   | errors combined  |
//! | [`validated_par`] | concurrently        | errors combined  |
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::async_result;
//! use kindred::typeclass::Apply;
//!
//! let brand = async_result::validated_par::<Vec<&str>>();
//! let checked = brand.map2(
//!     async_result::fail::<_, u8>(vec!["missing name"]),
//!     async_result::fail::<_, u8>(vec!["missing age"]),
//!     |name, age| (name, age),
//! );
//! assert_eq!(futures::executor::block_on(checked), Err(vec!["missing name", "missing age"]));
//! ```

use std::future::Future;
use std::panic::{AssertUnwindSafe, resume_unwind};

use futures::FutureExt;

use super::async_io::{Async, AsyncPar, AsyncSeq};
use super::result_t::ResultT;
use super::validated_t::ValidatedT;
use crate::error::{PanicError, report_release_failure};

/// An asynchronous computation producing `Result<A, E>`.
pub type AsyncResult<E, A> = Async<Result<A, E>>;

/// Sequential, first-error dictionary.
pub const fn seq<E>() -> ResultT<AsyncSeq, E> {
    ResultT::new(AsyncSeq)
}

/// Concurrent, first-error dictionary.
pub const fn par<E>() -> ResultT<AsyncPar, E> {
    ResultT::new(AsyncPar)
}

/// Sequential dictionary combining the errors of failed computations.
pub const fn validated_seq<E>() -> ValidatedT<AsyncSeq, E> {
    ValidatedT::new(AsyncSeq)
}

/// Concurrent dictionary combining the errors of failed computations.
pub const fn validated_par<E>() -> ValidatedT<AsyncPar, E> {
    ValidatedT::new(AsyncPar)
}

/// A computation that succeeds with `value`.
pub fn succeed<E: 'static, A: 'static>(value: A) -> AsyncResult<E, A> {
    Async::pure(Ok(value))
}

/// A computation that fails with `error`.
pub fn fail<E: 'static, A: 'static>(error: E) -> AsyncResult<E, A> {
    Async::pure(Err(error))
}

/// Lifts a plain `Result`.
pub fn from_result<E: 'static, A: 'static>(result: Result<A, E>) -> AsyncResult<E, A> {
    Async::pure(result)
}

/// Defers the future built by `thunk`; a panic while building or polling
/// it becomes the failure `on_panic(error)`.
pub fn try_catch<A, E, F, Fut, H>(thunk: F, on_panic: H) -> AsyncResult<E, A>
where
    A: 'static,
    E: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = A> + 'static,
    H: FnOnce(PanicError) -> E + 'static,
{
    Async::catch(Async::new(thunk).map(Ok), move |error| Err(on_panic(error)))
}

/// Acquires a resource, uses it and releases it.
///
/// `release` runs exactly once after a successful `acquire`: when
/// `use_resource` succeeds, when it fails, and when it panics. A failing
/// release replaces the outcome of `use_resource`. After a panic the release
/// still runs, a failure of the release itself is logged, and the original
/// panic resumes.
pub fn bracket<R, B, E, U, L>(acquire: AsyncResult<E, R>, use_resource: U, release: L) -> AsyncResult<E, B>
where
    R: Clone + 'static,
    B: 'static,
    E: 'static,
    U: FnOnce(R) -> AsyncResult<E, B> + 'static,
    L: FnOnce(R) -> AsyncResult<E, ()> + 'static,
{
    Async::from_future(async move {
        let resource = match acquire.await {
            Ok(resource) => resource,
            Err(error) => return Err(error),
        };
        let used = resource.clone();
        let outcome = AssertUnwindSafe(Async::new(move || use_resource(used)))
            .catch_unwind()
            .await;
        match outcome {
            Ok(outcome) => match release(resource).await {
                Ok(()) => outcome,
                Err(error) => Err(error),
            },
            Err(payload) => {
                let released = AssertUnwindSafe(Async::new(move || release(resource)))
                    .catch_unwind()
                    .await;
                match released {
                    Ok(Ok(())) => {}
                    Ok(Err(_)) => report_release_failure(false),
                    Err(_) => report_release_failure(true),
                }
                resume_unwind(payload)
            }
        }
    })
}

/// Runs `function` on every item one after another and stops at the first
/// failure: later items are never passed to `function`.
///
/// Each computation is awaited inside a single future, so polling depth does
/// not grow with the number of items.
pub fn traverse_array_seq<A, B, E, F>(items: Vec<A>, mut function: F) -> AsyncResult<E, Vec<B>>
where
    A: 'static,
    B: 'static,
    E: 'static,
    F: FnMut(A) -> AsyncResult<E, B> + 'static,
{
    Async::from_future(async move {
        let mut collected = Vec::with_capacity(items.len());
        for item in items {
            match function(item).await {
                Ok(value) => collected.push(value),
                Err(error) => return Err(error),
            }
        }
        Ok(collected)
    })
}

/// Starts a computation for every item and drives them all concurrently.
///
/// The values come back in item order. When several computations fail, the
/// failure with the smallest index is reported.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::async_result;
///
/// let checked = async_result::traverse_array_par(vec![3, -1, -2], |n: i32| {
///     async_result::from_result(if n > 0 { Ok(n) } else { Err(format!("{n} is negative")) })
/// });
/// assert_eq!(futures::executor::block_on(checked), Err("-1 is negative".to_string()));
/// ```
pub fn traverse_array_par<A, B, E, F>(items: Vec<A>, function: F) -> AsyncResult<E, Vec<B>>
where
    A: 'static,
    B: 'static,
    E: 'static,
    F: FnMut(A) -> AsyncResult<E, B>,
{
    let computations = futures::future::join_all(items.into_iter().map(function));
    Async::from_future(computations).map(|outcomes: Vec<Result<B, E>>| outcomes.into_iter().collect())
}

/// Awaits every computation one after another, stopping at the first failure.
pub fn sequence_array_seq<A: 'static, E: 'static>(computations: Vec<AsyncResult<E, A>>) -> AsyncResult<E, Vec<A>> {
    traverse_array_seq(computations, |computation| computation)
}

/// Drives every computation concurrently and reports the first failure by index.
pub fn sequence_array_par<A: 'static, E: 'static>(computations: Vec<AsyncResult<E, A>>) -> AsyncResult<E, Vec<A>> {
    traverse_array_par(computations, |computation| computation)
}
