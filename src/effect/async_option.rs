//! `AsyncOption` - asynchronous computations whose value may be absent.
//!
//! `AsyncOption<A>` is `Async<Option<A>>`; [`instance`] is its dictionary.

use super::async_io::{Async, AsyncSeq};
use super::async_result::AsyncResult;
use super::option_t::OptionT;

/// An asynchronous computation producing `Option<A>`.
pub type AsyncOption<A> = Async<Option<A>>;

/// The dictionary of [`AsyncOption`]. `map2` awaits one computation after
/// the other.
pub const fn instance() -> OptionT<AsyncSeq> {
    OptionT::new(AsyncSeq)
}

/// A computation yielding `value`.
pub fn some<A: 'static>(value: A) -> AsyncOption<A> {
    Async::pure(Some(value))
}

/// A computation yielding nothing.
pub fn none<A: 'static>() -> AsyncOption<A> {
    Async::pure(None)
}

/// Lifts a plain `Option`.
pub fn from_option<A: 'static>(option: Option<A>) -> AsyncOption<A> {
    Async::pure(option)
}

/// Lifts a computation whose value is always present.
pub fn from_async<A: 'static>(computation: Async<A>) -> AsyncOption<A> {
    computation.map(Some)
}

/// Turns absence into the failure `on_none()`.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::async_option;
///
/// let missing = async_option::to_async_result(async_option::none::<u8>(), || "not cached");
/// assert_eq!(futures::executor::block_on(missing), Err("not cached"));
/// ```
pub fn to_async_result<A, E, N>(computation: AsyncOption<A>, on_none: N) -> AsyncResult<E, A>
where
    A: 'static,
    E: 'static,
    N: FnOnce() -> E + 'static,
{
    computation.map(move |option| option.ok_or_else(on_none))
}
