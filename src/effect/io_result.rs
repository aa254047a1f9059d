//! `IOResult` - deferred synchronous computations that may fail.
//!
//! `IOResult<E, A>` is `IO<Result<A, E>>`. Its dictionary is
//! [`instance`], a [`ResultT`] over [`IOKind`].
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::io_result;
//! use kindred::typeclass::Flattenable;
//!
//! let brand = io_result::instance::<String>();
//! let program = brand.flat_map(io_result::succeed(20), |n: i32| {
//!     io_result::try_catch(move || n + 1, |error| error.message)
//! });
//! assert_eq!(program.run_unsafe(), Ok(21));
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use super::io::{IO, IOKind};
use super::result_t::ResultT;
use crate::data::result;
use crate::error::{PanicError, report_release_failure};

/// A deferred computation producing `Result<A, E>`.
pub type IOResult<E, A> = IO<Result<A, E>>;

/// The dictionary of [`IOResult`].
pub const fn instance<E>() -> ResultT<IOKind, E> {
    ResultT::new(IOKind)
}

/// A computation that succeeds with `value`.
pub fn succeed<E: 'static, A: 'static>(value: A) -> IOResult<E, A> {
    IO::pure(Ok(value))
}

/// A computation that fails with `error`.
pub fn fail<E: 'static, A: 'static>(error: E) -> IOResult<E, A> {
    IO::pure(Err(error))
}

/// Lifts a plain `Result`.
pub fn from_result<E: 'static, A: 'static>(result: Result<A, E>) -> IOResult<E, A> {
    IO::pure(result)
}

/// Defers `thunk`; a panic becomes the failure `on_panic(error)`.
pub fn try_catch<A, E, F, H>(thunk: F, on_panic: H) -> IOResult<E, A>
where
    A: 'static,
    E: 'static,
    F: FnOnce() -> A + 'static,
    H: FnOnce(PanicError) -> E + 'static,
{
    IO::new(move || result::try_catch(thunk, on_panic))
}

/// Acquires a resource, uses it and releases it.
///
/// `release` runs exactly once after a successful `acquire`: when
/// `use_resource` succeeds, when it fails, and when it panics. A failing
/// release replaces the outcome of `use_resource`. After a panic the release
/// still runs, a failure of the release itself is logged, and the original
/// panic resumes.
///
/// # Examples
///
/// ```rust
/// use kindred::effect::io_result;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let closed = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&closed);
/// let read = io_result::bracket(
///     io_result::succeed::<String, _>("config.toml"),
///     |path: &str| io_result::succeed(path.len()),
///     move |_| {
///         flag.set(true);
///         io_result::succeed(())
///     },
/// );
/// assert_eq!(read.run_unsafe(), Ok(11));
/// assert!(closed.get());
/// ```
pub fn bracket<R, B, E, U, L>(acquire: IOResult<E, R>, use_resource: U, release: L) -> IOResult<E, B>
where
    R: Clone + 'static,
    B: 'static,
    E: 'static,
    U: FnOnce(R) -> IOResult<E, B> + 'static,
    L: FnOnce(R) -> IOResult<E, ()> + 'static,
{
    IO::new(move || {
        let resource = match acquire.run_unsafe() {
            Ok(resource) => resource,
            Err(error) => return Err(error),
        };
        let used = resource.clone();
        match catch_unwind(AssertUnwindSafe(move || use_resource(used).run_unsafe())) {
            Ok(outcome) => match release(resource).run_unsafe() {
                Ok(()) => outcome,
                Err(error) => Err(error),
            },
            Err(payload) => {
                let released = catch_unwind(AssertUnwindSafe(move || release(resource).run_unsafe()));
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

/// Runs `function` on every item in order, stopping at the first failure.
///
/// The items are visited in a loop when the computation runs, so the stack
/// depth does not grow with the number of items.
pub fn traverse_array<A, B, E, F>(items: Vec<A>, mut function: F) -> IOResult<E, Vec<B>>
where
    A: 'static,
    B: 'static,
    E: 'static,
    F: FnMut(A) -> IOResult<E, B> + 'static,
{
    IO::new(move || {
        let mut collected = Vec::with_capacity(items.len());
        for item in items {
            collected.push(function(item).run_unsafe()?);
        }
        Ok(collected)
    })
}

/// Runs every computation in order, stopping at the first failure.
pub fn sequence_array<A: 'static, E: 'static>(computations: Vec<IOResult<E, A>>) -> IOResult<E, Vec<A>> {
    traverse_array(computations, |computation| computation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_release(counter: &Rc<Cell<u32>>) -> impl FnOnce(i32) -> IOResult<String, ()> + 'static {
        let counter = Rc::clone(counter);
        move |_| {
            counter.set(counter.get() + 1);
            succeed(())
        }
    }

    #[rstest]
    fn traverse_array_succeeds_in_order() {
        assert_eq!(traverse_array(vec![1, 2, 3], |n: i32| succeed::<String, _>(n)).run_unsafe(), Ok(vec![1, 2, 3]));
    }

    #[rstest]
    fn traverse_array_calls_function_until_first_failure() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let traversed = traverse_array(vec![1, -2, 3], move |n: i32| {
            counter.set(counter.get() + 1);
            if n < 0 { fail("neg".to_string()) } else { succeed(n) }
        });
        assert_eq!(traversed.run_unsafe(), Err("neg".to_string()));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn traverse_array_handles_long_inputs() {
        let items: Vec<u32> = (0..100_000).collect();
        let traversed = traverse_array(items, |n: u32| succeed::<String, _>(n)).run_unsafe();
        assert_eq!(traversed.map(|values| values.len()), Ok(100_000));
    }

    #[rstest]
    fn traverse_array_is_deferred() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let traversed = traverse_array(vec![1, 2], move |n: i32| {
            counter.set(counter.get() + 1);
            succeed::<String, _>(n)
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(traversed.run_unsafe(), Ok(vec![1, 2]));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn bracket_releases_once_when_use_fails() {
        let releases = Rc::new(Cell::new(0));
        let outcome = bracket(succeed(1), |_| fail::<String, i32>("boom".to_string()), counting_release(&releases));
        assert_eq!(outcome.run_unsafe(), Err("boom".to_string()));
        assert_eq!(releases.get(), 1);
    }

    #[rstest]
    fn bracket_releases_once_and_resumes_panic() {
        let releases = Rc::new(Cell::new(0));
        let outcome = bracket(succeed(1), |_| -> IOResult<String, i32> { panic!("use exploded") }, counting_release(&releases));
        let unwound = catch_unwind(AssertUnwindSafe(move || outcome.run_unsafe()));
        assert!(unwound.is_err());
        assert_eq!(releases.get(), 1);
    }

    #[rstest]
    fn bracket_release_failure_wins_over_success() {
        let outcome = bracket(succeed::<String, _>(1), |n: i32| succeed(n), |_| fail("close failed".to_string()));
        assert_eq!(outcome.run_unsafe(), Err("close failed".to_string()));
    }

    #[rstest]
    fn try_catch_maps_panic_message() {
        let caught = try_catch(|| -> u8 { panic!("bad byte") }, |error| error.message);
        assert_eq!(caught.run_unsafe(), Err("bad byte".to_string()));
    }

    #[rstest]
    fn try_catch_is_deferred() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let deferred = try_catch(move || flag.set(true), |error| error.message);
        assert!(!ran.get());
        assert_eq!(deferred.run_unsafe(), Ok(()));
        assert!(ran.get());
    }

    #[cfg(feature = "tracing")]
    #[test]
    #[tracing_test::traced_test]
    fn bracket_logs_release_failure_after_panic() {
        let outcome = bracket(
            succeed::<String, _>(1),
            |_| -> IOResult<String, i32> { panic!("use exploded") },
            |_| fail("close failed".to_string()),
        );
        let unwound = catch_unwind(AssertUnwindSafe(move || outcome.run_unsafe()));
        assert!(unwound.is_err());
        assert!(logs_contain("release failed while unwinding a panic raised by use"));
        assert!(logs_contain("release.panicked=false"));
    }

    #[cfg(feature = "tracing")]
    #[test]
    #[tracing_test::traced_test]
    fn bracket_logs_nothing_when_release_succeeds() {
        let outcome = bracket(succeed::<String, _>(1), |_| -> IOResult<String, i32> { panic!("use exploded") }, |_| succeed(()));
        let unwound = catch_unwind(AssertUnwindSafe(move || outcome.run_unsafe()));
        assert!(unwound.is_err());
        assert!(!logs_contain("release failed"));
    }
}
