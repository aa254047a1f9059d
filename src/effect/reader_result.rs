//! `ReaderResult` - computations that read an environment and may fail.
//!
//! `ReaderResult<R, E, A>` is `Reader<R, Result<A, E>>`, the usual shape of
//! a service call that needs its dependencies passed in. Its dictionary is
//! [`instance`].
//!
//! # Examples
//!
//! ```rust
//! use kindred::effect::reader_result::{self, ReaderResult};
//! use kindred::typeclass::Flattenable;
//! use std::collections::HashMap;
//!
//! type Users = HashMap<u32, String>;
//!
//! fn find(id: u32) -> ReaderResult<Users, String, String> {
//!     reader_result::asks(move |users: Users| users.get(&id).cloned())
//!         .map(move |found: Result<Option<String>, String>| {
//!             found.and_then(|name| name.ok_or(format!("user {id} not found")))
//!         })
//! }
//!
//! let brand = reader_result::instance::<Users, String>();
//! let greeting = brand.flat_map(find(1), |name: String| reader_result::succeed(format!("hello {name}")));
//! let users = Users::from([(1, "ada".to_string())]);
//! assert_eq!(greeting.run(users.clone()), Ok("hello ada".to_string()));
//! assert_eq!(find(2).run(users), Err("user 2 not found".to_string()));
//! ```

use super::reader::Reader;
use super::reader_t::ReaderT;
use crate::data::result::ResultKind;

/// A computation reading `R` and producing `Result<A, E>`.
pub type ReaderResult<R, E, A> = Reader<R, Result<A, E>>;

/// The dictionary of [`ReaderResult`].
pub const fn instance<R, E>() -> ReaderT<R, ResultKind<E>> {
    ReaderT::new(ResultKind::new())
}

/// Reads the whole environment.
pub fn ask<R: 'static, E: 'static>() -> ReaderResult<R, E, R> {
    Reader::new(Ok)
}

/// Reads a projection of the environment.
pub fn asks<R, E, A, F>(projection: F) -> ReaderResult<R, E, A>
where
    R: 'static,
    E: 'static,
    A: 'static,
    F: FnOnce(R) -> A + 'static,
{
    Reader::new(move |environment| Ok(projection(environment)))
}

/// A computation that succeeds with `value` in every environment.
pub fn succeed<R: 'static, E: 'static, A: 'static>(value: A) -> ReaderResult<R, E, A> {
    Reader::pure(Ok(value))
}

/// A computation that fails with `error` in every environment.
pub fn fail<R: 'static, E: 'static, A: 'static>(error: E) -> ReaderResult<R, E, A> {
    Reader::pure(Err(error))
}

/// Lifts a plain `Result`.
pub fn from_result<R: 'static, E: 'static, A: 'static>(result: Result<A, E>) -> ReaderResult<R, E, A> {
    Reader::pure(result)
}

/// Lifts a reader that cannot fail.
pub fn from_reader<R: 'static, E: 'static, A: 'static>(reader: Reader<R, A>) -> ReaderResult<R, E, A> {
    reader.map(Ok)
}

/// Runs `computation` in an environment derived by `modifier`.
pub fn local<R, E, A, F>(modifier: F, computation: ReaderResult<R, E, A>) -> ReaderResult<R, E, A>
where
    R: 'static,
    E: 'static,
    A: 'static,
    F: FnOnce(R) -> R + 'static,
{
    Reader::local(modifier, computation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Apply, Flattenable};
    use rstest::rstest;

    #[derive(Clone)]
    struct Settings {
        retries: u32,
        verbose: bool,
    }

    #[rstest]
    fn flat_map_stops_on_failure() {
        let brand = instance::<Settings, String>();
        let chained = brand.flat_map(fail::<Settings, String, u32>("no settings".to_string()), |_: u32| {
            asks(|settings: Settings| settings.verbose)
        });
        assert_eq!(chained.run(Settings { retries: 1, verbose: true }), Err("no settings".to_string()));
    }

    #[rstest]
    fn map2_reads_same_environment() {
        let brand = instance::<Settings, String>();
        let summary = brand.map2(
            asks(|settings: Settings| settings.retries),
            asks(|settings: Settings| settings.verbose),
            |retries: u32, verbose: bool| format!("{retries}:{verbose}"),
        );
        assert_eq!(summary.run(Settings { retries: 3, verbose: false }), Ok("3:false".to_string()));
    }

    #[rstest]
    fn local_modifies_environment() {
        let doubled = local(
            |settings: Settings| Settings { retries: settings.retries * 2, ..settings },
            asks::<Settings, String, _, _>(|settings: Settings| settings.retries),
        );
        assert_eq!(doubled.run(Settings { retries: 4, verbose: false }), Ok(8));
    }

    #[rstest]
    #[case(Ok(1))]
    #[case(Err("bad".to_string()))]
    fn from_result_ignores_environment(#[case] result: Result<i32, String>) {
        assert_eq!(from_result::<u8, _, _>(result.clone()).run(0), result);
    }

    #[rstest]
    fn ask_and_from_reader() {
        assert_eq!(ask::<u8, String>().run(7), Ok(7));
        assert_eq!(from_reader::<u8, String, u8>(Reader::new(|n: u8| n + 1)).run(1), Ok(2));
        assert_eq!(succeed::<u8, String, &str>("ok").run(0), Ok("ok"));
    }
}
