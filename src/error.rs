//! Error types of the crate.
//!
//! Expected failures are plain data (`Err(E)` with a caller-chosen `E`); the
//! types here only cover the two places where the crate itself has to report
//! something: a panic caught at a boundary combinator, and an attempt to
//! build a [`NonEmptyVec`](crate::data::non_empty::NonEmptyVec) from nothing.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// A panic caught by one of the boundary combinators
/// (`result::try_catch`, `option::from_throwable`, ...).
///
/// # Examples
///
/// ```rust
/// use kindred::error::PanicError;
///
/// let error = PanicError::new("index out of bounds");
/// assert_eq!(format!("{error}"), "panicked: index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicError {
    /// The panic message, or `"Unknown panic"` for non-string payloads.
    pub message: String,
}

impl PanicError {
    /// Creates an error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message of a panic payload.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }
}

impl std::fmt::Display for PanicError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "panicked: {}", self.message)
    }
}

impl std::error::Error for PanicError {}

/// Returned when a `NonEmptyVec` is requested from an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use kindred::data::non_empty::NonEmptyVec;
/// use kindred::error::EmptyVecError;
///
/// let attempt = NonEmptyVec::try_from(Vec::<i32>::new());
/// assert_eq!(attempt, Err(EmptyVecError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyVecError;

impl std::fmt::Display for EmptyVecError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("cannot build a non-empty vector from an empty one")
    }
}

impl std::error::Error for EmptyVecError {}

/// Runs `thunk`, turning a panic into a [`PanicError`].
pub(crate) fn catch_panic<A>(thunk: impl FnOnce() -> A) -> Result<A, PanicError> {
    catch_unwind(AssertUnwindSafe(thunk)).map_err(|payload| {
        let error = PanicError::from_payload(&*payload);
        #[cfg(feature = "tracing")]
        tracing::debug!(panic.message = %error.message, "panic converted into a failure");
        error
    })
}

/// Reports a release step that failed while a panic from `use` was unwinding.
pub(crate) fn report_release_failure(release_panicked: bool) {
    #[cfg(feature = "tracing")]
    tracing::error!(release.panicked = release_panicked, "release failed while unwinding a panic raised by use");
    #[cfg(not(feature = "tracing"))]
    let _ = release_panicked;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn catch_panic_reads_str_payload() {
        let caught = catch_panic(|| -> i32 { panic!("static message") });
        assert_eq!(caught, Err(PanicError::new("static message")));
    }

    #[rstest]
    fn catch_panic_reads_formatted_payload() {
        let value = 7;
        let caught = catch_panic(move || -> i32 { panic!("bad value {value}") });
        assert_eq!(caught, Err(PanicError::new("bad value 7")));
    }

    #[rstest]
    fn catch_panic_passes_value_through() {
        assert_eq!(catch_panic(|| 5), Ok(5));
    }

    #[rstest]
    fn unknown_payload_gets_placeholder() {
        let caught = catch_panic(|| -> i32 { std::panic::panic_any(42_u8) });
        assert_eq!(caught, Err(PanicError::new("Unknown panic")));
    }

    #[rstest]
    fn empty_vec_error_display() {
        assert_eq!(
            EmptyVecError.to_string(),
            "cannot build a non-empty vector from an empty one"
        );
    }

    #[cfg(feature = "tracing")]
    #[test]
    #[tracing_test::traced_test]
    fn catch_panic_emits_debug_event() {
        let caught = catch_panic(|| -> i32 { panic!("traced message") });
        assert!(caught.is_err());
        assert!(logs_contain("panic converted into a failure"));
        assert!(logs_contain("traced message"));
    }
}
