//! The fault-to-absence boundary.
//!
//! Every combinator in this module family ends up here: a computation either
//! yields a value, which is wrapped in `Some`, or fails, in which case the
//! failure is dropped and `None` is returned.

use std::any::type_name;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::trace;

/// Runs `generator` and captures its value, or `None` if it failed.
///
/// The error value is discarded: a caller cannot tell "no value" from
/// "failed" afterwards. A trace event with the error type is emitted so the
/// translation stays visible to a subscriber.
///
/// # Examples
///
/// ```rust
/// use functional::optional::{inject_optional, is_none};
///
/// let present = inject_optional(|| "21".parse::<i32>());
/// assert_eq!(present, Some(21));
///
/// let absent = inject_optional(|| "twenty-one".parse::<i32>());
/// assert!(is_none(&absent));
/// ```
pub fn inject_optional<T, E, G>(generator: G) -> Option<T>
where
    G: FnOnce() -> Result<T, E>,
{
    absorb(generator())
}

/// Runs `generator(argument)` and captures its value, or `None` if it failed.
///
/// The argument is moved into the call. Several arguments are passed as a
/// tuple.
///
/// # Examples
///
/// ```rust
/// use functional::optional::inject_optional_with;
///
/// let pushed = inject_optional_with(
///     |mut list: Vec<i32>| {
///         list.push(10);
///         Ok::<_, String>(list)
///     },
///     Vec::new(),
/// );
/// assert_eq!(pushed, Some(vec![10]));
///
/// let divided = inject_optional_with(
///     |(numerator, denominator): (i32, i32)| numerator.checked_div(denominator).ok_or("division by zero"),
///     (1, 0),
/// );
/// assert_eq!(divided, None);
/// ```
pub fn inject_optional_with<A, T, E, G>(generator: G, argument: A) -> Option<T>
where
    G: FnOnce(A) -> Result<T, E>,
{
    absorb(generator(argument))
}

/// Runs a computation that may panic and captures its value, or `None` if it
/// panicked.
///
/// This is the boundary for code that signals failure by unwinding instead of
/// returning a `Result`. The panic payload is discarded. The process-wide
/// panic hook still runs, so the panic message is reported as usual.
///
/// # Examples
///
/// ```rust
/// use functional::optional::catch_fault;
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(catch_fault(|| empty[0]), None);
/// assert_eq!(catch_fault(|| 21), Some(21));
/// ```
pub fn catch_fault<T, G>(generator: G) -> Option<T>
where
    G: FnOnce() -> T,
{
    absorb(catch_unwind(AssertUnwindSafe(generator)))
}

pub(super) fn absorb<T, E>(outcome: Result<T, E>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(_) => {
            trace!(
                error_type = type_name::<E>(),
                value_type = type_name::<T>(),
                "computation failed, yielding None"
            );
            None
        }
    }
}
