//! The `pipeline!` macro for left-to-right function composition.
//!
//! This module provides the [`pipeline!`] macro which composes functions in
//! the order the data flows through them.

/// Composes functions from left to right.
///
/// `pipeline!(f, g, h)(x)` is equivalent to `h(g(f(x)))`.
///
/// Stages are joined with [`compose_then`](crate::compose::compose_then) and
/// the result nests to the left:
/// `pipeline!(f, g, h) = compose_then(compose_then(f, g), h)`.
///
/// # Relationship with compose!
///
/// `pipeline!(f, g, h)` is observably equivalent to `compose!(h, g, f)`.
///
/// # Syntax
///
/// - `pipeline!(f)` - Returns `f` unchanged
/// - `pipeline!(f, g)` - Returns `compose_then(f, g)`
/// - `pipeline!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use functional::compose::identity;
/// use functional::pipeline;
///
/// fn init(mut list: Vec<u64>) -> Vec<u64> {
///     list.extend(0..4);
///     list
/// }
/// fn increment(list: Vec<u64>) -> Vec<u64> {
///     list.into_iter().map(|value| value + 1).collect()
/// }
/// fn sum(list: Vec<u64>) -> u64 {
///     list.into_iter().sum()
/// }
///
/// let pipeline = pipeline!(identity, init, increment, sum);
/// assert_eq!(pipeline(Vec::new()), 10);
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use functional::{compose, pipeline};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(pipeline!(f, g, h)(10), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! pipeline {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {
        $crate::compose::compose_then($first_function, $second_function)
    };

    ($first_function:expr, $second_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipeline!(
            $crate::compose::compose_then($first_function, $second_function),
            $($remaining_functions),+
        )
    };
}
