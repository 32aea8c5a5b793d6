//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes any number of
//! unary functions right to left by nesting
//! [`compose_after`](crate::compose::compose_after).

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// The rightmost function is applied first. Each pair is joined with
/// [`compose_after`](crate::compose::compose_after), so the result nests
/// to the right: `compose!(f, g, h) = compose_after(f, compose_after(g, h))`.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `compose_after(f, g)`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use functional::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use functional::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
///
/// assert_eq!(left(10), right(10));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose_after(
            $outer_function,
            $crate::compose!($($remaining_functions),+),
        )
    };
}
