//! Identity and the two binary composition functions.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`make_identity`]: The identity function as a first-class value
//! - [`compose_after`]: `g ∘ f`, written outer function first
//! - [`compose_then`]: `f ; g`, written in data flow order
//!
//! Both composition functions build the same pipeline `x -> g(f(x))`; they
//! differ only in the order the stages are written.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose_after(identity, f)` is equivalent to `f`
/// - `compose_after(f, identity)` is equivalent to `f`
///
/// Instantiated over a reference type, the same reference comes back, so a
/// pipeline over `&mut T` keeps pointing at the caller's object.
///
/// # Examples
///
/// ```
/// use functional::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
///
/// let mut list = vec![1, 2, 3];
/// let address: *const Vec<i32> = &list;
/// let same = identity::<&mut Vec<i32>>(&mut list);
/// assert!(std::ptr::eq(same, address));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns [`identity`] as a function pointer for the type `T`.
///
/// Useful as the seed of a chain whose stages are added one by one, and
/// wherever a concrete, nameable function type is needed.
///
/// # Examples
///
/// ```
/// use functional::compose::{compose_then, make_identity};
///
/// let start = make_identity::<Vec<i32>>();
/// let push_one = compose_then(start, |mut list: Vec<i32>| {
///     list.push(1);
///     list
/// });
/// assert_eq!(push_one(Vec::new()), vec![1]);
/// ```
#[inline]
#[must_use]
pub fn make_identity<T>() -> fn(T) -> T {
    identity::<T>
}

/// Composes two functions right-to-left: `compose_after(g, f)(x) = g(f(x))`.
///
/// `f` runs first and its output is handed to `g`. Both functions are moved
/// into the returned closure, so the result outlives the bindings it was
/// built from. Composition adds no failure of its own: a panic in either
/// stage unwinds through the composed function unchanged.
///
/// # Type Parameters
///
/// * `A` - The input type of the pipeline
/// * `B` - The output of `f` and input of `g`
/// * `C` - The output type of the pipeline
///
/// # Examples
///
/// ```
/// use functional::compose::compose_after;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // add_one(double(5)) = 11
/// let composed = compose_after(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// ## Moving an owned container through the stages
///
/// ```
/// use functional::compose::{compose_after, identity};
///
/// fn push_one(mut list: Vec<i32>) -> Vec<i32> {
///     list.push(1);
///     list
/// }
///
/// let push_twice = compose_after(push_one, compose_after(push_one, identity));
/// assert_eq!(push_twice(Vec::new()), vec![1, 1]);
/// ```
#[inline]
pub fn compose_after<A, B, C, F, G>(outer: G, inner: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| outer(inner(input))
}

/// Composes two functions left-to-right: `compose_then(f, g)(x) = g(f(x))`.
///
/// Observably the same as `compose_after(g, f)`; the stages are just written
/// in the order the data flows through them.
///
/// # Examples
///
/// ```
/// use functional::compose::{compose_after, compose_then};
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let then = compose_then(double, add_one);
/// let after = compose_after(add_one, double);
/// assert_eq!(then(5), after(5));
/// ```
///
/// ## Threading one mutable reference through every stage
///
/// ```
/// use functional::compose::{compose_then, identity};
///
/// fn push_one(list: &mut Vec<i32>) -> &mut Vec<i32> {
///     list.push(1);
///     list
/// }
///
/// let mut list = Vec::new();
/// {
///     let push_twice = compose_then(compose_then(identity, push_one), push_one);
///     assert_eq!(push_twice(&mut list).len(), 2);
/// }
/// assert_eq!(list, vec![1, 1]);
/// ```
#[inline]
pub fn compose_then<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    compose_after(second, first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_make_identity_is_a_plain_function_pointer() {
        let function: fn(String) -> String = make_identity();
        assert_eq!(function(String::from("same")), "same");
    }

    #[test]
    fn test_compose_after_changes_type() {
        let to_string = |x: i32| x.to_string();
        let length = |s: String| s.len();
        let composed = compose_after(length, to_string);
        assert_eq!(composed(12345), 5);
    }

    #[test]
    fn test_compose_then_runs_first_stage_first() {
        let subtract_three = |x: i32| x - 3;
        let square = |x: i32| x * x;
        // square(subtract_three(5)) = 4, subtract_three(square(5)) = 22
        assert_eq!(compose_then(subtract_three, square)(5), 4);
        assert_eq!(compose_then(square, subtract_three)(5), 22);
    }
}
