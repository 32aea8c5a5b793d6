//! `fmap` and `bind` over `Option`.
//!
//! Both combinators take the optional in whichever form the caller holds
//! it. The [`Occupant`] implementation for that form decides what the
//! function receives:
//!
//! | Argument           | Function receives | Source afterwards           |
//! |--------------------|-------------------|-----------------------------|
//! | `Option<T>`        | `T` (moved)       | consumed                    |
//! | `&Option<T>`       | `&T`              | unchanged                   |
//! | `&mut Option<T>`   | `&mut T`          | whatever the function left  |
//!
//! A function that consumes its owned argument and then fails leaves nothing
//! behind: the value was moved into the call before the failure happened.

use super::inject::{absorb, inject_optional_with};

/// An optional, borrowed or owned, whose value can be handed to a function.
pub trait Occupant {
    /// What the function receives: `T`, `&T` or `&mut T`.
    type Item;

    /// Extracts the value in the form described by [`Occupant::Item`].
    fn into_occupant(self) -> Option<Self::Item>;
}

impl<T> Occupant for Option<T> {
    type Item = T;

    #[inline]
    fn into_occupant(self) -> Option<T> {
        self
    }
}

impl<'a, T> Occupant for &'a Option<T> {
    type Item = &'a T;

    #[inline]
    fn into_occupant(self) -> Option<&'a T> {
        self.as_ref()
    }
}

impl<'a, T> Occupant for &'a mut Option<T> {
    type Item = &'a mut T;

    #[inline]
    fn into_occupant(self) -> Option<&'a mut T> {
        self.as_mut()
    }
}

/// The result of a `bind` continuation.
///
/// A continuation either returns an optional directly, or returns
/// `Result<Option<U>, E>` when it can fail. A failure collapses to `None`
/// just like in [`inject_optional`](super::inject_optional).
pub trait Continuation<U> {
    /// Flattens the continuation result into a single optional.
    fn into_optional(self) -> Option<U>;
}

impl<U> Continuation<U> for Option<U> {
    #[inline]
    fn into_optional(self) -> Self {
        self
    }
}

impl<U, E> Continuation<U> for Result<Option<U>, E> {
    #[inline]
    fn into_optional(self) -> Option<U> {
        absorb(self).flatten()
    }
}

/// Applies a fallible function to the contained value.
///
/// An empty optional yields `None` without calling `function`. Otherwise
/// `Ok(value)` becomes `Some(value)` and `Err(_)` becomes `None`.
///
/// # Examples
///
/// Borrowing leaves the source intact:
///
/// ```rust
/// use functional::optional::fmap;
///
/// let source = Some(vec![1, 2, 3]);
/// let total = fmap(&source, |list: &Vec<i32>| Ok::<i32, ()>(list.iter().sum()));
/// assert_eq!(total, Some(6));
/// assert_eq!(source, Some(vec![1, 2, 3]));
/// ```
///
/// Passing the optional by value moves the contained value into the function:
///
/// ```rust
/// use functional::optional::fmap;
///
/// let source = Some(String::from("owned"));
/// let failed = fmap(source, |text: String| text.parse::<u8>());
/// assert_eq!(failed, None);
/// ```
pub fn fmap<O, U, E, F>(optional: O, function: F) -> Option<U>
where
    O: Occupant,
    F: FnOnce(O::Item) -> Result<U, E>,
{
    inject_optional_with(function, optional.into_occupant()?)
}

/// Applies a function that itself returns an optional, without nesting.
///
/// An empty optional yields `None` without calling `function`. Otherwise
/// the optional returned by `function` is the result; a continuation that
/// returns `Err(_)` yields `None`.
///
/// # Examples
///
/// ```rust
/// use functional::optional::bind;
///
/// fn first_even(list: &Vec<i32>) -> Option<i32> {
///     list.iter().copied().find(|value| value % 2 == 0)
/// }
///
/// assert_eq!(bind(&Some(vec![1, 3, 4]), first_even), Some(4));
/// assert_eq!(bind(&Some(vec![1, 3]), first_even), None);
/// assert_eq!(bind(&None::<Vec<i32>>, first_even), None);
/// ```
///
/// A fallible continuation:
///
/// ```rust
/// use functional::optional::bind;
///
/// let parsed = bind(Some("12"), |text: &str| {
///     text.parse::<i32>().map(|value| (value > 10).then_some(value))
/// });
/// assert_eq!(parsed, Some(12));
/// ```
pub fn bind<O, U, R, F>(optional: O, function: F) -> Option<U>
where
    O: Occupant,
    F: FnOnce(O::Item) -> R,
    R: Continuation<U>,
{
    function(optional.into_occupant()?).into_optional()
}
