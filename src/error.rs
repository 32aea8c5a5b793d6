//! Error types for the optional combinators.
//!
//! Absence itself is never an error in this crate: a failed computation is
//! turned into `None`. The only error is reading the value of an optional
//! that turned out to be empty.

/// Represents an attempt to read the value of an empty optional.
///
/// # Examples
///
/// ```rust
/// use functional::error::EmptyOptionalError;
///
/// let error = EmptyOptionalError {
///     value_type: "i32",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "attempted to access the value of an empty Option<i32>"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyOptionalError {
    /// The name of the contained type that was requested.
    pub value_type: &'static str,
}

impl EmptyOptionalError {
    /// Creates the error for an empty `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::error::EmptyOptionalError;
    ///
    /// let error = EmptyOptionalError::of::<u8>();
    /// assert_eq!(error.value_type, "u8");
    /// ```
    #[must_use]
    pub fn of<T>() -> Self {
        Self {
            value_type: std::any::type_name::<T>(),
        }
    }
}

impl std::fmt::Display for EmptyOptionalError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "attempted to access the value of an empty Option<{}>",
            self.value_type
        )
    }
}

impl std::error::Error for EmptyOptionalError {}
