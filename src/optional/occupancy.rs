//! Occupancy tests and checked access.

use crate::error::EmptyOptionalError;

/// Returns `true` if the optional holds a value.
///
/// Use the [`has_some!`](crate::has_some) macro to test several optionals
/// of different types at once.
///
/// # Examples
///
/// ```rust
/// use functional::optional::has_some;
///
/// assert!(has_some(&Some(1)));
/// assert!(!has_some(&None::<i32>));
/// ```
#[inline]
#[allow(clippy::ref_option)]
pub const fn has_some<T>(optional: &Option<T>) -> bool {
    optional.is_some()
}

/// Returns `true` if the optional is empty.
///
/// # Examples
///
/// ```rust
/// use functional::optional::is_none;
///
/// assert!(is_none(&None::<i32>));
/// assert!(!is_none(&Some(1)));
/// ```
#[inline]
#[allow(clippy::ref_option)]
pub const fn is_none<T>(optional: &Option<T>) -> bool {
    !has_some(optional)
}

/// Returns a reference to the contained value.
///
/// # Errors
///
/// Returns [`EmptyOptionalError`] if the optional is empty.
///
/// # Examples
///
/// ```rust
/// use functional::optional::get;
///
/// assert_eq!(get(&Some(3)), Ok(&3));
/// assert!(get(&None::<i32>).is_err());
/// ```
#[allow(clippy::ref_option)]
pub fn get<T>(optional: &Option<T>) -> Result<&T, EmptyOptionalError> {
    optional.as_ref().ok_or_else(EmptyOptionalError::of::<T>)
}

/// Returns `true` if every optional holds a value.
///
/// Arguments are tested left to right and testing stops at the first empty
/// one. The optionals may have different contained types; each argument is
/// only borrowed.
///
/// # Examples
///
/// ```rust
/// use functional::has_some;
///
/// let number = Some(1);
/// let text = Some("one");
/// let missing: Option<f64> = None;
///
/// assert!(has_some!(number, text));
/// assert!(!has_some!(number, missing, text));
/// ```
#[macro_export]
macro_rules! has_some {
    ($first_optional:expr $(, $remaining_optionals:expr)* $(,)?) => {
        $crate::optional::has_some(&$first_optional)
            $(&& $crate::optional::has_some(&$remaining_optionals))*
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_some_and_is_none_are_complementary() {
        let present = Some(vec![1]);
        let absent: Option<Vec<i32>> = None;
        assert!(has_some(&present) && !is_none(&present));
        assert!(!has_some(&absent) && is_none(&absent));
    }

    #[test]
    fn test_has_some_macro_single_argument() {
        assert!(has_some!(Some(1)));
        assert!(!has_some!(None::<i32>));
    }

    #[test]
    fn test_has_some_macro_short_circuits() {
        let mut evaluated = false;
        let mut probe = || {
            evaluated = true;
            Some(1)
        };
        assert!(!has_some!(None::<i32>, probe()));
        assert!(!evaluated);
    }

    #[test]
    fn test_get_reports_value_type() {
        let error = get(&None::<u16>).unwrap_err();
        assert_eq!(error.value_type, "u16");
    }
}
