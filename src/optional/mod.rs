//! Combinators over `Option` that turn failure into absence.
//!
//! # Overview
//!
//! - [`has_some`] / [`has_some!`] / [`is_none`]: Occupancy tests
//! - [`get`]: Checked access to the contained value
//! - [`inject_optional`] / [`inject_optional_with`]: Run a fallible
//!   computation and keep its value, or `None` if it failed
//! - [`catch_fault`]: The same for a computation that may panic
//! - [`fmap`]: Apply a fallible function to the contained value
//! - [`bind`]: Apply a function that itself returns an optional
//!
//! # Failure Policy
//!
//! A computation fails by returning `Err(_)`. Every combinator here turns
//! that into `None` and drops the error, so "no value" and "failed" look the
//! same to the caller. A `trace` level event records the dropped error type.
//! Panics are only caught by [`catch_fault`]; elsewhere they unwind as usual.
//!
//! # Examples
//!
//! ```rust
//! use functional::optional::{bind, fmap, inject_optional};
//!
//! let parsed = inject_optional(|| "16".parse::<u32>());
//! let halved = fmap(parsed, |value: u32| {
//!     if value % 2 == 0 { Ok(value / 2) } else { Err("odd") }
//! });
//! let checked = bind(halved, |value: u32| value.checked_sub(10));
//! assert_eq!(checked, None);
//! ```

mod combinators;
mod inject;
mod occupancy;

pub use combinators::{Continuation, Occupant, bind, fmap};
pub use inject::{catch_fault, inject_optional, inject_optional_with};
pub use occupancy::{get, has_some, is_none};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::has_some;
