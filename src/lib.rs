//! # functional
//!
//! Small functional programming helpers: function composition, combinators
//! over [`Option`] that turn faults into absence, and a state monad.
//!
//! ## Overview
//!
//! - **Function Composition**: [`identity`](compose::identity),
//!   [`compose_after`](compose::compose_after), [`compose_then`](compose::compose_then),
//!   the [`Pipeline`](compose::Pipeline) builder and the `compose!` / `pipeline!` macros
//! - **Optional Combinators**: `has_some`, `is_none`, `inject_optional`, `fmap`,
//!   `bind` over `Option`, where a failed computation becomes `None`
//! - **State Monad**: [`State`](state::State) with `bind`, `bind_void` and `fmap`
//!   threading an explicit state value
//!
//! ## Error Policies
//!
//! Two policies coexist and are not mixed:
//!
//! - Composition and `State` let panics propagate to the caller of the
//!   outermost callable.
//! - Optional combinators translate a failed computation (`Err`, or a panic
//!   inside [`catch_fault`](optional::catch_fault)) into `None` and discard
//!   the failure detail.
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition utilities
//! - `optional`: Fault-to-absence combinators over `Option`
//! - `state`: State monad
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use functional::prelude::*;
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! let after = compose_after(add_one, double);
//! let then = compose_then(double, add_one);
//! assert_eq!(after(5), 11);
//! assert_eq!(then(5), 11);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the composition helpers, the error types and the
/// [`State`](crate::state::State) type. The `fmap` and `bind` free functions exist
/// for both `Option` and `State` and are therefore not re-exported; use them
/// through [`crate::optional`] and [`crate::state`].
///
/// # Usage
///
/// ```rust
/// use functional::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "optional")]
    pub use crate::optional::{has_some, inject_optional, inject_optional_with, is_none};

    #[cfg(feature = "state")]
    pub use crate::state::{State, make_state};
}

pub mod error;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "optional")]
pub mod optional;

#[cfg(feature = "state")]
pub mod state;
