//! Function composition utilities.
//!
//! This module builds new unary functions out of existing ones, either
//! right-to-left (mathematical composition) or left-to-right (data flow).
//!
//! # Overview
//!
//! - [`identity`] / [`make_identity`]: The neutral element of every chain
//! - [`compose_after`]: `compose_after(g, f)(x) = g(f(x))`
//! - [`compose_then`]: `compose_then(f, g)(x) = g(f(x))`
//! - [`Pipeline`]: A builder with `then` and `after` chaining methods
//! - [`compose!`]: Right-to-left composition of any number of functions
//! - [`pipeline!`]: Left-to-right composition of any number of functions
//!
//! Stages may move an owned value through the chain (`Vec<T> -> Vec<T>`) or
//! pass one mutable reference along (`&mut T -> &mut T`), in which case every
//! stage sees and returns the caller's object. While such a pipeline runs,
//! the borrow checker keeps anyone else from touching that object.
//!
//! # Examples
//!
//! ## Function Composition (right-to-left)
//!
//! ```
//! use functional::compose::compose_after;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let composed = compose_after(add_one, double);
//! assert_eq!(composed(5), 11); // add_one(double(5))
//! ```
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use functional::compose::compose_then;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let piped = compose_then(double, add_one);
//! assert_eq!(piped(5), 11); // add_one(double(5))
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose_after(h, compose_after(g, f)) == compose_after(compose_after(h, g), f)`
//! - **Left Identity**: `compose_after(identity, f) == f`
//! - **Right Identity**: `compose_after(f, identity) == f`
//! - **Direction Equivalence**: `compose_then(f, g) == compose_after(g, f)`

mod compose_macro;
mod pipeline;
mod pipeline_macro;
mod utils;

pub use pipeline::Pipeline;
pub use utils::{compose_after, compose_then, identity, make_identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipeline;
