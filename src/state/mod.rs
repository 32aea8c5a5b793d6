//! State Monad - computations that thread an explicit state.
//!
//! A [`State<S, T>`] wraps a transition `S -> (T, S)`. Computations are
//! sequenced so that the state one step leaves behind is the state the next
//! step starts from.
//!
//! # Overview
//!
//! - [`make_state`]: Wrap a transition function
//! - [`bind`] / [`bind_with`]: Continue with a computation built from the result
//! - [`bind_void`] / [`bind_void_with`]: Continue, ignoring the result
//! - [`fmap`]: Transform the result, keeping the next state
//!
//! # Failure Policy
//!
//! Nothing here catches anything: a panic in a transition or in a
//! continuation unwinds to whoever runs the outermost State.
//!
//! # Laws
//!
//! - Functor Identity: `fmap(m, |x| x) == m`
//! - Functor Composition: `fmap(fmap(m, f), g) == fmap(m, |x| g(f(x)))`
//! - Left Identity: `bind(State::pure(a), f) == f(a)`
//! - Right Identity: `bind(m, State::pure) == m`
//! - Associativity: `bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))`
//!
//! # Examples
//!
//! ```rust
//! use functional::state::{State, bind, fmap, make_state};
//!
//! fn pop() -> State<Vec<i32>, i32> {
//!     make_state(|mut stack: Vec<i32>| {
//!         let top = stack.pop().unwrap_or_default();
//!         (top, stack)
//!     })
//! }
//!
//! fn pop_plus(offset: i32) -> State<Vec<i32>, i32> {
//!     fmap(pop(), move |top| top + offset)
//! }
//!
//! let sum_of_two = bind(pop(), pop_plus);
//! assert_eq!(sum_of_two.run(vec![1, 2, 3]), (5, vec![1]));
//! ```

mod binding;
mod transition;

pub use binding::{bind, bind_void, bind_void_with, bind_with, fmap, make_state};
pub use transition::State;
