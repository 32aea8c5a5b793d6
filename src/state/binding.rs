//! Free-function combinators over [`State`].
//!
//! The `_with` variants fix one extra argument of the continuation ahead of
//! time. The piped result of the first computation is always the first
//! argument of the continuation; the fixed argument comes after it. Pass a
//! tuple to fix several arguments. The fixed argument is cloned on every run
//! so the combined State can be run repeatedly.

use super::transition::State;

/// Wraps a transition `S -> (T, S)` as a [`State`].
///
/// # Examples
///
/// ```rust
/// use functional::state::make_state;
///
/// let peek = make_state(|stack: Vec<i32>| (stack.last().copied(), stack));
/// assert_eq!(peek.run(vec![1, 2]), (Some(2), vec![1, 2]));
/// ```
pub fn make_state<S, T, F>(transition: F) -> State<S, T>
where
    F: Fn(S) -> (T, S) + 'static,
    S: 'static,
    T: 'static,
{
    State::new(transition)
}

/// Sequences `state` with the computation `function` builds from its result.
///
/// `bind(state, f).run(s0)` runs `state` on `s0` to get `(t, s1)`, then runs
/// `f(t)` on `s1`.
///
/// # Examples
///
/// ```rust
/// use functional::state::{State, bind, make_state};
///
/// fn pop() -> State<Vec<i32>, i32> {
///     make_state(|mut stack: Vec<i32>| {
///         let top = stack.pop().unwrap_or_default();
///         (top, stack)
///     })
/// }
///
/// fn push(value: i32) -> State<Vec<i32>, i32> {
///     make_state(move |mut stack: Vec<i32>| {
///         stack.push(value * 10);
///         (value, stack)
///     })
/// }
///
/// let moved = bind(pop(), push);
/// assert_eq!(moved.run(vec![1, 2]), (2, vec![1, 20]));
/// ```
pub fn bind<S, T, U, F>(state: State<S, T>, function: F) -> State<S, U>
where
    F: Fn(T) -> State<S, U> + 'static,
    S: 'static,
    T: 'static,
    U: 'static,
{
    state.flat_map(function)
}

/// Like [`bind`], with `extra` fixed as the continuation's second argument.
///
/// `bind_with(state, f, x).run(s0)` runs `state` on `s0` to get `(t, s1)`,
/// then runs `f(t, x)` on `s1`.
///
/// # Examples
///
/// ```rust
/// use functional::state::{State, bind_with, make_state};
///
/// fn scaled(value: i32, factor: i32) -> State<i32, i32> {
///     make_state(move |counter: i32| (value * factor, counter + 1))
/// }
///
/// let counter: State<i32, i32> = make_state(|counter: i32| (counter, counter + 1));
/// let combined = bind_with(counter, scaled, 3);
/// assert_eq!(combined.run(5), (15, 7));
/// ```
pub fn bind_with<S, T, U, X, F>(state: State<S, T>, function: F, extra: X) -> State<S, U>
where
    F: Fn(T, X) -> State<S, U> + 'static,
    X: Clone + 'static,
    S: 'static,
    T: 'static,
    U: 'static,
{
    state.flat_map(move |result| function(result, extra.clone()))
}

/// Sequences `state` with a computation that does not use its result.
///
/// The result of `state` is dropped; the next state still chains from
/// `state`'s output, and the combined result is whatever `function()` yields.
///
/// # Examples
///
/// ```rust
/// use functional::state::{State, bind_void, make_state};
///
/// fn tick() -> State<u32, u32> {
///     make_state(|count: u32| (count, count + 1))
/// }
///
/// let twice = bind_void(tick(), tick);
/// assert_eq!(twice.run(0), (1, 2));
/// ```
pub fn bind_void<S, T, U, F>(state: State<S, T>, function: F) -> State<S, U>
where
    F: Fn() -> State<S, U> + 'static,
    S: 'static,
    T: 'static,
    U: 'static,
{
    state.flat_map(move |_| function())
}

/// Like [`bind_void`], with `extra` fixed as the continuation's only argument.
///
/// # Examples
///
/// ```rust
/// use functional::state::{State, bind_void_with, make_state};
///
/// fn push(value: i32) -> State<Vec<i32>, i32> {
///     make_state(move |mut stack: Vec<i32>| {
///         stack.push(value);
///         (value, stack)
///     })
/// }
///
/// let clear: State<Vec<i32>, usize> = make_state(|stack: Vec<i32>| (stack.len(), Vec::new()));
/// let reset = bind_void_with(clear, push, 100);
/// assert_eq!(reset.run(vec![1, 2, 3]), (100, vec![100]));
/// ```
pub fn bind_void_with<S, T, U, X, F>(state: State<S, T>, function: F, extra: X) -> State<S, U>
where
    F: Fn(X) -> State<S, U> + 'static,
    X: Clone + 'static,
    S: 'static,
    T: 'static,
    U: 'static,
{
    state.flat_map(move |_| function(extra.clone()))
}

/// Maps `function` over the result of `state`; the next state is unchanged.
///
/// `fmap(state, f).run(s0) == (f(t), s1)` where `(t, s1) = state.run(s0)`.
///
/// # Examples
///
/// ```rust
/// use functional::state::{fmap, make_state};
///
/// let length = make_state(|text: String| (text.len(), text));
/// let doubled = fmap(length, |length: usize| length * 2);
/// assert_eq!(doubled.run(String::from("abc")), (6, String::from("abc")));
/// ```
pub fn fmap<S, T, U, F>(state: State<S, T>, function: F) -> State<S, U>
where
    F: Fn(T) -> U + 'static,
    S: 'static,
    T: 'static,
    U: 'static,
{
    state.fmap(function)
}
