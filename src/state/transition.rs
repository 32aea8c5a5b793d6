use std::rc::Rc;

use static_assertions::assert_not_impl_any;

/// A computation that threads a state through a sequence of steps.
///
/// `State<S, T>` wraps a transition `S -> (T, S)`: given the current state
/// it yields a result and the next state. Running it has no effect beyond
/// what the wrapped function does, so a `State` built from pure functions
/// can be run any number of times with the same outcome.
///
/// The transition is shared through an [`Rc`], which makes `clone` cheap and
/// keeps `State` on the thread that built it.
///
/// # Type Parameters
///
/// - `S`: The state type, threaded from step to step
/// - `T`: The result type
///
/// # Examples
///
/// ```rust
/// use functional::state::State;
///
/// let pop: State<Vec<i32>, Option<i32>> = State::new(|mut stack: Vec<i32>| {
///     let top = stack.pop();
///     (top, stack)
/// });
///
/// let (top, rest) = pop.run(vec![1, 2, 3]);
/// assert_eq!(top, Some(3));
/// assert_eq!(rest, vec![1, 2]);
/// ```
pub struct State<S, T>
where
    S: 'static,
    T: 'static,
{
    transition: Rc<dyn Fn(S) -> (T, S)>,
}

assert_not_impl_any!(State<i32, i32>: Send, Sync);

impl<S, T> State<S, T>
where
    S: 'static,
    T: 'static,
{
    /// Creates a State from a state transition function.
    ///
    /// Any function of the right shape is accepted as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::state::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (T, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Runs the computation from `initial_state`.
    ///
    /// Returns the result together with the next state. A panic raised by
    /// the transition unwinds to the caller.
    pub fn run(&self, initial_state: S) -> (T, S) {
        (self.transition)(initial_state)
    }

    /// Runs the computation and returns only the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::state::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.eval(10), 20);
    /// ```
    pub fn eval(&self, initial_state: S) -> T {
        self.run(initial_state).0
    }

    /// Runs the computation and returns only the next state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::state::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.exec(10), 11);
    /// ```
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Creates a State that yields `value` and leaves the state untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::state::State;
    ///
    /// let state: State<i32, &str> = State::pure("constant");
    /// assert_eq!(state.run(42), ("constant", 42));
    /// ```
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Maps a function over the result; the next state is passed through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::state::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s));
    /// let mapped = state.fmap(|value| value * 2);
    /// assert_eq!(mapped.run(21), (42, 21));
    /// ```
    pub fn fmap<U, F>(self, function: F) -> State<S, U>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (result, next_state) = transition(state);
            (function(result), next_state)
        })
    }

    /// Runs this computation, then the one `function` builds from its result.
    ///
    /// The second computation starts from the state the first one left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::state::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.flat_map(|value| State::new(move |s: i32| (value + s, s * 2)));
    /// // First: (10, 11), then with state 11: (10 + 11, 22)
    /// assert_eq!(chained.run(10), (21, 22));
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> State<S, U>
    where
        F: Fn(T) -> State<S, U> + 'static,
        U: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (result, intermediate_state) = transition(state);
            function(result).run(intermediate_state)
        })
    }

    /// Runs this computation, discards its result, then runs `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::state::State;
    ///
    /// let first: State<i32, i32> = State::new(|s: i32| (s, s + 10));
    /// let sequenced = first.then(State::pure("done"));
    /// assert_eq!(sequenced.run(42), ("done", 52));
    /// ```
    #[must_use]
    pub fn then<U>(self, next: State<S, U>) -> State<S, U>
    where
        U: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Creates a State that yields a projection of the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::state::State;
    ///
    /// let length: State<Vec<i32>, usize> = State::gets(Vec::len);
    /// assert_eq!(length.run(vec![1, 2, 3]), (3, vec![1, 2, 3]));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> T + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Creates a State that yields a copy of the current state.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that replaces the current state with `new_state`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::state::State;
    ///
    /// let state: State<i32, ()> = State::put(100);
    /// assert_eq!(state.exec(42), 100);
    /// ```
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Creates a State that transforms the current state with `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::state::State;
    ///
    /// let state: State<i32, ()> = State::modify(|x| x * 2);
    /// assert_eq!(state.exec(21), 42);
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, T> Clone for State<S, T>
where
    S: 'static,
    T: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, T> std::fmt::Display for State<S, T>
where
    S: 'static,
    T: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_state() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(format!("{state}"), "<State>");
    }

    #[rstest]
    fn state_can_be_run_repeatedly() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(state.run(10), state.run(10));
    }

    #[rstest]
    fn state_get_returns_current_state() {
        let state: State<i32, i32> = State::get();
        assert_eq!(state.run(42), (42, 42));
    }

    #[rstest]
    fn state_put_then_get_observes_new_state() {
        let state = State::put(7).then(State::get());
        assert_eq!(state.run(0), (7, 7));
    }

    #[rstest]
    fn state_modify_transforms_state() {
        let state: State<i32, ()> = State::modify(|x| x * 2);
        let ((), final_state) = state.run(21);
        assert_eq!(final_state, 42);
    }

    #[rstest]
    fn state_clone_shares_transition() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        let cloned = state.clone();
        assert_eq!(state.run(10), cloned.run(10));
    }

    #[rstest]
    #[should_panic(expected = "transition failed")]
    fn state_panic_propagates_from_transition() {
        let state: State<i32, i32> = State::new(|_: i32| panic!("transition failed"));
        let _ = state.run(0);
    }
}
