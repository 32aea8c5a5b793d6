//! A builder for unary function chains.
//!
//! [`Pipeline`] is the method-chaining counterpart of the composition
//! functions: `then` appends a stage to the end of the chain, `after`
//! prepends one to the front.

use super::utils::{compose_after, compose_then, identity};

/// A unary function under construction.
///
/// Each builder step consumes the pipeline and returns a new one wrapping
/// the composed function. The pipeline can be invoked with [`Pipeline::call`]
/// or unwrapped into its function with [`Pipeline::into_inner`].
///
/// # Examples
///
/// ```rust
/// use functional::compose::Pipeline;
///
/// let pipeline = Pipeline::identity()
///     .then(|x: i32| x * 2)
///     .then(|x: i32| x + 1);
/// assert_eq!(pipeline.call(5), 11);
///
/// let prepended = pipeline.after(|text: &str| text.len() as i32);
/// assert_eq!(prepended.call("abc"), 7);
/// ```
#[derive(Clone, Copy)]
pub struct Pipeline<F> {
    function: F,
}

impl<T> Pipeline<fn(T) -> T> {
    /// Creates a pipeline that returns its input unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            function: identity::<T>,
        }
    }
}

impl<F> Pipeline<F> {
    /// Creates a pipeline consisting of a single stage.
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Appends a stage that receives the output of this pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::compose::Pipeline;
    ///
    /// let pipeline = Pipeline::new(|x: i32| x + 1).then(|x: i32| x.to_string());
    /// assert_eq!(pipeline.call(41), "42");
    /// ```
    pub fn then<A, B, C, G>(self, next: G) -> Pipeline<impl Fn(A) -> C>
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
    {
        Pipeline::new(compose_then(self.function, next))
    }

    /// Prepends a stage whose output becomes the input of this pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::compose::Pipeline;
    ///
    /// let pipeline = Pipeline::new(|x: i32| x * 10).after(|x: i32| x + 1);
    /// assert_eq!(pipeline.call(1), 20);
    /// ```
    pub fn after<Z, A, B, E>(self, previous: E) -> Pipeline<impl Fn(Z) -> B>
    where
        E: Fn(Z) -> A,
        F: Fn(A) -> B,
    {
        Pipeline::new(compose_after(self.function, previous))
    }

    /// Runs the pipeline on `input`.
    pub fn call<A, B>(&self, input: A) -> B
    where
        F: Fn(A) -> B,
    {
        (self.function)(input)
    }

    /// Returns the composed function.
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F> std::fmt::Debug for Pipeline<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("<Pipeline>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn push(mut list: Vec<i32>, value: i32) -> Vec<i32> {
        list.push(value);
        list
    }

    #[rstest]
    fn pipeline_identity_returns_input() {
        let pipeline = Pipeline::<fn(Vec<i32>) -> Vec<i32>>::identity();
        assert_eq!(pipeline.call(vec![1, 2]), vec![1, 2]);
    }

    #[rstest]
    fn pipeline_then_and_after_agree() {
        let push_three = |list: Vec<i32>| push(list, 3);
        let push_four = |list: Vec<i32>| push(list, 4);

        let appended = Pipeline::new(push_three).then(push_four);
        let prepended = Pipeline::new(push_four).after(push_three);

        assert_eq!(appended.call(Vec::new()), vec![3, 4]);
        assert_eq!(prepended.call(Vec::new()), vec![3, 4]);
    }

    #[rstest]
    fn pipeline_into_inner_is_callable() {
        let function = Pipeline::new(|x: i32| x + 1).then(|x: i32| x * 3).into_inner();
        assert_eq!(function(1), 6);
    }

    #[rstest]
    fn pipeline_debug_is_opaque() {
        let pipeline = Pipeline::new(|x: i32| x);
        assert_eq!(format!("{pipeline:?}"), "<Pipeline>");
    }
}
