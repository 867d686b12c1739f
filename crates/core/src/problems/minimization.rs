/// Defines a minimization problem to be solved.
///
/// A minimization problem maps solver variables to a model input,
/// then computes an objective value from the model input and output.
/// Solvers search for the variables that minimize the objective.
///
/// The const generic `N` is the number of solver variables.
/// `N = 1` is a scalar problem (a line search), and `N = 0` is a degenerate
/// problem with nothing to search.
pub trait MinimizationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes the objective value from model input/output.
    ///
    /// Solvers treat lower values as better. Solvers may reject non-finite
    /// objectives, so return an error instead of `NaN` when the objective
    /// cannot be computed.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
