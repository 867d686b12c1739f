use std::convert::Infallible;

use conjugate_core::{MinimizationProblem, Model};

/// Adapts a plain function of `N` variables into a model and problem pair.
///
/// The same value serves as both the [`Model`] and the
/// [`MinimizationProblem`]: the input is `x` itself, the output is the
/// function value, and the objective is the output.
///
/// ```
/// use conjugate_solvers::optimization::{FnObjective, evaluate};
///
/// let booth = FnObjective::new(|x: &[f64; 2]| {
///     (x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2)
/// });
///
/// let eval = evaluate(&booth, &booth, [1.0, 3.0]).unwrap();
/// assert_eq!(eval.objective, 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<F, const N: usize> {
    function: F,
}

impl<F, const N: usize> FnObjective<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    /// Wraps `function` so it can be passed to the solvers.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F, const N: usize> Model for FnObjective<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &[f64; N]) -> Result<f64, Self::Error> {
        Ok((self.function)(input))
    }
}

impl<F, const N: usize> MinimizationProblem<N> for FnObjective<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; N], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}
