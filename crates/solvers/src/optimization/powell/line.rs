use thiserror::Error;

use conjugate_core::MinimizationProblem;

use super::vector;

/// Restricts an `N`-variable problem to the line `origin + t * direction`.
pub(super) struct LineProblem<'a, P, const N: usize> {
    problem: &'a P,
    origin: [f64; N],
    direction: [f64; N],
}

/// Errors raised while evaluating a point on the line.
#[derive(Debug, Error)]
pub(super) enum LineError<E> {
    #[error("objective is not finite: {objective}")]
    NonFinite { objective: f64 },

    #[error(transparent)]
    Problem(E),
}

impl<'a, P, const N: usize> LineProblem<'a, P, N> {
    pub(super) fn new(problem: &'a P, origin: [f64; N], direction: [f64; N]) -> Self {
        Self {
            problem,
            origin,
            direction,
        }
    }

    /// Returns the full point at step `t`.
    pub(super) fn at(&self, t: f64) -> [f64; N] {
        vector::advance(&self.origin, &self.direction, t)
    }
}

impl<P, const N: usize> MinimizationProblem<1> for LineProblem<'_, P, N>
where
    P: MinimizationProblem<N>,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = LineError<P::Error>;

    fn input(&self, t: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        self.problem.input(&self.at(t[0])).map_err(LineError::Problem)
    }

    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error> {
        let objective = self
            .problem
            .objective(input, output)
            .map_err(LineError::Problem)?;

        if objective.is_finite() {
            Ok(objective)
        } else {
            Err(LineError::NonFinite { objective })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::optimization::{FnObjective, evaluate};

    #[test]
    fn evaluates_along_the_line() {
        let sphere = FnObjective::new(|x: &[f64; 2]| x[0] * x[0] + x[1] * x[1]);
        let line = LineProblem::new(&sphere, [1.0, 1.0], [1.0, 0.0]);

        assert_eq!(line.at(-1.0), [0.0, 1.0]);

        let eval = evaluate(&sphere, &line, [-1.0]).unwrap();
        assert_eq!(eval.x, [-1.0]);
        assert_eq!(eval.snapshot.input, [0.0, 1.0]);
        assert_relative_eq!(eval.objective, 1.0);
    }

    #[test]
    fn non_finite_objective_is_an_error() {
        let log = FnObjective::new(|x: &[f64; 1]| x[0].ln());
        let line = LineProblem::new(&log, [1.0], [1.0]);

        assert!(evaluate(&log, &line, [0.0]).is_ok());
        assert!(matches!(
            evaluate(&log, &line, [-1.0]),
            Err(crate::optimization::EvalError::Problem(LineError::NonFinite { .. }))
        ));
        assert!(matches!(
            evaluate(&log, &line, [-2.0]),
            Err(crate::optimization::EvalError::Problem(LineError::NonFinite { .. }))
        ));
    }
}
