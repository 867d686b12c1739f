use thiserror::Error;

use conjugate_core::{MinimizationProblem, Model, Snapshot};

/// The result of evaluating a minimization problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],

    pub objective: f64,

    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating a minimization problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or compute the objective.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as MinimizationProblem<N>>::Error>,
>;

/// Evaluates the model in the context of a minimization problem.
///
/// This function maps `x` to model input, calls the model, then computes
/// the objective from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or objective computation fails.
pub fn evaluate<M, P, const N: usize>(model: &M, problem: &P, x: [f64; N]) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let objective = problem
        .objective(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        objective,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    use crate::optimization::FnObjective;

    #[test]
    fn evaluation_keeps_x_objective_and_snapshot() {
        let sphere = FnObjective::new(|x: &[f64; 2]| x[0] * x[0] + x[1] * x[1]);

        let eval = evaluate(&sphere, &sphere, [1.0, -2.0]).unwrap();

        assert_eq!(eval.x, [1.0, -2.0]);
        assert_relative_eq!(eval.objective, 5.0);
        assert_eq!(eval.snapshot.input, [1.0, -2.0]);
        assert_relative_eq!(eval.snapshot.output, 5.0);
    }

    #[derive(Debug, Error)]
    #[error("negative input")]
    struct NegativeInput;

    struct SqrtProblem;

    impl MinimizationProblem<1> for SqrtProblem {
        type Input = f64;
        type Output = f64;
        type Error = NegativeInput;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            if x[0] < 0.0 {
                Err(NegativeInput)
            } else {
                Ok(x[0].sqrt())
            }
        }

        fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
            Ok(*output)
        }
    }

    struct Double;

    impl Model for Double {
        type Input = f64;
        type Output = f64;
        type Error = std::convert::Infallible;

        fn call(&self, input: &f64) -> Result<f64, Self::Error> {
            Ok(2.0 * input)
        }
    }

    #[test]
    fn problem_errors_are_reported() {
        let result = evaluate(&Double, &SqrtProblem, [-1.0]);
        assert!(matches!(result, Err(EvalError::Problem(NegativeInput))));

        let eval = evaluate(&Double, &SqrtProblem, [4.0]).unwrap();
        assert_relative_eq!(eval.objective, 4.0);
    }
}
