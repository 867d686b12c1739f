/// A callable model that maps a typed input to a typed output.
///
/// In a minimization the model is the expensive part: the function being
/// minimized, evaluated once per trial point. Models must be deterministic,
/// always producing the same output for a given input, because the solvers
/// compare outputs from different calls and never re-check them.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
///
/// Solvers return the snapshot at the reported optimum so callers can inspect
/// the full model output without calling the model again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Paraboloid;

    impl Model for Paraboloid {
        type Input = [f64; 2];
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
            Ok(x[0] * x[0] + x[1] * x[1])
        }
    }

    #[test]
    fn snapshot_captures_a_model_call() {
        let input = [3.0, 4.0];
        let output = Paraboloid.call(&input).unwrap();

        let snapshot = Snapshot::new(input, output);

        assert_eq!(snapshot.input, [3.0, 4.0]);
        assert_eq!(snapshot.output, 25.0);
    }
}
