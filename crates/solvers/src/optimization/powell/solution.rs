use crate::optimization::Evaluation;

/// Indicates why the Powell search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The composite step shrank below `tolerance` relative to the previous one.
    Converged,

    /// A line search returned a zero step: it settled on the current point or
    /// found only worse ones.
    Stalled,

    /// A sweep over all directions ended where it started.
    Pinned,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Powell search.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Final point, always inside the bounds.
    pub x: [f64; N],

    /// Evaluation at `x`.
    ///
    /// `None` only for a zero-variable problem, where nothing is evaluated.
    pub best: Option<Evaluation<I, O, N>>,

    /// Number of completed outer iterations.
    pub iters: usize,
}

impl<I, O, const N: usize> Solution<I, O, N> {
    /// Returns the objective at `x`, if it was evaluated.
    #[must_use]
    pub fn objective(&self) -> Option<f64> {
        self.best.as_ref().map(|best| best.objective)
    }
}
