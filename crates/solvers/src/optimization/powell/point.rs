use crate::optimization::Evaluation;

/// A point and its objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize> {
    pub x: [f64; N],
    pub objective: f64,
}

impl<const N: usize> Point<N> {
    #[must_use]
    pub fn new(x: [f64; N], objective: f64) -> Self {
        Self { x, objective }
    }
}

impl<I, O, const N: usize> From<&Evaluation<I, O, N>> for Point<N> {
    fn from(eval: &Evaluation<I, O, N>) -> Self {
        Self::new(eval.x, eval.objective)
    }
}
