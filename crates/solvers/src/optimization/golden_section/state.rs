use crate::optimization::evaluate::Evaluation;

use super::bracket::GoldenBracket;
use super::solution::Status;
use super::{Config, Point, Solution};

/// Which side of the bracket to discard, and where to evaluate next.
#[derive(Debug, Clone, Copy)]
pub(super) enum Shrink {
    /// Discard the left end; payload is x for the new `inner_right`.
    Left(f64),

    /// Discard the right end; payload is x for the new `inner_left`.
    Right(f64),
}

impl Shrink {
    pub(super) fn x(self) -> f64 {
        match self {
            Self::Left(x) | Self::Right(x) => x,
        }
    }
}

/// Bracket, interior samples, and the best evaluation seen so far.
pub(super) struct State<I, O> {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
    best: Evaluation<I, O, 1>,
}

impl<I, O> State<I, O> {
    /// Starts from the two interior evaluations of `bracket`.
    ///
    /// On a tie the left sample is the best.
    pub(super) fn new(
        bracket: GoldenBracket,
        left: Evaluation<I, O, 1>,
        right: Evaluation<I, O, 1>,
    ) -> Self {
        let (left_pt, right_pt) = (Point::from(&left), Point::from(&right));
        let best = if left.objective <= right.objective {
            left
        } else {
            right
        };
        Self {
            bracket,
            left: left_pt,
            right: right_pt,
            best,
        }
    }

    /// Which side to discard and where to evaluate next.
    ///
    /// Ties keep the left side, so a flat objective drifts toward the lower
    /// end of the bracket.
    pub(super) fn next_shrink(&self) -> Shrink {
        if self.left.objective <= self.right.objective {
            Shrink::Right(self.bracket.new_inner_left())
        } else {
            Shrink::Left(self.bracket.new_inner_right())
        }
    }

    /// The interior point that survives `shrink`.
    pub(super) fn kept(&self, shrink: Shrink) -> Point {
        match shrink {
            Shrink::Left(_) => self.right,
            Shrink::Right(_) => self.left,
        }
    }

    /// Applies `shrink` and slots `eval` into the freed interior position.
    pub(super) fn apply(&mut self, shrink: Shrink, eval: Evaluation<I, O, 1>) {
        let point = Point::from(&eval);
        match shrink {
            Shrink::Right(_) => {
                self.bracket.shrink_right();
                self.right = self.left;
                self.left = point;
            }
            Shrink::Left(_) => {
                self.bracket.shrink_left();
                self.left = self.right;
                self.right = point;
            }
        }
        if eval.objective < self.best.objective {
            self.best = eval;
        }
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let gap = (self.bracket.inner_right - self.bracket.inner_left).abs();
        let mid = 0.5 * (self.bracket.inner_left + self.bracket.inner_right);
        gap <= config.x_abs_tol() + config.x_rel_tol() * mid.abs()
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<I, O> {
        Solution {
            status,
            x: self.best.x[0],
            objective: self.best.objective,
            snapshot: self.best.snapshot,
            iters,
        }
    }
}
