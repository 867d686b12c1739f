use conjugate_core::{MinimizationProblem, Model};

use crate::optimization::{
    Evaluation, evaluate,
    golden_section::{self, Point},
};

use super::{Config, ConfigError, Error, Interval, line::LineProblem};

/// Step length of the first bracketing probe.
const INITIAL_INCREMENT: f64 = 0.1;

/// Cap on bracket expansions along an unbounded line.
const MAX_EXPANSIONS: usize = 50;

/// Cap on golden section shrinks per line search.
const MAX_REFINE_ITERS: usize = 200;

/// Line search settings derived once per run.
#[derive(Debug, Clone, Copy)]
pub(super) struct LineSearch {
    increment: f64,
    refine: golden_section::Config,
}

impl LineSearch {
    pub(super) fn new(config: &Config) -> Result<Self, ConfigError> {
        let tolerance = INITIAL_INCREMENT * config.line_tolerance();
        let refine = golden_section::Config::new(MAX_REFINE_ITERS, tolerance, 0.0)
            .map_err(|_| ConfigError::LineTolerance)?;

        Ok(Self {
            increment: INITIAL_INCREMENT,
            refine,
        })
    }

    /// Minimizes along `line` within `interval`.
    ///
    /// `start` is the objective at `t = 0`. The minimum is bracketed by
    /// stepping outward from zero and then refined by golden section search.
    /// Returns the best sample that strictly beats `start`. Failing that, a
    /// refined point away from `t = 0` that ties `start` is returned, so a
    /// flat line still moves the search along. `None` means the line search
    /// settled on `t = 0` or found only worse points.
    pub(super) fn run<M, P, const N: usize>(
        &self,
        model: &M,
        line: &LineProblem<'_, P, N>,
        interval: Interval,
        start: f64,
    ) -> Result<Option<Evaluation<M::Input, M::Output, 1>>, Error>
    where
        M: Model,
        P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
    {
        let mut best = Best::new(start);
        let bracket = self.expand(model, line, interval, start, &mut best)?;

        let refined = golden_section::minimize_unobserved(model, line, bracket, &self.refine)
            .map_err(Error::from_line_search::<P::Error>)?;

        best.settle(Evaluation {
            x: [refined.x],
            objective: refined.objective,
            snapshot: refined.snapshot,
        });

        Ok(best.into_inner())
    }

    /// Steps outward from `t = 0` until the minimum is enclosed.
    ///
    /// Each end keeps moving while it is no worse than the best sample, and
    /// stops at its interval limit. The step doubles for the first few
    /// expansions and then grows faster. Expansion also stops once both ends
    /// tie `start`, since a flat line gives no direction to expand in.
    fn expand<M, P, const N: usize>(
        &self,
        model: &M,
        line: &LineProblem<'_, P, N>,
        interval: Interval,
        start: f64,
        best: &mut Best<M::Input, M::Output>,
    ) -> Result<[f64; 2], Error>
    where
        M: Model,
        P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
    {
        let mut lower = Point::new(0.0, start);
        let mut upper = Point::new(0.0, start);
        let mut lowest = start;
        let mut step = self.increment;

        for n in 1..=MAX_EXPANSIONS {
            let mut moved = false;

            if lower.objective <= lowest && lower.x > interval.lower {
                let t = (lower.x - step).max(interval.lower);
                if t.is_finite() {
                    lower = best.offer(sample(model, line, t)?);
                    moved = true;
                }
            }
            if upper.objective <= lowest && upper.x < interval.upper {
                let t = (upper.x + step).min(interval.upper);
                if t.is_finite() {
                    upper = best.offer(sample(model, line, t)?);
                    moved = true;
                }
            }

            if moved && lower.objective == start && upper.objective == start {
                break;
            }

            lowest = lowest.min(lower.objective).min(upper.objective);

            let at_limit = (lower.x == interval.lower && lower.objective <= lowest)
                || (upper.x == interval.upper && upper.objective <= lowest);
            if !moved || at_limit {
                break;
            }

            step *= if n < 4 { 2.0 } else { (0.5 * n as f64).exp() };
            if !step.is_finite() {
                break;
            }
        }

        Ok([lower.x, upper.x])
    }
}

fn sample<M, P, const N: usize>(
    model: &M,
    line: &LineProblem<'_, P, N>,
    t: f64,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    evaluate(model, line, [t]).map_err(Error::from_line_eval)
}

/// Tracks the best sample against a baseline objective.
struct Best<I, O> {
    objective: f64,
    eval: Option<Evaluation<I, O, 1>>,
}

impl<I, O> Best<I, O> {
    fn new(baseline: f64) -> Self {
        Self {
            objective: baseline,
            eval: None,
        }
    }

    /// Keeps `eval` if it improves on the best so far and returns its point.
    fn offer(&mut self, eval: Evaluation<I, O, 1>) -> Point {
        let point = Point::from(&eval);
        if eval.objective < self.objective {
            self.objective = eval.objective;
            self.eval = Some(eval);
        }
        point
    }

    /// Takes the refined sample: like [`offer`](Self::offer), but a tie with
    /// the baseline is also kept when nothing better was found and the sample
    /// is away from `t = 0`.
    fn settle(&mut self, eval: Evaluation<I, O, 1>) {
        let tie = self.eval.is_none() && eval.x[0] != 0.0 && eval.objective == self.objective;
        if tie {
            self.eval = Some(eval);
        } else {
            self.offer(eval);
        }
    }

    fn into_inner(self) -> Option<Evaluation<I, O, 1>> {
        self.eval
    }
}
