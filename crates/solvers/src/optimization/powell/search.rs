use tracing::{debug, info, trace};

use conjugate_core::{MinimizationProblem, Model, Observer};

use crate::optimization::{Evaluation, evaluate};

use super::{
    Action, Bounds, Config, DirectionSet, Error, Event, Point, Solution, Stage, Status,
    line::LineProblem, line_search::LineSearch, vector,
};

/// Result of one line step from the current point.
enum Step {
    Moved { distance: f64 },
    NoImprovement,
    StopEarly,
}

/// Shared context for the line steps of a run.
struct Context<'a, M, P, const N: usize> {
    model: &'a M,
    problem: &'a P,
    bounds: Bounds<N>,
    line_search: LineSearch,
}

pub(super) fn search<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    let bounds = Bounds::<N>::from_slice(config.bounds())?;

    if N == 0 {
        debug!("no variables, nothing to minimize");
        return Ok(Solution {
            status: Status::Converged,
            x: x0,
            best: None,
            iters: 0,
        });
    }

    let cx = Context {
        model,
        problem,
        bounds,
        line_search: LineSearch::new(config)?,
    };

    let mut x = x0;
    if bounds.constrain(&mut x) {
        debug!(x0 = ?x0, x = ?x, "starting point clamped into bounds");
    }

    let mut current = evaluate_point(model, problem, x)?;
    if emit(&mut observer, &current, 0, Stage::Initial, 0.0) {
        return Ok(finish(Status::StoppedByObserver, current, 0));
    }

    let mut directions = DirectionSet::<N>::identity();
    let mut previous_error = 0.0;

    for iter in 1..config.max_iters() {
        if iter % directions.len() == 0 {
            directions.reset();
        }

        let start = current.x;

        for (i, direction) in directions.iter().enumerate() {
            match cx.step(&mut current, direction, iter, Stage::Direction(i), &mut observer)? {
                Step::Moved { .. } => {}
                Step::NoImprovement => {
                    debug!(iter, direction = i, "line search made no progress");
                    return Ok(finish(Status::Stalled, current, iter));
                }
                Step::StopEarly => return Ok(finish(Status::StoppedByObserver, current, iter)),
            }
        }

        let Some(composite) = vector::unit(&vector::difference(&start, &current.x)) else {
            debug!(iter, "sweep returned to its starting point");
            return Ok(finish(Status::Pinned, current, iter));
        };
        directions.rotate(composite);

        let error = match cx.step(&mut current, &composite, iter, Stage::Composite, &mut observer)? {
            Step::Moved { distance } => distance,
            Step::NoImprovement => {
                debug!(iter, "composite line search made no progress");
                return Ok(finish(Status::Stalled, current, iter));
            }
            Step::StopEarly => return Ok(finish(Status::StoppedByObserver, current, iter)),
        };

        let relative = (iter > 1).then(|| error / previous_error);
        log_iteration(config.verbose(), iter, error, relative, &current);

        if relative.is_some_and(|relative| relative < config.tolerance()) {
            return Ok(finish(Status::Converged, current, iter));
        }
        previous_error = error;
    }

    let iters = config.max_iters().saturating_sub(1);
    Ok(finish(Status::MaxIters, current, iters))
}

impl<M, P, const N: usize> Context<'_, M, P, N>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Minimizes along `direction` and moves `current` to the result.
    ///
    /// The new point is clamped into the bounds. If clamping changes it, the
    /// clamped point is re-evaluated and kept only if it is no worse.
    fn step<Obs>(
        &self,
        current: &mut Evaluation<M::Input, M::Output, N>,
        direction: &[f64; N],
        iter: usize,
        stage: Stage,
        observer: &mut Obs,
    ) -> Result<Step, Error>
    where
        Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
    {
        let line = LineProblem::new(self.problem, current.x, *direction);
        let interval = self.bounds.line_interval(&current.x, direction);

        let Some(found) = self
            .line_search
            .run(self.model, &line, interval, current.objective)?
        else {
            return Ok(Step::NoImprovement);
        };

        let mut x = line.at(found.x[0]);
        let next = if self.bounds.constrain(&mut x) {
            let clamped = evaluate_point(self.model, self.problem, x)?;
            if clamped.objective > current.objective {
                return Ok(Step::NoImprovement);
            }
            clamped
        } else {
            Evaluation {
                x,
                objective: found.objective,
                snapshot: found.snapshot,
            }
        };

        let distance = vector::distance(&current.x, &next.x);
        *current = next;

        if emit(observer, current, iter, stage, distance) {
            return Ok(Step::StopEarly);
        }
        Ok(Step::Moved { distance })
    }
}

/// Evaluates `x` and rejects non-finite objectives.
fn evaluate_point<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> Result<Evaluation<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, x)?;
    if !eval.objective.is_finite() {
        return Err(Error::NonFiniteObjective {
            objective: eval.objective,
        });
    }
    Ok(eval)
}

/// Reports `current` and returns `true` if the observer asks to stop.
fn emit<I, O, Obs, const N: usize>(
    observer: &mut Obs,
    current: &Evaluation<I, O, N>,
    iter: usize,
    stage: Stage,
    step: f64,
) -> bool
where
    Obs: for<'a> Observer<Event<'a, I, O, N>, Action>,
{
    let event = Event {
        iter,
        stage,
        point: Point::from(current),
        step,
        input: &current.snapshot.input,
        output: &current.snapshot.output,
    };
    matches!(observer.observe(&event), Some(Action::StopEarly))
}

/// Logs one outer iteration. `relative` is absent on the first iteration.
fn log_iteration<I, O, const N: usize>(
    verbose: bool,
    iter: usize,
    error: f64,
    relative: Option<f64>,
    current: &Evaluation<I, O, N>,
) {
    if verbose {
        info!(iter, error, relative, objective = current.objective, x = ?current.x, "powell iteration");
    } else {
        trace!(iter, error, relative, objective = current.objective, x = ?current.x, "powell iteration");
    }
}

fn finish<I, O, const N: usize>(
    status: Status,
    current: Evaluation<I, O, N>,
    iters: usize,
) -> Solution<I, O, N> {
    debug!(?status, iters, objective = current.objective, "powell finished");
    Solution {
        status,
        x: current.x,
        best: Some(current),
        iters,
    }
}
