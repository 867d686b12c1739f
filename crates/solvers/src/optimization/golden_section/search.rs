use conjugate_core::{MinimizationProblem, Model, Observer};

use crate::optimization::evaluate::{Evaluation, evaluate};

use super::{
    Action, Config, Error, Event, Point, Solution, bracket::GoldenBracket, solution::Status,
    state::State,
};

/// Core golden section search loop.
///
/// Both interior points are evaluated up front, but only the second is
/// reported, since the first has no `other` to be compared against.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let bracket = GoldenBracket::new(bracket)?;

    let left = evaluate(model, problem, [bracket.inner_left])?;
    let right = evaluate(model, problem, [bracket.inner_right])?;
    let stop = emit(&mut observer, &right, Point::from(&left));

    let mut state = State::new(bracket, left, right);
    if stop {
        return Ok(state.into_solution(Status::StoppedByObserver, 0));
    }

    for iter in 1..=config.max_iters() {
        if state.is_converged(config) {
            return Ok(state.into_solution(Status::Converged, iter - 1));
        }

        let shrink = state.next_shrink();
        let eval = evaluate(model, problem, [shrink.x()])?;
        let stop = emit(&mut observer, &eval, state.kept(shrink));
        state.apply(shrink, eval);

        if stop {
            return Ok(state.into_solution(Status::StoppedByObserver, iter));
        }
    }

    Ok(state.into_solution(Status::MaxIters, config.max_iters()))
}

/// Reports `eval` and returns `true` if the observer asks to stop.
fn emit<I, O, Obs>(observer: &mut Obs, eval: &Evaluation<I, O, 1>, other: Point) -> bool
where
    Obs: for<'a> Observer<Event<'a, I, O>, Action>,
{
    let event = Event {
        point: Point::from(eval),
        other,
        input: &eval.snapshot.input,
        output: &eval.snapshot.output,
    };
    matches!(observer.observe(&event), Some(Action::StopEarly))
}
