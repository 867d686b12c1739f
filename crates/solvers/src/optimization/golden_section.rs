//! Golden section search for single-variable minimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum of a unimodal function on a
//! bounded interval. It maintains two interior points positioned by the
//! golden ratio, compares their objectives, and shrinks the bracket toward the
//! better point. Each shrink reuses one interior point, so every iteration
//! costs a single evaluation.
//!
//! Here it is the refinement stage of the [`powell`](super::powell) line
//! search, which brackets a minimum along each direction first. It works
//! with [`MinimizationProblem<1>`], needs a finite bracket, and finds a local
//! minimum when the bracket holds several.
//!
//! # Observer Events
//!
//! Every evaluation after the first is reported as an [`Event`] carrying the
//! sample and the interior point it competes with. The first sample is not
//! reported because it has nothing to compete with yet. Returning
//! [`Action::StopEarly`] ends the search with the best sample so far.
//! Evaluation failures are not observable and end the search with an error.
//!
//! [`MinimizationProblem<1>`]: conjugate_core::MinimizationProblem

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod point;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;
pub use solution::{Solution, Status};

use conjugate_core::{MinimizationProblem, Model, Observer};

use search::search;

/// Finds the minimum of the objective on `bracket` using golden section search.
///
/// The bracket ends may be given in either order.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if either end of the bracket is not
/// finite, or a model/problem error if an evaluation fails.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    search(model, problem, bracket, config, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or an evaluation fails.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: MinimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, bracket, config, ())
}
