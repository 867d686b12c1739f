//! Powell's conjugate direction method for bounded multi-variable minimization.
//!
//! # Algorithm
//!
//! Powell's method minimizes a function of `N` variables without derivatives.
//! It keeps a set of `N` search directions, starting from the coordinate axes.
//! Each outer iteration runs a line search along every direction in turn, then
//! takes the net displacement of that sweep as a new direction. The new
//! direction replaces the oldest one and gets a line search of its own. On a
//! quadratic the directions become mutually conjugate, so the method behaves
//! like a derivative-free conjugate gradient.
//!
//! The direction set is reset to the coordinate axes every `N` iterations to
//! keep it from collapsing onto a subspace.
//!
//! Line searches bracket a minimum by stepping outward from the current point
//! and refine it with [`golden_section`](super::golden_section).
//!
//! # Bounds
//!
//! Each variable may have a lower limit, an upper limit, both, or neither. The
//! starting point is clamped into the box, every line search is confined to
//! the part of its line inside the box, and every accepted point is clamped
//! again, so the search never leaves the box.
//!
//! # Termination
//!
//! The run ends with a [`Status`]:
//!
//! - [`Status::Converged`]: the composite step shrank below `tolerance`
//!   relative to the previous one
//! - [`Status::Stalled`]: a line search returned a zero step
//! - [`Status::Pinned`]: a full sweep ended exactly where it started
//! - [`Status::MaxIters`]: the iteration cap was reached
//! - [`Status::StoppedByObserver`]: an observer returned [`Action::StopEarly`]
//!
//! A line step is taken when it improves the objective, or when it ties the
//! objective away from the current point, which carries the search across
//! flat directions. Objectives never increase, so the returned point is the
//! best one visited. A NaN or infinite objective aborts
//! the run with [`Error::NonFiniteObjective`].
//!
//! # Observer Events
//!
//! The solver emits an [`Event`] for the starting point and for every accepted
//! move, tagged with its [`Stage`]. Objectives never increase from one event
//! to the next.
//!
//! # Example
//!
//! ```
//! use conjugate_solvers::optimization::powell::{self, Bound, Config, Status};
//!
//! let config = Config::default()
//!     .with_bounds([Bound::between(0.0, 1.0).unwrap(), Bound::UNBOUNDED]);
//!
//! let solution = powell::minimize_fn(
//!     |x: &[f64; 2]| (x[0] - 10.0).powi(2) + (x[1] + 10.0).powi(2),
//!     [0.5, 0.5],
//!     &config,
//! )
//! .unwrap();
//!
//! assert_ne!(solution.status, Status::StoppedByObserver);
//! assert_eq!(solution.x[0], 1.0);
//! assert!((solution.x[1] + 10.0).abs() < 1e-6);
//! ```

mod action;
mod bounds;
mod config;
mod directions;
mod error;
mod event;
mod line;
mod line_search;
mod point;
mod search;
mod solution;
mod vector;


pub use action::Action;
pub use bounds::{Bound, BoundError, Bounds, Interval};
pub use config::{Config, ConfigError};
pub use directions::DirectionSet;
pub use error::Error;
pub use event::{Event, Stage};
pub use point::Point;
pub use solution::{Solution, Status};

use conjugate_core::{MinimizationProblem, Model, Observer};

use crate::optimization::FnObjective;

use search::search;

/// Minimizes the objective starting from `x0` using Powell's method.
///
/// The observer receives an [`Event`] for the starting point and for each
/// accepted move. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the bound list length does not match `N`, the model or
/// problem fails, or an objective is not finite.
pub fn minimize<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    search(model, problem, x0, config, observer)
}

/// Minimizes the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: MinimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, x0, config, ())
}

/// Minimizes a plain function of `N` variables.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_fn<F, const N: usize>(
    function: F,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<[f64; N], f64, N>, Error>
where
    F: Fn(&[f64; N]) -> f64,
{
    let objective = FnObjective::new(function);
    minimize_unobserved(&objective, &objective, x0, config)
}
