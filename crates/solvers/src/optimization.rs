//! Solvers for minimization problems.
//!
//! A [`MinimizationProblem`] maps solver variables `x: [f64; N]` to model
//! inputs, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes that objective using objective
//! values only.
//!
//! # Solvers
//!
//! - [`golden_section`]: search over a bracketed interval for unimodal
//!   functions of one variable
//! - [`powell`]: conjugate-direction search in `N` variables, driving a line
//!   search along each direction
//!
//! Plain closures can be minimized through [`FnObjective`], which acts as both
//! the model and the problem.
//!
//! [`MinimizationProblem`]: conjugate_core::MinimizationProblem

mod evaluate;
mod function;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use function::FnObjective;

pub mod golden_section;
pub mod powell;
