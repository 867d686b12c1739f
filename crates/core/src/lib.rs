//! Core traits and types shared by the conjugate minimizers.
//!
//! This crate defines the abstractions that solvers and observers build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`MinimizationProblem`]: adapts solver variables to model inputs and
//!   extracts the objective to minimize from model outputs

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::MinimizationProblem;
pub use {model::Model, model::Snapshot};
