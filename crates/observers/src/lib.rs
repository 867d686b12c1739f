//! Reusable observers for the conjugate minimizers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `conjugate-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasObjective`], [`CanStopEarly`])
//! - [`trace`]: the [`Trace`] recorder of visited points
//!
//! [`Observer`]: conjugate_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod trace;
pub mod traits;

pub use trace::{Trace, Traceable};
