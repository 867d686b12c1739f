//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`]: events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use conjugate_core::Observer;
//! use conjugate_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use conjugate_solvers::optimization::{golden_section, powell};

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasObjective ---

impl<I, O> HasObjective for golden_section::Event<'_, I, O> {
    fn objective(&self) -> f64 {
        self.point.objective
    }
}

impl<I, O, const N: usize> HasObjective for powell::Event<'_, I, O, N> {
    fn objective(&self) -> f64 {
        self.point.objective
    }
}

// --- CanStopEarly ---

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for powell::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use conjugate_core::Observer;
    use conjugate_solvers::optimization::FnObjective;

    /// Stops any solver once the objective reaches `target`.
    struct GoodEnough {
        target: f64,
        seen: usize,
    }

    impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            self.seen += 1;
            (event.objective() <= self.target).then(A::stop_early)
        }
    }

    impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for &mut GoodEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            (**self).observe(event)
        }
    }

    #[test]
    fn one_observer_stops_both_solvers() {
        let bowl = FnObjective::new(|x: &[f64; 1]| (x[0] - 2.0).powi(2));

        let mut observer = GoodEnough {
            target: 1.0,
            seen: 0,
        };
        let golden = golden_section::minimize(
            &bowl,
            &bowl,
            [-10.0, 10.0],
            &golden_section::Config::default(),
            &mut observer,
        )
        .unwrap();
        assert_eq!(golden.status, golden_section::Status::StoppedByObserver);
        assert!(observer.seen > 0);

        let mut observer = GoodEnough {
            target: 1.0,
            seen: 0,
        };
        let solution = powell::minimize(
            &bowl,
            &bowl,
            [-10.0],
            &powell::Config::default(),
            &mut observer,
        )
        .unwrap();
        assert_eq!(solution.status, powell::Status::StoppedByObserver);
        assert!(solution.objective().unwrap() <= 1.0);
    }

    #[test]
    fn actions_map_to_solver_variants() {
        assert_eq!(
            <golden_section::Action as CanStopEarly>::stop_early(),
            golden_section::Action::StopEarly
        );
        assert_eq!(
            <powell::Action as CanStopEarly>::stop_early(),
            powell::Action::StopEarly
        );
    }
}
