//! Recording the points a solver visits.
//!
//! See [`Trace`] and [`Traceable`] for usage.

use conjugate_core::Observer;

use conjugate_solvers::optimization::{golden_section, powell};

/// Extracts the visited point from a solver event.
///
/// Return `None` to skip the event.
pub trait Traceable<const N: usize> {
    /// The point this event reports and its objective.
    fn visited(&self) -> Option<([f64; N], f64)>;
}

/// An observer that records every visited point and its objective, in order.
///
/// Pass `&mut Trace` as the observer to keep the trace after the solver
/// returns:
///
/// ```
/// use conjugate_observers::Trace;
/// use conjugate_solvers::optimization::{FnObjective, powell};
///
/// let bowl = FnObjective::new(|x: &[f64; 2]| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2));
/// let mut trace = Trace::<2>::new();
///
/// let solution = powell::minimize(&bowl, &bowl, [0.0, 0.0], &powell::Config::default(), &mut trace)
///     .unwrap();
///
/// assert_eq!(trace.points()[0], [0.0, 0.0]);
/// assert_eq!(trace.last().map(|(x, _)| x), Some(solution.x));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace<const N: usize> {
    points: Vec<[f64; N]>,
    objectives: Vec<f64>,
}

impl<const N: usize> Trace<N> {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            objectives: Vec::new(),
        }
    }

    /// Appends a point and its objective.
    pub fn record(&mut self, x: [f64; N], objective: f64) {
        self.points.push(x);
        self.objectives.push(objective);
    }

    #[must_use]
    pub fn points(&self) -> &[[f64; N]] {
        &self.points
    }

    #[must_use]
    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the most recent point and its objective.
    #[must_use]
    pub fn last(&self) -> Option<([f64; N], f64)> {
        self.points.last().copied().zip(self.objectives.last().copied())
    }

    /// Iterates over the recorded points and objectives in order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64; N], f64)> + '_ {
        self.points.iter().zip(self.objectives.iter().copied())
    }
}

impl<const N: usize, E, A> Observer<E, A> for Trace<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some((x, objective)) = event.visited() {
            self.record(x, objective);
        }
        None
    }
}

/// Allows `&mut Trace<N>` to be passed to solvers that take an observer by
/// value, so the trace can be read after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut Trace<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

impl<I, O, const N: usize> Traceable<N> for powell::Event<'_, I, O, N> {
    fn visited(&self) -> Option<([f64; N], f64)> {
        Some((self.point.x, self.point.objective))
    }
}

impl<I, O> Traceable<1> for golden_section::Event<'_, I, O> {
    fn visited(&self) -> Option<([f64; 1], f64)> {
        Some(([self.point.x], self.point.objective))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use conjugate_solvers::optimization::FnObjective;

    fn rosenbrock(x: &[f64; 2]) -> f64 {
        100.0 * (x[1] - x[0] * x[0]).powi(2) + (x[0] - 1.0).powi(2)
    }

    #[test]
    fn records_in_order() {
        let mut trace = Trace::<2>::new();
        assert!(trace.is_empty());
        assert_eq!(trace.last(), None);

        Observer::<_, ()>::observe(&mut trace, &Visit([1.0, 2.0], 5.0));
        Observer::<_, ()>::observe(&mut trace, &Visit([0.5, 1.0], 3.0));

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.points(), &[[1.0, 2.0], [0.5, 1.0]]);
        assert_eq!(trace.objectives(), &[5.0, 3.0]);
        assert_eq!(trace.last(), Some(([0.5, 1.0], 3.0)));
        assert_eq!(trace.iter().count(), 2);
    }

    struct Visit([f64; 2], f64);

    impl Traceable<2> for Visit {
        fn visited(&self) -> Option<([f64; 2], f64)> {
            Some((self.0, self.1))
        }
    }

    #[test]
    fn powell_trace_is_bounded_and_monotone() {
        let f = FnObjective::new(rosenbrock);
        let bounds = [
            powell::Bound::between(-2.0, 0.9).unwrap(),
            powell::Bound::between(-1.0, 2.0).unwrap(),
        ];
        let config = powell::Config::new(40, 1e-8).unwrap().with_bounds(bounds);

        let mut trace = Trace::<2>::new();
        let solution = powell::minimize(&f, &f, [-1.5, 1.5], &config, &mut trace).unwrap();

        let bounds = powell::Bounds::new(bounds);
        assert!(trace.len() > 1);
        assert!(trace.points().iter().all(|x| bounds.contains(x)));
        assert!(trace.objectives().windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(trace.last(), Some((solution.x, solution.objective().unwrap())));
        assert_abs_diff_eq!(solution.x[0], 0.9, epsilon = 1e-6);
    }

    #[test]
    fn zero_variable_run_records_nothing() {
        let f = FnObjective::new(|_: &[f64; 0]| 0.0);
        let mut trace = Trace::<0>::new();

        powell::minimize(&f, &f, [], &powell::Config::default(), &mut trace).unwrap();

        assert!(trace.is_empty());
    }

    #[test]
    fn golden_trace_records_evaluations() {
        let f = FnObjective::new(|x: &[f64; 1]| (x[0] - 0.3).powi(2));
        let config = golden_section::Config::new(30, 1e-6, 0.0).unwrap();

        let mut trace = Trace::<1>::new();
        let solution = golden_section::minimize(&f, &f, [0.0, 1.0], &config, &mut trace).unwrap();

        assert!(!trace.is_empty());
        assert!(trace.points().iter().all(|x| (0.0..=1.0).contains(&x[0])));
        let best = trace
            .objectives()
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        assert!(solution.objective <= best);
        assert_abs_diff_eq!(solution.x, 0.3, epsilon = 1e-5);
    }
}
