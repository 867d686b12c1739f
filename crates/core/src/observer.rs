/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers watch or steer a solver without changing its API:
/// recording the visited points, logging, or stopping early.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
/// Observing must never change the solver's arithmetic, so a run with a
/// passive observer returns exactly what an unobserved run returns.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<O: Observer<f64, Action>>(mut observer: O, events: &[f64]) -> Option<usize> {
        events
            .iter()
            .position(|event| observer.observe(event) == Some(Action::Stop))
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1.0, 0.5, 0.25]), None);
    }

    #[test]
    fn closure_observer_can_stop() {
        let mut seen = Vec::new();
        let stopped_at = drive(
            |event: &f64| {
                seen.push(*event);
                (*event < 0.3).then_some(Action::Stop)
            },
            &[1.0, 0.5, 0.25, 0.125],
        );

        assert_eq!(stopped_at, Some(2));
        assert_eq!(seen, vec![1.0, 0.5, 0.25]);
    }
}
