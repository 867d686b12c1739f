use super::Point;

/// Where in an outer iteration an event was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The starting point, after clamping into the bounds.
    Initial,

    /// After the line search along direction `i` of the current set.
    Direction(usize),

    /// After the line search along the new composite direction.
    Composite,
}

/// An accepted point reported to observers.
///
/// Events are emitted only when the search moves (plus once for the start),
/// so `point.objective` never increases from one event to the next.
#[derive(Debug)]
pub struct Event<'a, I, O, const N: usize> {
    /// Outer iteration, or zero for [`Stage::Initial`].
    pub iter: usize,

    pub stage: Stage,

    pub point: Point<N>,

    /// Distance moved to reach `point`.
    pub step: f64,

    pub input: &'a I,

    pub output: &'a O,
}
