use super::Point;

/// An evaluated interior point, reported once per evaluation.
///
/// `other` is the interior point the new sample will be compared against
/// when the bracket next shrinks. Evaluation failures are not reported here;
/// they end the search with an [`Error`](super::Error).
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// The evaluated point.
    pub point: Point,

    /// The other interior point.
    pub other: Point,

    /// Model input at `point`.
    pub input: &'a I,

    /// Model output at `point`.
    pub output: &'a O,
}

impl<I, O> Event<'_, I, O> {
    /// Returns `true` if this sample beats the other interior point.
    #[must_use]
    pub fn improves(&self) -> bool {
        self.point.objective < self.other.objective
    }
}
