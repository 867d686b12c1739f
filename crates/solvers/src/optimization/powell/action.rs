/// Actions an observer can request during a Powell search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the current point with [`Status::StoppedByObserver`].
    ///
    /// [`Status::StoppedByObserver`]: super::Status::StoppedByObserver
    StopEarly,
}
