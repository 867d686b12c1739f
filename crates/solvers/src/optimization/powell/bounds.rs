use thiserror::Error;

use super::Error;

/// An inclusive interval for one variable.
///
/// Missing sides are stored as infinities, so `Bound::UNBOUNDED` is
/// `(-inf, inf)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[Option<f64>; 2]", into = "[Option<f64>; 2]")
)]
pub struct Bound {
    lower: f64,
    upper: f64,
}

/// Errors that can occur when constructing a [`Bound`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundError {
    #[error("bound limits must not be NaN")]
    NaN,

    #[error("lower limit must not exceed upper limit")]
    Empty,
}

impl Bound {
    pub const UNBOUNDED: Self = Self {
        lower: f64::NEG_INFINITY,
        upper: f64::INFINITY,
    };

    /// Creates a bound where `None` leaves that side open.
    ///
    /// # Errors
    ///
    /// Returns an error if either limit is NaN or the interval is empty.
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Result<Self, BoundError> {
        let lower = lower.unwrap_or(f64::NEG_INFINITY);
        let upper = upper.unwrap_or(f64::INFINITY);

        if lower.is_nan() || upper.is_nan() {
            return Err(BoundError::NaN);
        }
        if lower > upper || lower == f64::INFINITY || upper == f64::NEG_INFINITY {
            return Err(BoundError::Empty);
        }

        Ok(Self { lower, upper })
    }

    /// Creates a bound closed on both sides.
    ///
    /// # Errors
    ///
    /// See [`Bound::new`].
    pub fn between(lower: f64, upper: f64) -> Result<Self, BoundError> {
        Self::new(Some(lower), Some(upper))
    }

    /// Creates a bound with only a lower limit.
    ///
    /// # Errors
    ///
    /// See [`Bound::new`].
    pub fn at_least(lower: f64) -> Result<Self, BoundError> {
        Self::new(Some(lower), None)
    }

    /// Creates a bound with only an upper limit.
    ///
    /// # Errors
    ///
    /// See [`Bound::new`].
    pub fn at_most(upper: f64) -> Result<Self, BoundError> {
        Self::new(None, Some(upper))
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Returns `value` clamped into the bound.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl TryFrom<[Option<f64>; 2]> for Bound {
    type Error = BoundError;

    fn try_from([lower, upper]: [Option<f64>; 2]) -> Result<Self, Self::Error> {
        Self::new(lower, upper)
    }
}

impl From<Bound> for [Option<f64>; 2] {
    fn from(bound: Bound) -> Self {
        [
            bound.lower.is_finite().then_some(bound.lower),
            bound.upper.is_finite().then_some(bound.upper),
        ]
    }
}

/// The range of step lengths `t` that keep `x + t * d` inside the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    pub const UNBOUNDED: Self = Self {
        lower: f64::NEG_INFINITY,
        upper: f64::INFINITY,
    };

    /// Returns `true` if both ends are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        self.lower <= t && t <= self.upper
    }
}

/// One [`Bound`] per variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<const N: usize>([Bound; N]);

impl<const N: usize> Bounds<N> {
    #[must_use]
    pub fn new(bounds: [Bound; N]) -> Self {
        Self(bounds)
    }

    #[must_use]
    pub fn unbounded() -> Self {
        Self([Bound::UNBOUNDED; N])
    }

    /// Builds bounds from a configured list.
    ///
    /// An empty list means every variable is unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BoundsDimension`] if the list is non-empty and its
    /// length differs from `N`.
    pub fn from_slice(bounds: &[Bound]) -> Result<Self, Error> {
        if bounds.is_empty() {
            return Ok(Self::unbounded());
        }
        <[Bound; N]>::try_from(bounds)
            .map(Self)
            .map_err(|_| Error::BoundsDimension {
                expected: N,
                found: bounds.len(),
            })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Bound> {
        self.0.get(index)
    }

    #[must_use]
    pub fn contains(&self, x: &[f64; N]) -> bool {
        self.0.iter().zip(x).all(|(bound, &xi)| bound.contains(xi))
    }

    /// Clamps each component of `x` into its bound.
    ///
    /// Returns `true` if any component changed.
    pub fn constrain(&self, x: &mut [f64; N]) -> bool {
        let mut changed = false;
        for (bound, xi) in self.0.iter().zip(x.iter_mut()) {
            let clamped = bound.clamp(*xi);
            if clamped != *xi {
                *xi = clamped;
                changed = true;
            }
        }
        changed
    }

    /// Returns the feasible step range along `direction` from `x`.
    ///
    /// Components with a zero direction entry place no limit on `t`.
    /// Assumes `x` is already inside the bounds.
    #[must_use]
    pub fn line_interval(&self, x: &[f64; N], direction: &[f64; N]) -> Interval {
        let mut interval = Interval::UNBOUNDED;

        for ((bound, &xi), &di) in self.0.iter().zip(x).zip(direction) {
            if di == 0.0 {
                continue;
            }

            let to_lower = (bound.lower - xi) / di;
            let to_upper = (bound.upper - xi) / di;
            let (lower, upper) = if di > 0.0 {
                (to_lower, to_upper)
            } else {
                (to_upper, to_lower)
            };

            interval.lower = interval.lower.max(lower);
            interval.upper = interval.upper.min(upper);
        }

        interval
    }
}

impl<const N: usize> Default for Bounds<N> {
    fn default() -> Self {
        Self::unbounded()
    }
}
