use thiserror::Error;

use super::Bound;

/// Configuration for Powell's method.
///
/// | setting | default | meaning |
/// |---|---|---|
/// | `max_iters` | 20 | outer iteration cap (the loop runs `max_iters - 1` times) |
/// | `tolerance` | 1e-8 | relative step-size threshold for convergence |
/// | `line_tolerance` | `tolerance` | line search tolerance, relative to the 0.1 initial step |
/// | `bounds` | none | one [`Bound`] per variable, or empty for unbounded |
/// | `verbose` | false | log each outer iteration at `INFO` instead of `TRACE` |
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
    line_tolerance: f64,
    bounds: Vec<Bound>,
    verbose: bool,
}

/// Errors that can occur when validating a Powell solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("line_tolerance must be finite and non-negative")]
    LineTolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 20,
            tolerance: 1e-8,
            line_tolerance: 1e-8,
            bounds: Vec::new(),
            verbose: false,
        }
    }
}

impl Config {
    /// Creates an unbounded config; the line tolerance follows `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is negative or non-finite.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            tolerance,
            line_tolerance: tolerance,
            ..Self::default()
        })
    }

    /// Sets the tolerance handed to each line search.
    ///
    /// # Errors
    ///
    /// Returns an error if `line_tolerance` is negative or non-finite.
    pub fn with_line_tolerance(mut self, line_tolerance: f64) -> Result<Self, ConfigError> {
        if !line_tolerance.is_finite() || line_tolerance < 0.0 {
            return Err(ConfigError::LineTolerance);
        }
        self.line_tolerance = line_tolerance;
        Ok(self)
    }

    /// Sets the per-variable bounds.
    ///
    /// The list must be empty or hold exactly one entry per variable; the
    /// length is checked when the solver starts. Use [`Bound::UNBOUNDED`] for
    /// variables without limits.
    #[must_use]
    pub fn with_bounds(mut self, bounds: impl Into<Vec<Bound>>) -> Self {
        self.bounds = bounds.into();
        self
    }

    /// Enables or disables per-iteration `INFO` logging.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns the outer iteration cap.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the relative step-size tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the line search tolerance.
    #[must_use]
    pub fn line_tolerance(&self) -> f64 {
        self.line_tolerance
    }

    /// Returns the configured bounds.
    #[must_use]
    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    /// Returns whether each outer iteration is logged at `INFO`.
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(feature = "serde-derive")]
mod serde_impl {
    use serde::{Deserialize, Serialize};

    use super::{Bound, Config, ConfigError};

    /// Flat, defaulted form of [`Config`] used on the wire.
    ///
    /// A `null` entry in `bounds` leaves that variable unbounded.
    #[derive(Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct RawConfig {
        max_iters: usize,
        tolerance: f64,
        line_tolerance: Option<f64>,
        bounds: Vec<Option<Bound>>,
        verbose: bool,
    }

    impl Default for RawConfig {
        fn default() -> Self {
            let config = Config::default();
            Self {
                max_iters: config.max_iters,
                tolerance: config.tolerance,
                line_tolerance: None,
                bounds: Vec::new(),
                verbose: config.verbose,
            }
        }
    }

    impl TryFrom<RawConfig> for Config {
        type Error = ConfigError;

        fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
            let config = Config::new(raw.max_iters, raw.tolerance)?;
            let config = match raw.line_tolerance {
                Some(line_tolerance) => config.with_line_tolerance(line_tolerance)?,
                None => config,
            };
            let bounds: Vec<Bound> = raw
                .bounds
                .into_iter()
                .map(|bound| bound.unwrap_or(Bound::UNBOUNDED))
                .collect();
            Ok(config.with_bounds(bounds).with_verbose(raw.verbose))
        }
    }

    impl From<Config> for RawConfig {
        fn from(config: Config) -> Self {
            Self {
                max_iters: config.max_iters,
                tolerance: config.tolerance,
                line_tolerance: Some(config.line_tolerance),
                bounds: config
                    .bounds
                    .into_iter()
                    .map(|bound| (bound != Bound::UNBOUNDED).then_some(bound))
                    .collect(),
                verbose: config.verbose,
            }
        }
    }

    impl Serialize for Config {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            RawConfig::from(self.clone()).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Config {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawConfig::deserialize(deserializer)?;
            Config::try_from(raw).map_err(serde::de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();

        assert_eq!(config.max_iters(), 20);
        assert_eq!(config.tolerance(), 1e-8);
        assert_eq!(config.line_tolerance(), 1e-8);
        assert!(config.bounds().is_empty());
        assert!(!config.verbose());
    }

    #[test]
    fn line_tolerance_follows_tolerance_until_set() {
        let config = Config::new(30, 1e-6).unwrap();
        assert_eq!(config.line_tolerance(), 1e-6);

        let config = config.with_line_tolerance(1e-10).unwrap();
        assert_eq!(config.tolerance(), 1e-6);
        assert_eq!(config.line_tolerance(), 1e-10);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(10, -1.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Tolerance));
        assert_eq!(
            Config::default().with_line_tolerance(f64::INFINITY),
            Err(ConfigError::LineTolerance)
        );
    }

    #[test]
    fn builder_sets_bounds_and_verbosity() {
        let bounds = [Bound::between(0.0, 1.0).unwrap(), Bound::UNBOUNDED];
        let config = Config::default().with_bounds(bounds).with_verbose(true);

        assert_eq!(config.bounds(), &bounds);
        assert!(config.verbose());
    }
}
