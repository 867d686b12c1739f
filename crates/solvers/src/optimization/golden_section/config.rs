use thiserror::Error;

/// Configuration for the golden section solver.
///
/// The search stops once the two interior points are closer than
/// `x_abs_tol + x_rel_tol * |midpoint|`, or after `max_iters` shrinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    x_rel_tol: f64,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_abs_tol: f64, x_rel_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            x_rel_tol,
        })
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance for x convergence.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance for x convergence.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(
            Config::new(config.max_iters(), config.x_abs_tol(), config.x_rel_tol()),
            Ok(config)
        );
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(10, -1e-9, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, f64::NAN, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, 0.0, f64::INFINITY), Err(ConfigError::XRel));
    }

    #[test]
    fn zero_tolerances_are_allowed() {
        let config = Config::new(5, 0.0, 0.0).unwrap();
        assert_eq!(config.max_iters(), 5);
        assert_eq!(config.x_abs_tol(), 0.0);
    }
}
