use std::error::Error as StdError;

use crate::optimization::{evaluate::EvalError, golden_section};

use super::{ConfigError, line::LineError};

/// Errors that can occur during a Powell search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("expected {expected} bounds (one per variable), found {found}")]
    BoundsDimension { expected: usize, found: usize },

    #[error("objective is not finite: {objective}")]
    NonFiniteObjective { objective: f64 },

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("line search failed: {0}")]
    LineSearch(#[source] golden_section::Error),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}

impl Error {
    /// Unwraps an error raised while evaluating a point on a search line.
    pub(super) fn from_line_eval<ME, PE>(err: EvalError<ME, LineError<PE>>) -> Self
    where
        ME: StdError + Send + Sync + 'static,
        PE: StdError + Send + Sync + 'static,
    {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::from_line_error(e),
        }
    }

    /// Recovers the underlying failure from a golden section line search.
    pub(super) fn from_line_search<PE>(err: golden_section::Error) -> Self
    where
        PE: StdError + Send + Sync + 'static,
    {
        match err {
            golden_section::Error::Model(e) => Self::Model(e),
            golden_section::Error::Problem(e) => match e.downcast::<LineError<PE>>() {
                Ok(line) => Self::from_line_error(*line),
                Err(e) => Self::Problem(e),
            },
            other @ golden_section::Error::InvalidBracket(_) => Self::LineSearch(other),
        }
    }

    fn from_line_error<PE>(err: LineError<PE>) -> Self
    where
        PE: StdError + Send + Sync + 'static,
    {
        match err {
            LineError::NonFinite { objective } => Self::NonFiniteObjective { objective },
            LineError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
