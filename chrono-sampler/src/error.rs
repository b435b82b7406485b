use thiserror::Error;

use crate::{Real, Time};

pub type SamplerResult<T> = Result<T, SamplerError>;

#[derive(Debug, Error, PartialEq)]
pub enum SamplerError {
    #[error("Cutoff must be finite and strictly positive, got {0}")]
    NonPositiveCutoff(Time),
    #[error("Sigma must be finite and strictly positive, got {0}")]
    NonPositiveSigma(Real),
    #[error("Tolerance must be finite and non-negative, got {0}")]
    NegativeTolerance(Time),
    #[error("Window extents must be finite and non-negative, got past {past} and future {future}")]
    NegativeWindow { past: Time, future: Time },
}
