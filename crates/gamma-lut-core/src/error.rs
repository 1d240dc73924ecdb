use std::env::VarError;

#[derive(Debug, thiserror::Error)]
pub enum LutError {
    #[error("gamma must be finite and strictly positive, got {0}")]
    InvalidGamma(f64),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<VarError> for LutError {
    fn from(err: VarError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Reject gamma values for which `1 / gamma` is not a usable exponent.
pub(crate) fn validate_gamma(gamma: f64) -> Result<f64, LutError> {
    if gamma.is_finite() && gamma > 0.0 {
        Ok(gamma)
    } else {
        Err(LutError::InvalidGamma(gamma))
    }
}
