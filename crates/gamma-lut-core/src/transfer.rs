//! Transfer functions between linear light and gamma-encoded values.
//!
//! Values are normalized to `[0, 1]`. Transfer functions convert between
//! non-linear (encoded) and linear light values.

use crate::error::{LutError, validate_gamma};

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f64) -> f64;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f64) -> f64;
}

// ---------------------------------------------------------------------------
// Pure power law
// ---------------------------------------------------------------------------

/// Pure power-law gamma with no linear toe segment.
///
/// ```text
/// to_linear:  V ^ gamma
/// to_encoded: L ^ (1 / gamma)
/// ```
///
/// Negative inputs are clamped to zero; the curve is only defined on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawTransfer {
    gamma: f64,
}

impl PowerLawTransfer {
    /// Create a power-law transfer. Fails unless `gamma` is finite and `> 0`.
    pub fn new(gamma: f64) -> Result<Self, LutError> {
        Ok(Self {
            gamma: validate_gamma(gamma)?,
        })
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl TransferFunction for PowerLawTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        encoded.max(0.0).powf(self.gamma)
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        linear.max(0.0).powf(self.gamma.recip())
    }
}
