//! 8-bit gamma LUT baking, lookup, and list-literal formatting.
//!
//! # Algorithm
//! For every input code `i` in `0..=255`:
//! ```text
//! out[i] = round(255 × (i / 255) ^ (1 / gamma))
//! ```
//! Rounding defaults to half-to-even. At gamma 2.2 the closest entry to a
//! tie is `i = 10` (~58.506).

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::LutError;
use crate::transfer::{PowerLawTransfer, TransferFunction};

/// Number of entries in an 8-bit LUT.
pub const LUT_SIZE: usize = 256;

/// Largest 8-bit code value, as the normalization divisor.
const MAX_CODE: f64 = (LUT_SIZE - 1) as f64;

/// How fractional results are rounded to the nearest code value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go to the even neighbour (banker's rounding).
    #[default]
    HalfToEven,
    /// Ties go away from zero.
    HalfAwayFromZero,
}

impl RoundingMode {
    fn round(self, value: f64) -> f64 {
        match self {
            Self::HalfToEven => value.round_ties_even(),
            Self::HalfAwayFromZero => value.round(),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfToEven => write!(f, "half-to-even"),
            Self::HalfAwayFromZero => write!(f, "half-away-from-zero"),
        }
    }
}

/// A 256-entry gamma-correction table for 8-bit intensities.
///
/// Index `i` holds the corrected value of input code `i`. The table is
/// immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GammaLut {
    gamma: f64,
    rounding: RoundingMode,
    table: [u8; LUT_SIZE],
}

impl GammaLut {
    /// Bake a table for `gamma` using half-to-even rounding.
    pub fn new(gamma: f64) -> Result<Self, LutError> {
        Self::with_rounding(gamma, RoundingMode::default())
    }

    /// Bake a table for `gamma` with an explicit rounding mode.
    pub fn with_rounding(gamma: f64, rounding: RoundingMode) -> Result<Self, LutError> {
        let transfer = PowerLawTransfer::new(gamma)?;
        let table = bake(&transfer, rounding);
        tracing::debug!(
            "baked gamma LUT: gamma={gamma}, rounding={rounding}, mid={}",
            table[LUT_SIZE / 2]
        );
        Ok(Self {
            gamma,
            rounding,
            table,
        })
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// All 256 entries in input order.
    pub fn as_slice(&self) -> &[u8] {
        &self.table
    }

    /// Corrected value for input code `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.table.get(index).copied()
    }

    /// Corrected value for an 8-bit sample. Never out of range.
    #[inline]
    pub fn lookup(&self, value: u8) -> u8 {
        self.table[usize::from(value)]
    }

    /// Replace every sample in `samples` with its corrected value.
    pub fn apply_in_place(&self, samples: &mut [u8]) {
        for sample in samples.iter_mut() {
            *sample = self.lookup(*sample);
        }
    }
}

/// Evaluate `transfer` at every code value and quantize back to 8 bits.
fn bake(transfer: &dyn TransferFunction, rounding: RoundingMode) -> [u8; LUT_SIZE] {
    let mut table = [0u8; LUT_SIZE];
    for (i, entry) in table.iter_mut().enumerate() {
        let normalized = i as f64 / MAX_CODE;
        let corrected = transfer.to_encoded(normalized);
        *entry = rounding.round(MAX_CODE * corrected).clamp(0.0, MAX_CODE) as u8;
    }
    table
}

impl AsRef<[u8]> for GammaLut {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Renders as a list literal: `[0, 21, 28, ..., 255]`.
impl fmt::Display for GammaLut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.table.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Serializes as the bare sequence of 256 values.
impl Serialize for GammaLut {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.table.iter())
    }
}
