//! Gamma LUT Core — 8-bit gamma-correction lookup tables.
//!
//! Builds a 256-entry table mapping 8-bit input intensities through an
//! inverse power-law transfer function. No I/O; the `gamma-lut` binary
//! handles printing.

pub mod config;
pub mod error;
pub mod lut;
pub mod transfer;

// Re-exports for convenience.
pub use config::{DEFAULT_GAMMA, GAMMA_ENV, LutConfig};
pub use error::LutError;
pub use lut::{GammaLut, LUT_SIZE, RoundingMode};
pub use transfer::{PowerLawTransfer, TransferFunction};
