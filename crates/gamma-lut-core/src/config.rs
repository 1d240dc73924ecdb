//! LUT configuration: the gamma constant and its environment override.

use std::env::{self, VarError};

use serde::{Deserialize, Serialize};

use crate::error::{LutError, validate_gamma};
use crate::lut::{GammaLut, RoundingMode};

/// Default display gamma.
pub const DEFAULT_GAMMA: f64 = 2.2;

/// Environment variable that overrides the compiled-in gamma.
pub const GAMMA_ENV: &str = "GAMMA_LUT_GAMMA";

/// Parameters for baking a [`GammaLut`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LutConfig {
    /// Exponent of the power law; the table applies `1 / gamma`.
    pub gamma: f64,
    /// Rounding applied when quantizing to 8 bits.
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl Default for LutConfig {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
            rounding: RoundingMode::default(),
        }
    }
}

impl LutConfig {
    /// Defaults, with gamma taken from `GAMMA_LUT_GAMMA` when set.
    pub fn from_env() -> Result<Self, LutError> {
        match env::var(GAMMA_ENV) {
            Ok(raw) => Self::with_gamma_override(Some(&raw)),
            Err(VarError::NotPresent) => Self::with_gamma_override(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Defaults, with gamma parsed from `raw` when present.
    pub fn with_gamma_override(raw: Option<&str>) -> Result<Self, LutError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };

        let gamma: f64 = raw.trim().parse().map_err(|e| {
            tracing::warn!("{GAMMA_ENV}={raw:?} is not a number");
            LutError::InvalidConfig(format!("{GAMMA_ENV}={raw:?}: {e}"))
        })?;
        validate_gamma(gamma)?;
        tracing::debug!("gamma overridden from environment: {gamma}");

        Ok(Self {
            gamma,
            ..Self::default()
        })
    }

    /// Bake the table described by this config.
    pub fn build(&self) -> Result<GammaLut, LutError> {
        GammaLut::with_rounding(self.gamma, self.rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_gamma_2_2_half_to_even() {
        let config = LutConfig::default();
        assert_eq!(config.gamma, 2.2);
        assert_eq!(config.rounding, RoundingMode::HalfToEven);
    }

    #[test]
    fn test_override_absent_keeps_defaults() {
        assert_eq!(
            LutConfig::with_gamma_override(None).unwrap(),
            LutConfig::default()
        );
    }

    #[test]
    fn test_override_parses_gamma() {
        let config = LutConfig::with_gamma_override(Some(" 1.8 ")).unwrap();
        assert_eq!(config.gamma, 1.8);
        assert_eq!(config.rounding, RoundingMode::HalfToEven);
    }

    #[test]
    fn test_override_rejects_garbage() {
        let err = LutConfig::with_gamma_override(Some("bright")).unwrap_err();
        assert!(matches!(err, LutError::InvalidConfig(_)));
        assert!(err.to_string().contains(GAMMA_ENV));
    }

    #[test]
    fn test_override_rejects_non_positive_gamma() {
        for raw in ["0", "-2.2", "NaN", "inf"] {
            assert!(
                matches!(
                    LutConfig::with_gamma_override(Some(raw)),
                    Err(LutError::InvalidGamma(_))
                ),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_build_matches_direct_bake() {
        let config = LutConfig {
            gamma: 1.8,
            rounding: RoundingMode::HalfAwayFromZero,
        };
        let lut = config.build().unwrap();
        assert_eq!(
            lut,
            GammaLut::with_rounding(1.8, RoundingMode::HalfAwayFromZero).unwrap()
        );
    }

    #[test]
    fn test_config_deserializes_with_default_rounding() {
        let config: LutConfig = serde_json::from_str(r#"{"gamma": 2.4}"#).unwrap();
        assert_eq!(config.gamma, 2.4);
        assert_eq!(config.rounding, RoundingMode::HalfToEven);

        let config: LutConfig =
            serde_json::from_str(r#"{"gamma": 2.4, "rounding": "half_away_from_zero"}"#).unwrap();
        assert_eq!(config.rounding, RoundingMode::HalfAwayFromZero);
    }
}
