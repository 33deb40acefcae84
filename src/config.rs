//! Tolerance configuration.
//!
//! Alignments carry a [`Tolerances`] value that governs their station-domain
//! checks and segment joins. Missing keys fall back to the [`precision`]
//! defaults, so a config file only needs to name what it overrides:
//!
//! ```toml
//! station = 0.001
//! ```

use serde::{Deserialize, Serialize};

use crate::precision;
use crate::{FeaturelineError, Result};

/// Default value functions for serde deserialization.
mod defaults {
    use crate::precision;

    pub fn linear() -> f64 {
        precision::LINEAR
    }

    pub fn angular() -> f64 {
        precision::ANGULAR
    }

    pub fn station() -> f64 {
        precision::STATION
    }
}

/// Geometric tolerances used by alignments.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Maximum gap between consecutive segment end points (model units)
    #[serde(default = "defaults::linear")]
    pub linear: f64,

    /// Largest deflection between segment tangents still reported as
    /// continuous by `CompositeAlignment::angle_points` (sine of the angle)
    #[serde(default = "defaults::angular")]
    pub angular: f64,

    /// Slack past either end of a station range (model units)
    #[serde(default = "defaults::station")]
    pub station: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            linear: precision::LINEAR,
            angular: precision::ANGULAR,
            station: precision::STATION,
        }
    }
}

impl Tolerances {
    /// Parses tolerances from TOML text and validates them.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let tolerances: Tolerances = toml::from_str(text)?;
        tolerances.validate()?;
        Ok(tolerances)
    }

    /// Every tolerance must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("linear", self.linear),
            ("angular", self.angular),
            ("station", self.station),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FeaturelineError::InvalidArgument(format!(
                    "{} tolerance must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
