//! Engine configuration.
//!
//! A single engine covers both the simplified classroom profile and the full
//! uncertainty-aware model; [`Fidelity`] selects between them.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Which model profile the engine runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum Fidelity {
    /// Clamped inputs and corrected coefficients, but uncertainty bounds only
    /// reflect the Reynolds regime (no separation penalty)
    Educational,
    /// Uncertainty bounds also widen with separation severity
    #[default]
    Full,
}

/// How the nominal stall angle is estimated from section thickness
///
/// Only [`StallAngleModel::default`] is used unless a caller opts in to
/// one of the alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum StallAngleModel {
    /// stall = base − slope·thickness (degrees)
    ThicknessLinear { base: f64, slope: f64 },
    /// Same stall angle for every section (degrees)
    Fixed { degrees: f64 },
}

impl Default for StallAngleModel {
    /// 15° − 10·thickness
    fn default() -> Self {
        StallAngleModel::ThicknessLinear {
            base: 15.0,
            slope: 10.0,
        }
    }
}

impl StallAngleModel {
    /// Nominal stall angle in degrees for a section of the given thickness ratio
    ///
    /// # Examples
    ///
    /// ```
    /// use aero::StallAngleModel;
    ///
    /// let stall = StallAngleModel::default().stall_angle(0.12);
    /// assert!((stall - 13.8).abs() < 1e-12);
    /// ```
    pub fn stall_angle(&self, thickness: f64) -> f64 {
        match *self {
            StallAngleModel::ThicknessLinear { base, slope } => base - thickness * slope,
            StallAngleModel::Fixed { degrees } => degrees,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct EngineConfig {
    pub fidelity: Fidelity,
    pub stall_model: StallAngleModel,
}

impl EngineConfig {
    pub fn educational() -> Self {
        Self {
            fidelity: Fidelity::Educational,
            ..Self::default()
        }
    }
}
