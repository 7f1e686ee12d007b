//! Reynolds number and flow-regime classification.
//!
//! The Reynolds number Re = ρVL/μ compares inertial to viscous forces and is
//! the single input that decides which regime the model believes it is in.
//! The regime also decides how much the model trusts itself: confidence is a
//! fixed function of Re, never something a caller can set.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::{Density, Length, Velocity, Viscosity};

use crate::uncertainty::Confidence;

/// Below this, viscous effects dominate and lift estimates are unreliable
pub const VERY_LOW_RE_LIMIT: f64 = 5e4;
/// Upper bound of the laminar regime
pub const LAMINAR_RE_LIMIT: f64 = 5e5;
/// Upper bound of the transitional regime
pub const TRANSITIONAL_RE_LIMIT: f64 = 1e6;
/// Above this the empirical fits were never calibrated
pub const TURBULENT_RE_LIMIT: f64 = 3e6;

/// Boundary-layer regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
    /// Reported by the engine when the separation assessment finds
    /// separated or stalled flow; never produced by [`classify`]
    SeparationLikely,
    VeryLowRe,
    HighReTurbulent,
}

impl FlowRegime {
    /// One-line description for explanation panels
    pub fn description(&self) -> &'static str {
        match self {
            FlowRegime::Laminar => "smooth, layered (laminar) boundary layer",
            FlowRegime::Transitional => "boundary layer transitioning from laminar to turbulent",
            FlowRegime::Turbulent => "fully turbulent boundary layer",
            FlowRegime::SeparationLikely => "flow likely separating from the upper surface",
            FlowRegime::VeryLowRe => "very low Reynolds number, viscous effects dominate",
            FlowRegime::HighReTurbulent => "high Reynolds number turbulent flow",
        }
    }
}

/// Reynolds number together with the regime and confidence derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct FlowClassification {
    pub reynolds_number: f64,
    pub regime: FlowRegime,
    pub confidence: Confidence,
}

/// Reynolds number based on chord length
///
/// # Examples
///
/// ```
/// use aero::reynolds_number;
/// use units::{Density, Length, Velocity, Viscosity};
///
/// let re = reynolds_number(
///     Density::sea_level_air(),
///     Velocity::from_meters_per_sec(20.0),
///     Length::from_meters(1.0),
///     Viscosity::air_15c(),
/// );
/// assert!((re - 1.3536e6).abs() < 1e3);
/// ```
pub fn reynolds_number(
    density: Density,
    velocity: Velocity,
    chord: Length,
    viscosity: Viscosity,
) -> f64 {
    density.to_kg_per_m3() * velocity.to_meters_per_sec() * chord.to_meters()
        / viscosity.to_pascal_seconds()
}

/// Classify a Reynolds number.
///
/// Thresholds are exclusive upper bounds:
///
/// | Re | Regime | Confidence |
/// |---|---|---|
/// | < 5e4 | very-low-re | low |
/// | < 5e5 | laminar | high |
/// | < 1e6 | transitional | medium |
/// | < 3e6 | turbulent | medium |
/// | otherwise | high-re-turbulent | low |
///
/// Non-positive values are not rejected; they land in the very-low bucket.
pub fn classify(reynolds_number: f64) -> FlowClassification {
    let (regime, confidence) = if reynolds_number < VERY_LOW_RE_LIMIT {
        (FlowRegime::VeryLowRe, Confidence::Low)
    } else if reynolds_number < LAMINAR_RE_LIMIT {
        (FlowRegime::Laminar, Confidence::High)
    } else if reynolds_number < TRANSITIONAL_RE_LIMIT {
        (FlowRegime::Transitional, Confidence::Medium)
    } else if reynolds_number < TURBULENT_RE_LIMIT {
        (FlowRegime::Turbulent, Confidence::Medium)
    } else {
        (FlowRegime::HighReTurbulent, Confidence::Low)
    };

    FlowClassification {
        reynolds_number,
        regime,
        confidence,
    }
}
