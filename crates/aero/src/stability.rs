//! Quick-look stability and stall-risk indicators.
//!
//! Both classifiers look at |α| alone and are intentionally independent of
//! the separation state. They drive different UI badges and may disagree
//! with [`crate::separation`] near the thresholds.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::Angle;

pub const STABLE_LIMIT_DEG: f64 = 10.0;
pub const MARGINAL_LIMIT_DEG: f64 = 15.0;

/// Fraction of the stall angle where the stall warning starts
pub const STALL_WARNING_FRACTION: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum Stability {
    Stable,
    Marginal,
    Unstable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum StallRisk {
    None,
    Warning,
    Critical,
}

pub fn assess_stability(angle: Angle) -> Stability {
    let abs_deg = angle.abs().to_degrees();
    if abs_deg < STABLE_LIMIT_DEG {
        Stability::Stable
    } else if abs_deg < MARGINAL_LIMIT_DEG {
        Stability::Marginal
    } else {
        Stability::Unstable
    }
}

/// # Arguments
///
/// * `angle` - Angle of attack
/// * `stall_angle_deg` - Nominal (uncorrected) stall angle in degrees
pub fn assess_stall_risk(angle: Angle, stall_angle_deg: f64) -> StallRisk {
    let abs_deg = angle.abs().to_degrees();
    if abs_deg < STALL_WARNING_FRACTION * stall_angle_deg {
        StallRisk::None
    } else if abs_deg < stall_angle_deg {
        StallRisk::Warning
    } else {
        StallRisk::Critical
    }
}
