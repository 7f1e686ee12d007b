//! Raw lift and drag coefficients.
//!
//! These closed-form expressions are the engine's "physics". Apart from the
//! 2π thin-airfoil lift slope they are empirical fits, and the constants are
//! kept exactly as calibrated so results match reference outputs.
//!
//! The functions here assume clamped inputs (see [`GeometryDefinition::clamped`]).
//! Separation corrections are applied afterwards by the caller, never in here,
//! so the uncorrected values stay available for diagnostics.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::config::StallAngleModel;
use crate::geometry::GeometryDefinition;

/// Aspect ratio assumed for induced drag (no finite-span geometry is modeled)
pub const INDUCED_ASPECT_RATIO: f64 = 6.0;
/// Oswald span efficiency
pub const OSWALD_EFFICIENCY: f64 = 0.85;

/// Post-stall lift never drops below this fraction of the attached value
pub const STALL_FACTOR_FLOOR: f64 = 0.3;
/// Degrees past stall over which the cosine decay spans a quarter period
pub const STALL_DECAY_SPAN_DEG: f64 = 20.0;
/// Drag multiplier growth per degree past stall
pub const POST_STALL_DRAG_SLOPE: f64 = 0.1;

/// Lift reduction for thick sections: 1 − 0.3·t
pub fn thickness_factor(thickness: f64) -> f64 {
    1.0 - 0.3 * thickness
}

/// Lift validity factor at low Reynolds number: min(1, log10(Re)/6)
///
/// Re below 1 is treated as 1 so the factor never goes negative.
pub fn reynolds_lift_factor(reynolds_number: f64) -> f64 {
    (reynolds_number.max(1.0).log10() / 6.0).min(1.0)
}

/// Smooth lift loss past the stall angle.
///
/// Returns 1 up to the stall angle, then decays along a cosine so there is
/// no discontinuous jump, bottoming out at [`STALL_FACTOR_FLOOR`].
///
/// # Arguments
///
/// * `abs_angle_deg` - Magnitude of the angle of attack in degrees
/// * `stall_angle_deg` - Stall angle in degrees
pub fn stall_factor(abs_angle_deg: f64, stall_angle_deg: f64) -> f64 {
    let excess = abs_angle_deg - stall_angle_deg;
    if excess <= 0.0 {
        return 1.0;
    }
    let phase = (excess / STALL_DECAY_SPAN_DEG) * (PI / 2.0);
    phase.cos().max(STALL_FACTOR_FLOOR)
}

/// Linear drag growth past stall: 1 + 0.1·max(0, |α| − stall)
pub fn post_stall_drag_multiplier(abs_angle_deg: f64, stall_angle_deg: f64) -> f64 {
    1.0 + POST_STALL_DRAG_SLOPE * (abs_angle_deg - stall_angle_deg).max(0.0)
}

/// Lift coefficient for an explicit stall angle.
///
/// cl = (2π·α + π·camber) · (1 − 0.3·t) · min(1, log10(Re)/6) · stall_factor
pub fn lift_coefficient(
    geometry: &GeometryDefinition,
    reynolds_number: f64,
    stall_angle_deg: f64,
) -> f64 {
    let alpha = geometry.angle();
    let thin_airfoil = 2.0 * PI * alpha.to_radians() + PI * geometry.camber;

    thin_airfoil
        * thickness_factor(geometry.thickness)
        * reynolds_lift_factor(reynolds_number)
        * stall_factor(alpha.abs().to_degrees(), stall_angle_deg)
}

/// Lift coefficient using the default thickness-based stall angle
///
/// # Examples
///
/// ```
/// use aero::{calculate_lift, GeometryDefinition};
///
/// let geometry = GeometryDefinition::default(); // NACA 0012 at 5°
/// let cl = calculate_lift(&geometry, 1.35e6);
/// assert!(cl > 0.5 && cl < 0.55);
/// ```
pub fn calculate_lift(geometry: &GeometryDefinition, reynolds_number: f64) -> f64 {
    let stall = StallAngleModel::default().stall_angle(geometry.thickness);
    lift_coefficient(geometry, reynolds_number, stall)
}

/// The individual contributions that make up the raw drag coefficient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct DragBreakdown {
    /// 0.006 + 0.02·t
    pub profile: f64,
    /// cl²/(π·AR·e)
    pub induced: f64,
    /// sin²(α)·0.1
    pub pressure: f64,
    /// Turbulent flat-plate friction 0.074/Re^0.2
    pub skin_friction: f64,
    pub post_stall_multiplier: f64,
}

impl DragBreakdown {
    pub fn total(&self) -> f64 {
        (self.profile + self.induced + self.pressure + self.skin_friction)
            * self.post_stall_multiplier
    }
}

pub fn drag_breakdown(
    geometry: &GeometryDefinition,
    lift_coefficient: f64,
    reynolds_number: f64,
    stall_angle_deg: f64,
) -> DragBreakdown {
    let alpha = geometry.angle();
    let sin_alpha = alpha.sin();

    DragBreakdown {
        profile: 0.006 + 0.02 * geometry.thickness,
        induced: lift_coefficient * lift_coefficient
            / (PI * INDUCED_ASPECT_RATIO * OSWALD_EFFICIENCY),
        pressure: sin_alpha * sin_alpha * 0.1,
        skin_friction: 0.074 / reynolds_number.max(1.0).powf(0.2),
        post_stall_multiplier: post_stall_drag_multiplier(
            alpha.abs().to_degrees(),
            stall_angle_deg,
        ),
    }
}

/// Drag coefficient using the default thickness-based stall angle
pub fn calculate_drag(geometry: &GeometryDefinition, lift_coefficient: f64, reynolds_number: f64) -> f64 {
    let stall = StallAngleModel::default().stall_angle(geometry.thickness);
    drag_breakdown(geometry, lift_coefficient, reynolds_number, stall).total()
}
