//! Output types of [`crate::simulate`].
//!
//! Collaborators (UI panels, report export) only read these values.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::coefficients::DragBreakdown;
use crate::geometry::{FlowConditions, GeometryDefinition};
use crate::reynolds::FlowClassification;
use crate::separation::SeparationAssessment;
use crate::stability::{Stability, StallRisk};
use crate::uncertainty::UncertaintyBounds;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct Inputs {
    pub geometry: GeometryDefinition,
    pub flow: FlowConditions,
}

/// Uncorrected values kept for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct Diagnostics {
    /// Lift coefficient before the separation correction
    pub raw_lift_coefficient: f64,
    /// Drag coefficient before the separation correction
    pub raw_drag_coefficient: f64,
    pub drag_breakdown: DragBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum WarningKind {
    LowReynolds,
    HighReynolds,
    FlowSeparation,
    Stalled,
    StallApproaching,
    LowConfidence,
    Unstable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

/// Plain-language sentences for the explanation panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct Explanation {
    pub regime: String,
    pub lift: String,
    pub drag: String,
    pub separation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct AerodynamicResults {
    /// Geometry and flow after clamping, i.e. what was actually evaluated
    pub inputs: Inputs,
    pub flow: FlowClassification,
    /// Pa
    pub dynamic_pressure: f64,
    /// Nominal stall angle, degrees
    pub stall_angle_deg: f64,
    pub lift_coefficient: UncertaintyBounds,
    pub drag_coefficient: UncertaintyBounds,
    /// N
    pub lift_force: UncertaintyBounds,
    /// N
    pub drag_force: UncertaintyBounds,
    /// Lift-to-drag ratio
    pub efficiency: UncertaintyBounds,
    pub separation: SeparationAssessment,
    pub stability: Stability,
    pub stall_risk: StallRisk,
    pub diagnostics: Diagnostics,
    pub warnings: Vec<Warning>,
    pub explanation: Explanation,
}

impl AerodynamicResults {
    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}
