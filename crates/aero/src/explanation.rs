//! Warnings and plain-language explanations attached to every result.

use crate::coefficients::DragBreakdown;
use crate::results::{Explanation, Warning, WarningKind};
use crate::reynolds::{FlowClassification, FlowRegime};
use crate::separation::{SeparationAssessment, SeparationState};
use crate::stability::{Stability, StallRisk};
use crate::uncertainty::{Confidence, UncertaintyBounds};

/// Everything the explanation layer needs to know about one evaluation
pub struct Assessment<'a> {
    pub angle_of_attack: f64,
    pub flow: &'a FlowClassification,
    pub separation: &'a SeparationAssessment,
    pub stability: Stability,
    pub stall_risk: StallRisk,
    pub stall_angle_deg: f64,
    pub lift_coefficient: &'a UncertaintyBounds,
    pub drag_coefficient: &'a UncertaintyBounds,
    pub drag_breakdown: &'a DragBreakdown,
}

pub fn collect_warnings(assessment: &Assessment<'_>) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let re = assessment.flow.reynolds_number;

    // Regime is taken from the Reynolds number itself; the reported regime may
    // already be overridden by the separation state.
    if re < crate::reynolds::VERY_LOW_RE_LIMIT {
        warnings.push(warning(
            WarningKind::LowReynolds,
            format!(
                "Reynolds number {re:.0} is very low: viscous effects dominate and lift estimates are unreliable."
            ),
        ));
    } else if re >= crate::reynolds::TURBULENT_RE_LIMIT {
        warnings.push(warning(
            WarningKind::HighReynolds,
            format!(
                "Reynolds number {re:.2e} is above the range the empirical drag fits were tuned for."
            ),
        ));
    }

    match assessment.separation.state {
        SeparationState::Attached => {}
        SeparationState::Marginal => warnings.push(warning(
            WarningKind::FlowSeparation,
            "Flow is starting to separate near the trailing edge; lift is slightly reduced.".into(),
        )),
        SeparationState::Separated => warnings.push(warning(
            WarningKind::FlowSeparation,
            "Large regions of separated flow: lift is reduced and drag is rising quickly.".into(),
        )),
        SeparationState::Stalled => warnings.push(warning(
            WarningKind::Stalled,
            format!(
                "The section is stalled at {:.1}° (effective stall angle {:.1}°).",
                assessment.angle_of_attack, assessment.separation.effective_stall_angle_deg
            ),
        )),
    }

    match assessment.stall_risk {
        StallRisk::None => {}
        StallRisk::Warning => warnings.push(warning(
            WarningKind::StallApproaching,
            format!(
                "Approaching the estimated stall angle of {:.1}°.",
                assessment.stall_angle_deg
            ),
        )),
        StallRisk::Critical if assessment.separation.state != SeparationState::Stalled => {
            warnings.push(warning(
                WarningKind::StallApproaching,
                format!(
                    "At or beyond the estimated stall angle of {:.1}°.",
                    assessment.stall_angle_deg
                ),
            ))
        }
        StallRisk::Critical => {}
    }

    if assessment.stability == Stability::Unstable {
        warnings.push(warning(
            WarningKind::Unstable,
            "High angle of attack: small disturbances will grow rather than damp out.".into(),
        ));
    }

    if assessment.lift_coefficient.confidence == Confidence::Low {
        warnings.push(warning(
            WarningKind::LowConfidence,
            format!(
                "Results are rough estimates (lift coefficient between {:.2} and {:.2}).",
                assessment.lift_coefficient.min, assessment.lift_coefficient.max
            ),
        ));
    }

    warnings
}

pub fn explain(assessment: &Assessment<'_>) -> Explanation {
    let flow = assessment.flow;
    let regime = format!(
        "Reynolds number {:.2e}: {}.",
        flow.reynolds_number,
        flow.regime.description()
    );

    let cl = assessment.lift_coefficient.nominal;
    let lift = if cl.abs() < 0.05 {
        "Almost no lift: the section meets the flow nearly edge-on with no camber to turn it.".to_string()
    } else if cl > 0.0 {
        format!("The section turns the flow downward, producing upward lift (cl ≈ {cl:.2}).")
    } else {
        format!("Negative angle of attack turns the flow upward, producing downforce (cl ≈ {cl:.2}).")
    };

    let breakdown = assessment.drag_breakdown;
    let parts = [
        ("profile", breakdown.profile),
        ("induced", breakdown.induced),
        ("pressure", breakdown.pressure),
        ("skin friction", breakdown.skin_friction),
    ];
    let (dominant, _) = parts
        .iter()
        .copied()
        .fold(("profile", f64::NEG_INFINITY), |best, part| {
            if part.1 > best.1 { part } else { best }
        });
    let drag = if breakdown.post_stall_multiplier > 1.0 {
        format!(
            "Drag (cd ≈ {:.3}) is dominated by {dominant} drag and amplified {:.1}× by stall.",
            assessment.drag_coefficient.nominal, breakdown.post_stall_multiplier
        )
    } else {
        format!(
            "Drag (cd ≈ {:.3}) is dominated by {dominant} drag.",
            assessment.drag_coefficient.nominal
        )
    };

    let separation = match assessment.separation.state {
        SeparationState::Attached => "The boundary layer stays attached over the whole surface.",
        SeparationState::Marginal => "The boundary layer is close to separating near the trailing edge.",
        SeparationState::Separated => "The boundary layer has separated over part of the upper surface.",
        SeparationState::Stalled => "The flow has broken away from most of the upper surface.",
    }
    .to_string();

    Explanation {
        regime,
        lift,
        drag,
        separation,
    }
}

fn warning(kind: WarningKind, message: String) -> Warning {
    Warning { kind, message }
}

/// Regime reported to callers once separation has been assessed
pub fn reported_regime(flow: &FlowClassification, separation: &SeparationAssessment) -> FlowRegime {
    if separation.state >= SeparationState::Separated {
        FlowRegime::SeparationLikely
    } else {
        flow.regime
    }
}
