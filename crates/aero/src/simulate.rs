//! Top-level entry point of the coefficient engine.

use log::debug;

use crate::coefficients::{drag_breakdown, lift_coefficient};
use crate::config::{EngineConfig, Fidelity};
use crate::explanation::{Assessment, collect_warnings, explain, reported_regime};
use crate::geometry::{FlowConditions, GeometryDefinition};
use crate::results::{AerodynamicResults, Diagnostics, Inputs};
use crate::reynolds::{classify, reynolds_number};
use crate::separation::detect_separation_with_model;
use crate::stability::{assess_stability, assess_stall_risk};
use crate::uncertainty::{efficiency_bounds, generate_bounds};

/// Evaluate geometry and flow with the default (full) engine configuration.
///
/// Never fails: inputs are clamped first, so the same call with
/// `angle_of_attack = 999.0` and `angle_of_attack = 20.0` gives identical
/// results.
pub fn simulate(geometry: &GeometryDefinition, flow: &FlowConditions) -> AerodynamicResults {
    simulate_with_config(geometry, flow, &EngineConfig::default())
}

/// Evaluate geometry and flow.
///
/// # Arguments
///
/// * `geometry` - Section and planform; clamped before use
/// * `flow` - Freestream conditions; clamped before use
/// * `config` - Fidelity profile and stall-angle model
///
/// # Examples
///
/// ```
/// use aero::{simulate_with_config, EngineConfig, FlowConditions, GeometryDefinition};
///
/// let results = simulate_with_config(
///     &GeometryDefinition::default(),
///     &FlowConditions::default(),
///     &EngineConfig::educational(),
/// );
/// assert!(results.lift_coefficient.min <= results.lift_coefficient.max);
/// ```
pub fn simulate_with_config(
    geometry: &GeometryDefinition,
    flow: &FlowConditions,
    config: &EngineConfig,
) -> AerodynamicResults {
    let geometry = geometry.clamped();
    let flow = flow.clamped();

    let re = reynolds_number(
        flow.fluid_density(),
        flow.speed(),
        geometry.chord_length(),
        flow.dynamic_viscosity(),
    );
    let mut classification = classify(re);

    let stall_angle = config.stall_model.stall_angle(geometry.thickness);
    let raw_cl = lift_coefficient(&geometry, re, stall_angle);
    let breakdown = drag_breakdown(&geometry, raw_cl, re, stall_angle);
    let raw_cd = breakdown.total();

    let separation = detect_separation_with_model(&geometry, re, &config.stall_model);
    let (cl, cd) = separation.apply(raw_cl, raw_cd);

    let separation_confidence = match config.fidelity {
        Fidelity::Full => separation.confidence,
        Fidelity::Educational => 1.0,
    };
    let cl_bounds = generate_bounds(cl, classification.confidence, separation_confidence);
    let cd_bounds = generate_bounds(cd, classification.confidence, separation_confidence);

    let dynamic_pressure = flow.dynamic_pressure();
    let force_scale = (dynamic_pressure * geometry.area()).to_newtons();
    let lift_force = cl_bounds.scaled(force_scale);
    let drag_force = cd_bounds.scaled(force_scale);
    let efficiency = efficiency_bounds(&cl_bounds, &cd_bounds);

    let stability = assess_stability(geometry.angle());
    let stall_risk = assess_stall_risk(geometry.angle(), stall_angle);

    classification.regime = reported_regime(&classification, &separation);

    let assessment = Assessment {
        angle_of_attack: geometry.angle_of_attack,
        flow: &classification,
        separation: &separation,
        stability,
        stall_risk,
        stall_angle_deg: stall_angle,
        lift_coefficient: &cl_bounds,
        drag_coefficient: &cd_bounds,
        drag_breakdown: &breakdown,
    };
    let warnings = collect_warnings(&assessment);
    let explanation = explain(&assessment);

    debug!(
        "simulate: alpha={:.2} Re={:.3e} regime={:?} cl={:.4} cd={:.4} separation={:?} warnings={}",
        geometry.angle_of_attack,
        re,
        classification.regime,
        cl,
        cd,
        separation.state,
        warnings.len()
    );

    AerodynamicResults {
        inputs: Inputs { geometry, flow },
        flow: classification,
        dynamic_pressure: dynamic_pressure.to_pascals(),
        stall_angle_deg: stall_angle,
        lift_coefficient: cl_bounds,
        drag_coefficient: cd_bounds,
        lift_force,
        drag_force,
        efficiency,
        separation,
        stability,
        stall_risk,
        diagnostics: Diagnostics {
            raw_lift_coefficient: raw_cl,
            raw_drag_coefficient: raw_cd,
            drag_breakdown: breakdown,
        },
        warnings,
        explanation,
    }
}
