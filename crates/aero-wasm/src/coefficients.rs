//! Bindings for the stateless coefficient engine.

use wasm_bindgen::prelude::*;

use aero::{AerodynamicResults, EngineConfig, FlowConditions, GeometryDefinition, airfoil_polygon};

/// Evaluate an airfoil with the default (full) engine configuration.
///
/// Never throws for out-of-range numbers: they are clamped, and the clamped
/// values are reported back in `results.inputs`.
///
/// # Arguments
/// * `geometry` - Shape, chord (m), thickness and camber ratios, angle of attack (deg), reference area (m²)
/// * `flow` - Velocity (m/s), density (kg/m³), optional dynamic viscosity (Pa·s)
#[wasm_bindgen]
pub fn aero_simulate(geometry: GeometryDefinition, flow: FlowConditions) -> AerodynamicResults {
    aero::simulate(&geometry, &flow)
}

/// Evaluate an airfoil with an explicit engine configuration.
///
/// # Arguments
/// * `geometry` - Section and planform
/// * `flow` - Freestream conditions
/// * `config` - `{ fidelity: "educational" | "full", stallModel: {...} }`
#[wasm_bindgen]
pub fn aero_simulate_with_config(
    geometry: GeometryDefinition,
    flow: FlowConditions,
    config: EngineConfig,
) -> AerodynamicResults {
    aero::simulate_with_config(&geometry, &flow, &config)
}

/// NACA 4-digit outline for a geometry as flat `[x0, y0, x1, y1, ...]`.
///
/// Coordinates are in chord units centred on mid-chord, ready to pass to
/// `flow_create`.
#[wasm_bindgen]
pub fn airfoil_profile(geometry: GeometryDefinition, points_per_surface: u32) -> Vec<f64> {
    flatten_profile(&geometry, points_per_surface as usize)
}

pub(crate) fn flatten_profile(geometry: &GeometryDefinition, points_per_surface: usize) -> Vec<f64> {
    airfoil_polygon(geometry, points_per_surface)
        .iter()
        .flat_map(|p| [p.x, p.y])
        .collect()
}
