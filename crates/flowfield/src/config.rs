//! Simulator tuning parameters.
//!
//! Every field has a default, so partial configurations deserialize cleanly.

use serde::{Deserialize, Serialize};

use crate::domain::FlowDomain;

/// Slowest freestream the simulator accepts, m/s
pub const MIN_FLOW_VELOCITY: f64 = 5.0;
/// Fastest freestream the simulator accepts, m/s. Above this a move can
/// outrun the sweep spacing and cross the section between samples.
pub const MAX_FLOW_VELOCITY: f64 = 60.0;
/// Used when the requested velocity is not finite, m/s
pub const DEFAULT_FLOW_VELOCITY: f64 = 20.0;
pub const MIN_ANGLE_OF_ATTACK_DEG: f64 = -15.0;
pub const MAX_ANGLE_OF_ATTACK_DEG: f64 = 20.0;

/// How the airfoil outline is turned into collision objects and swept against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollisionConfig {
    /// Target distance between collision objects along each polygon edge
    pub edge_spacing: f64,
    /// Radius of every collision sphere
    pub object_radius: f64,
    /// Copies of the outline spread across the domain depth
    pub z_layers: usize,
    /// Points tested along each particle move
    pub sweep_samples: usize,
    /// Distance a colliding particle is pushed off the surface
    pub push_out: f64,
    /// Edge length of a spatial hash cell
    pub hash_cell_size: f64,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            edge_spacing: 0.04,
            object_radius: 0.06,
            z_layers: 11,
            sweep_samples: 5,
            push_out: 0.02,
            hash_cell_size: 0.25,
        }
    }
}

/// Shape of the cosmetic velocity field around the section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    /// Circulation is only applied within this xy distance of the origin
    pub circulation_radius: f64,
    /// Circulation strength relative to `speed · sin(α)`
    pub circulation_gain: f64,
    /// Perturbation amplitude as a fraction of the freestream speed
    pub perturbation_amplitude: f64,
    /// Spatial frequency of the perturbation, radians per scene unit
    pub perturbation_frequency: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            circulation_radius: 1.5,
            circulation_gain: 0.5,
            perturbation_amplitude: 0.05,
            perturbation_frequency: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulatorConfig {
    /// Seed for respawn and initial placement jitter
    pub seed: u64,
    /// Scene units per second for each m/s of flow velocity
    pub velocity_scale: f64,
    pub domain: FlowDomain,
    pub collision: CollisionConfig,
    pub field: FieldConfig,
    /// Particles older than this (seconds) are respawned
    pub max_age: f64,
    /// Fixed integration step, seconds
    pub fixed_dt: f64,
    /// Frame deltas are clamped to this before accumulating, seconds
    pub max_frame_delta: f64,
    /// Catch-up cap per `update` call
    pub max_steps_per_update: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            velocity_scale: 0.05,
            domain: FlowDomain::default(),
            collision: CollisionConfig::default(),
            field: FieldConfig::default(),
            max_age: 12.0,
            fixed_dt: 1.0 / 60.0,
            max_frame_delta: 0.1,
            max_steps_per_update: 5,
        }
    }
}

impl SimulatorConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
