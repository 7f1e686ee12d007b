//! Bindings for the particle flow simulator.
//!
//! Simulators are kept in a thread-local registry keyed by an opaque id.

use std::cell::RefCell;
use std::collections::HashMap;

use log::debug;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use flowfield::{AirfoilPolygon, ParticleSimulator, SimulatorConfig};
use units::{Angle, Velocity};

use crate::error::BindingError;
use crate::{from_js, to_js};

thread_local! {
    static SIMULATORS: RefCell<HashMap<u32, ParticleSimulator>> = RefCell::new(HashMap::new());
    static NEXT_SIM_ID: RefCell<u32> = const { RefCell::new(0) };
}

/// Summary of a simulator for debugging overlays
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSnapshot {
    /// Simulated time in seconds
    pub time: f64,
    pub step_count: u64,
    pub particle_count: usize,
    pub collision_objects: usize,
    /// Unpaid time in the fixed-step accumulator, seconds
    pub residual: f64,
}

impl From<&ParticleSimulator> for FlowSnapshot {
    fn from(sim: &ParticleSimulator) -> Self {
        Self {
            time: sim.time(),
            step_count: sim.step_count(),
            particle_count: sim.particle_count(),
            collision_objects: sim.collision_objects().len(),
            residual: sim.residual(),
        }
    }
}

pub(crate) fn register(sim: ParticleSimulator) -> u32 {
    let id = NEXT_SIM_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    SIMULATORS.with(|sims| {
        sims.borrow_mut().insert(id, sim);
    });

    id
}

pub(crate) fn with_simulator<R>(
    sim_id: u32,
    f: impl FnOnce(&mut ParticleSimulator) -> R,
) -> Result<R, BindingError> {
    SIMULATORS.with(|sims| {
        let mut sims = sims.borrow_mut();
        let sim = sims
            .get_mut(&sim_id)
            .ok_or(BindingError::SimulatorNotFound(sim_id))?;
        Ok(f(sim))
    })
}

pub(crate) fn unregister(sim_id: u32) -> bool {
    SIMULATORS.with(|sims| sims.borrow_mut().remove(&sim_id).is_some())
}

pub(crate) fn create(
    polygon: &[f64],
    particle_count: u32,
    flow_velocity: f64,
    angle_of_attack: f64,
    config: SimulatorConfig,
) -> Result<u32, BindingError> {
    let polygon = AirfoilPolygon::from_flat(polygon)?;
    let sim = ParticleSimulator::with_config(
        &polygon,
        particle_count as usize,
        Velocity::from_meters_per_sec(flow_velocity),
        Angle::from_degrees(angle_of_attack),
        config,
    );
    let id = register(sim);
    debug!("registered flow simulator {id}");
    Ok(id)
}

/// Create a particle simulator around a polygon.
///
/// Returns a simulator ID for use with the other `flow_*` functions.
///
/// # Arguments
/// * `polygon` - Flat `[x0, y0, x1, y1, ...]` outline in scene units
/// * `particle_count` - Number of particles
/// * `flow_velocity` - Freestream velocity in m/s
/// * `angle_of_attack` - Angle of attack in degrees
#[wasm_bindgen]
pub fn flow_create(
    polygon: &[f64],
    particle_count: u32,
    flow_velocity: f64,
    angle_of_attack: f64,
) -> Result<u32, JsError> {
    Ok(create(
        polygon,
        particle_count,
        flow_velocity,
        angle_of_attack,
        SimulatorConfig::default(),
    )?)
}

/// Create a particle simulator with a custom configuration.
///
/// Missing config fields take their defaults.
#[wasm_bindgen]
pub fn flow_create_with_config(
    polygon: &[f64],
    particle_count: u32,
    flow_velocity: f64,
    angle_of_attack: f64,
    config: JsValue,
) -> Result<u32, JsError> {
    let config: SimulatorConfig = from_js(config)?;
    Ok(create(
        polygon,
        particle_count,
        flow_velocity,
        angle_of_attack,
        config,
    )?)
}

/// Advance by a frame delta in seconds. Returns the number of fixed steps run.
#[wasm_bindgen]
pub fn flow_update(sim_id: u32, delta_seconds: f64) -> Result<u32, JsError> {
    Ok(with_simulator(sim_id, |sim| sim.update(delta_seconds))?)
}

/// Particle positions as a `Float32Array` of x/y/z triples
#[wasm_bindgen]
pub fn flow_positions(sim_id: u32) -> Result<Vec<f32>, JsError> {
    Ok(with_simulator(sim_id, |sim| sim.positions())?)
}

/// Particle velocities as a `Float32Array` of x/y/z triples
#[wasm_bindgen]
pub fn flow_velocities(sim_id: u32) -> Result<Vec<f32>, JsError> {
    Ok(with_simulator(sim_id, |sim| sim.velocities())?)
}

#[wasm_bindgen]
pub fn flow_particle_count(sim_id: u32) -> Result<u32, JsError> {
    Ok(with_simulator(sim_id, |sim| sim.particle_count() as u32)?)
}

/// Time, step count and geometry size of a simulator
#[wasm_bindgen]
pub fn flow_snapshot(sim_id: u32) -> Result<JsValue, JsError> {
    let snapshot = with_simulator(sim_id, |sim| FlowSnapshot::from(&*sim))?;
    Ok(to_js(&snapshot)?)
}

/// Delete a simulator to free memory.
///
/// Returns false if the id was unknown.
#[wasm_bindgen]
pub fn flow_delete(sim_id: u32) -> bool {
    unregister(sim_id)
}
