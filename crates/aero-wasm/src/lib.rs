//! WASM bindings for the aerodynamics visualizer core.
//!
//! # Architecture
//!
//! The coefficient engine is stateless, so [`aero_simulate`] takes typed
//! inputs and returns a typed result (TypeScript declarations come from
//! `tsify`). Particle simulators are stateful and live in thread-local
//! storage (WASM is single-threaded); JavaScript holds an opaque id.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! const geometry = { shape: "symmetric", chord: 1.0, thickness: 0.12, camber: 0.0,
//!                    angleOfAttack: 5.0, referenceArea: 0.5 };
//! const results = aero_simulate(geometry, { velocity: 20.0, density: 1.225 });
//!
//! const outline = airfoil_profile(geometry, 60);          // Float64Array, x/y pairs
//! const flowId = flow_create(outline, 2000, 20.0, 5.0);
//!
//! function frame(dt) {
//!   flow_update(flowId, dt);
//!   const positions = flow_positions(flowId);              // Float32Array, x/y/z triples
//!   // ... upload to the renderer
//! }
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

mod coefficients;
mod error;
mod particles;

#[cfg(test)]
mod coefficients_test;
#[cfg(test)]
mod particles_test;

pub use coefficients::{aero_simulate, aero_simulate_with_config, airfoil_profile};
pub use error::BindingError;
pub use particles::{
    FlowSnapshot, flow_create, flow_create_with_config, flow_delete, flow_particle_count,
    flow_positions, flow_snapshot, flow_update, flow_velocities,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, BindingError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| BindingError::Serialization(e.to_string()))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, BindingError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| BindingError::Serialization(e.to_string()))
}
