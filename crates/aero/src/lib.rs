//! Reduced-order aerodynamic coefficient engine.
//!
//! Everything in this crate is a pure function of its inputs: geometry and
//! flow conditions go in, coefficients, forces, a flow-regime classification,
//! stall/stability assessments and uncertainty bounds come out. There is no
//! shared state, so every function is safe to call from any context.
//!
//! # Pipeline
//!
//! 1. Inputs are clamped into a safe educational range ([`geometry`])
//! 2. Reynolds number is classified into a regime ([`reynolds`])
//! 3. Raw lift and drag coefficients are computed ([`coefficients`])
//! 4. A separation state corrects the raw coefficients ([`separation`])
//! 5. Uncertainty bounds are composed and scaled into forces ([`uncertainty`])
//! 6. Stability, stall risk, warnings and explanations are attached ([`stability`], [`explanation`])
//!
//! [`simulate`] runs the whole pipeline.
//!
//! # Example
//!
//! ```rust
//! use aero::{simulate, FlowConditions, GeometryDefinition, ShapeClass};
//!
//! let geometry = GeometryDefinition {
//!     shape: ShapeClass::Symmetric,
//!     chord: 1.0,
//!     thickness: 0.12,
//!     camber: 0.0,
//!     angle_of_attack: 5.0,
//!     reference_area: 0.5,
//! };
//! let flow = FlowConditions::new(20.0, 1.225);
//!
//! let results = simulate(&geometry, &flow);
//! assert!(results.lift_coefficient.nominal > 0.0);
//! ```

pub mod coefficients;
pub mod config;
pub mod explanation;
pub mod geometry;
pub mod profile;
pub mod results;
pub mod reynolds;
pub mod separation;
pub mod simulate;
pub mod stability;
pub mod uncertainty;


pub use coefficients::{DragBreakdown, calculate_drag, calculate_lift};
pub use config::{EngineConfig, Fidelity, StallAngleModel};
pub use geometry::{FlowConditions, GeometryDefinition, ShapeClass};
pub use profile::airfoil_polygon;
pub use results::{AerodynamicResults, Diagnostics, Explanation, Inputs, Warning, WarningKind};
pub use reynolds::{FlowClassification, FlowRegime, classify, reynolds_number};
pub use separation::{SeparationAssessment, SeparationState, detect_separation};
pub use simulate::{simulate, simulate_with_config};
pub use stability::{Stability, StallRisk, assess_stability, assess_stall_risk};
pub use uncertainty::{Confidence, UncertaintyBounds, efficiency_bounds, generate_bounds};
