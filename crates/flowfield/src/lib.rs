//! Particle flow around a 2D airfoil section.
//!
//! A [`ParticleSimulator`] owns a population of tracer particles and advances
//! them through an analytic velocity field at a fixed timestep. The airfoil
//! outline is turned into a cloud of spherical collision objects, indexed by a
//! uniform [`SpatialHash`], and every particle move is swept against it so
//! fast particles cannot tunnel through thin sections. Particles that hit the
//! surface slide along it; particles that leave the domain or grow too old are
//! respawned at the inlet.
//!
//! # Example
//!
//! ```rust
//! use flowfield::{AirfoilPolygon, ParticleSimulator};
//! use units::{Angle, Velocity};
//!
//! // Diamond-shaped section, one chord wide
//! let polygon = AirfoilPolygon::from_flat(&[-0.5, 0.0, 0.0, 0.06, 0.5, 0.0, 0.0, -0.06]).unwrap();
//!
//! let mut sim = ParticleSimulator::new(
//!     &polygon,
//!     500,
//!     Velocity::from_meters_per_sec(20.0),
//!     Angle::from_degrees(5.0),
//! );
//!
//! // One 60 Hz frame
//! sim.update(1.0 / 60.0);
//!
//! assert_eq!(sim.positions().len(), 500 * 3);
//! ```

pub mod collisions;
pub mod config;
pub mod domain;
pub mod particle;
pub mod polygon;
pub mod simulator;
pub mod spatial_hash;
pub mod timestep;
pub mod velocity_field;

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod velocity_field_test;

pub use collisions::{CollisionDetector, CollisionHit, CollisionObject, DirectDetector};
pub use config::{CollisionConfig, FieldConfig, SimulatorConfig};
pub use domain::FlowDomain;
pub use particle::Particle;
pub use polygon::{AirfoilPolygon, PolygonError};
pub use simulator::{ParticleSimulator, StepStats};
pub use spatial_hash::{CellKey, SpatialHash};
pub use timestep::FixedTimestep;
pub use velocity_field::{AirfoilFlowField, UniformFlow, VelocityField};
