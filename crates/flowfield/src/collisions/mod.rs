//! Collision geometry and swept detection
//!
//! The 2D outline becomes a set of spheres ([`objects`]); particle moves are
//! tested against them at several points along the path ([`detection`]).

pub mod detection;
pub mod objects;

#[cfg(test)]
mod detection_test;
#[cfg(test)]
mod objects_test;

pub use detection::{CollisionDetector, CollisionHit, DirectDetector, sweep};
pub use objects::{CollisionObject, build_collision_objects};
