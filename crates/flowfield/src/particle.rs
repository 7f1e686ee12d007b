//! Tracer particles advected by the velocity field.

use nalgebra::{Point3, Vector3};

/// A massless tracer carried by the velocity field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point3<f64>,  // scene units
    pub velocity: Vector3<f64>, // scene units/s
    pub age: f64,               // seconds since (re)spawn
    pub active: bool,           // inactive particles are frozen in place
}

impl Particle {
    pub fn new(position: Point3<f64>, age: f64) -> Self {
        Self {
            position,
            velocity: Vector3::zeros(),
            age,
            active: true,
        }
    }

    /// Reinitialize at `position` with zero velocity and zero age
    pub fn respawn(&mut self, position: Point3<f64>) {
        *self = Self::new(position, 0.0);
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}
