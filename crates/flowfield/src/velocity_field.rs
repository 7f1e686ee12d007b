//! Velocity fields that carry the particles.
//!
//! The airfoil field is purely cosmetic: a rotated freestream, a near-body
//! circulation that bends streamlines the way lift does, and a small
//! sinusoidal perturbation so the flow does not look laminar-perfect. None of
//! it is solved from flow equations.

use nalgebra::{Point3, Vector3};
use units::{Angle, Velocity};

use crate::config::FieldConfig;

/// Phase offsets keep the three perturbation axes out of step
const PERTURBATION_PHASES: [f64; 3] = [0.0, 1.7, 3.1];

/// Closer to the origin than this, the circulation direction is undefined
const MIN_CIRCULATION_RADIUS: f64 = 1e-6;

/// A source of particle velocity
///
/// Implementations are pure functions of position.
pub trait VelocityField: Send + Sync {
    /// Velocity at `position` in scene units per second
    fn sample(&self, position: &Point3<f64>) -> Vector3<f64>;
}

/// Constant velocity everywhere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformFlow {
    pub velocity: Vector3<f64>,
}

impl UniformFlow {
    pub fn new(velocity: Vector3<f64>) -> Self {
        Self { velocity }
    }
}

impl VelocityField for UniformFlow {
    fn sample(&self, _position: &Point3<f64>) -> Vector3<f64> {
        self.velocity
    }
}

/// Freestream + circulation + perturbation around a section at the origin
///
/// # Examples
///
/// ```
/// use flowfield::{AirfoilFlowField, FieldConfig, VelocityField};
/// use nalgebra::Point3;
/// use units::Angle;
///
/// let field = AirfoilFlowField::new(1.0, Angle::from_degrees(0.0), FieldConfig::default());
///
/// // Far upstream only the freestream and perturbation remain
/// let v = field.sample(&Point3::new(-2.4, 0.0, 0.0));
/// assert!(v.x > 0.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirfoilFlowField {
    /// Freestream speed in scene units per second
    pub speed: f64,
    pub angle_of_attack: Angle,
    pub config: FieldConfig,
}

impl AirfoilFlowField {
    pub fn new(speed: f64, angle_of_attack: Angle, config: FieldConfig) -> Self {
        Self {
            speed,
            angle_of_attack,
            config,
        }
    }

    /// Field for a physical flow velocity scaled into scene units
    pub fn from_flow(velocity: Velocity, angle_of_attack: Angle, velocity_scale: f64, config: FieldConfig) -> Self {
        Self::new(velocity.to_meters_per_sec() * velocity_scale, angle_of_attack, config)
    }

    pub fn freestream(&self) -> Vector3<f64> {
        let alpha = self.angle_of_attack;
        Vector3::new(alpha.cos(), alpha.sin(), 0.0) * self.speed
    }

    /// Tangential swirl around the origin, fading linearly to zero at the
    /// circulation radius
    pub fn circulation(&self, position: &Point3<f64>) -> Vector3<f64> {
        let radius = self.config.circulation_radius;
        let r = position.coords.xy().magnitude();
        if r < MIN_CIRCULATION_RADIUS || r >= radius {
            return Vector3::zeros();
        }

        let tangent = Vector3::new(position.y, -position.x, 0.0) / r;
        let strength = self.speed
            * self.angle_of_attack.sin()
            * self.config.circulation_gain
            * (1.0 - r / radius);
        tangent * strength
    }

    pub fn perturbation(&self, position: &Point3<f64>) -> Vector3<f64> {
        let f = self.config.perturbation_frequency;
        let [px, py, pz] = PERTURBATION_PHASES;
        Vector3::new(
            (f * position.y + px).sin(),
            (f * position.z + py).sin(),
            (f * position.x + pz).sin(),
        ) * (self.config.perturbation_amplitude * self.speed)
    }
}

impl VelocityField for AirfoilFlowField {
    fn sample(&self, position: &Point3<f64>) -> Vector3<f64> {
        self.freestream() + self.circulation(position) + self.perturbation(position)
    }
}
