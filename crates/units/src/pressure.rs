use serde::{Deserialize, Serialize};
use std::ops::Mul;

use crate::area::Area;
use crate::density::Density;
use crate::force::Force;
use crate::velocity::Velocity;

/// Pressure in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pressure(f64);

impl Pressure {
    pub fn from_pascals(value: f64) -> Self {
        Self(value)
    }

    /// Dynamic pressure q = ½ρV²
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::{Density, Pressure, Velocity};
    ///
    /// let q = Pressure::dynamic(Density::sea_level_air(), Velocity::from_meters_per_sec(20.0));
    /// assert!((q.to_pascals() - 245.0).abs() < 1e-9);
    /// ```
    pub fn dynamic(density: Density, velocity: Velocity) -> Self {
        let v = velocity.to_meters_per_sec();
        Self(0.5 * density.to_kg_per_m3() * v * v)
    }

    pub fn to_pascals(&self) -> f64 {
        self.0
    }

    pub fn to_kilopascals(&self) -> f64 {
        self.0 / 1000.0
    }
}

/// Pressure acting over an area
impl Mul<Area> for Pressure {
    type Output = Force;

    fn mul(self, rhs: Area) -> Force {
        Force::from_newtons(self.0 * rhs.to_square_meters())
    }
}
