use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A flow speed.
///
/// Base unit is meters per second, the unit every aerodynamic formula in the
/// workspace expects.
///
/// # Examples
///
/// ```rust
/// use units::Velocity;
///
/// let gust = Velocity::from_meters_per_sec(90.0).clamp(5.0, 60.0);
/// assert_eq!(gust.to_meters_per_sec(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    /// Clamp into `[min, max]` m/s
    pub fn clamp(self, min: f64, max: f64) -> Self {
        Self(self.0.clamp(min, max))
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
