use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Standard gravity used for kgf conversions
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Force(f64);

impl Force {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_newtons(value: f64) -> Self {
        Self(value)
    }

    pub fn to_newtons(&self) -> f64 {
        self.0
    }

    /// Weight-equivalent mass, handy for explaining forces to non-engineers
    pub fn to_kilogram_force(&self) -> f64 {
        self.0 / STANDARD_GRAVITY
    }
}

impl Mul<f64> for Force {
    type Output = Force;

    fn mul(self, rhs: f64) -> Force {
        Force(self.0 * rhs)
    }
}
