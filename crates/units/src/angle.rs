use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A plane angle.
///
/// Stored in degrees because every user-facing input (angle of attack, stall
/// angle) is expressed in degrees; trigonometry goes through [`Angle::to_radians`].
///
/// # Examples
///
/// ```rust
/// use units::Angle;
///
/// let alpha = Angle::from_degrees(30.0);
/// assert!((alpha.sin() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64); // Base unit: degrees

impl Angle {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_degrees(value: f64) -> Self {
        Self(value)
    }

    pub fn from_radians(value: f64) -> Self {
        Self(value.to_degrees())
    }

    pub fn to_degrees(&self) -> f64 {
        self.0
    }

    pub fn to_radians(&self) -> f64 {
        self.0.to_radians()
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn sin(&self) -> f64 {
        self.to_radians().sin()
    }

    pub fn cos(&self) -> f64 {
        self.to_radians().cos()
    }

    /// Clamp into `[min_deg, max_deg]`
    pub fn clamp(self, min_deg: f64, max_deg: f64) -> Self {
        Self(self.0.clamp(min_deg, max_deg))
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle(self.0 * rhs)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}
