use serde::{Deserialize, Serialize};
use std::ops::Mul;

use crate::area::Area;

pub const FOOT_TO_M: f64 = 0.3048;

/// A length in meters (chord, span, particle domain extents).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: m

impl Length {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    pub fn from_cm(value: f64) -> Self {
        Self(value / 100.0)
    }

    pub fn from_mm(value: f64) -> Self {
        Self(value / 1000.0)
    }

    pub fn from_feet(value: f64) -> Self {
        Self(value * FOOT_TO_M)
    }

    pub fn to_meters(&self) -> f64 {
        self.0
    }

    pub fn to_cm(&self) -> f64 {
        self.0 * 100.0
    }

    pub fn to_feet(&self) -> f64 {
        self.0 / FOOT_TO_M
    }
}

/// Chord × span gives a planform area
impl Mul for Length {
    type Output = Area;

    fn mul(self, rhs: Length) -> Area {
        Area::from_square_meters(self.0 * rhs.0)
    }
}
