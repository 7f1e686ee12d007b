use serde::{Deserialize, Serialize};

/// Reference (planform) area in m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Area(f64);

impl Area {
    pub fn from_square_meters(value: f64) -> Self {
        Self(value)
    }

    pub fn from_square_cm(value: f64) -> Self {
        Self(value / 10_000.0)
    }

    pub fn to_square_meters(&self) -> f64 {
        self.0
    }
}
