use serde::{Deserialize, Serialize};

/// Dynamic viscosity of air at 15°C in Pa·s
pub const AIR_VISCOSITY_15C: f64 = 1.81e-5;

/// Dynamic viscosity (μ) in Pa·s
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Viscosity(f64);

impl Viscosity {
    pub fn from_pascal_seconds(value: f64) -> Self {
        Self(value)
    }

    pub fn air_15c() -> Self {
        Self(AIR_VISCOSITY_15C)
    }

    pub fn to_pascal_seconds(&self) -> f64 {
        self.0
    }
}

impl Default for Viscosity {
    fn default() -> Self {
        Self::air_15c()
    }
}
