use serde::{Deserialize, Serialize};

/// ISA sea-level air density in kg/m³
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225;

/// Fluid mass density in kg/m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(f64);

impl Density {
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value)
    }

    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value * 1000.0)
    }

    /// Air at sea level, 15°C
    pub fn sea_level_air() -> Self {
        Self(SEA_LEVEL_AIR_DENSITY)
    }

    pub fn to_kg_per_m3(&self) -> f64 {
        self.0
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0 / 1000.0
    }
}
