//! Airfoil geometry and freestream conditions.
//!
//! Both input types are plain serializable structs supplied by the UI layer.
//! Before any calculation they are normalized with [`GeometryDefinition::clamped`]
//! and [`FlowConditions::clamped`]: out-of-range values are silently pulled back
//! into a safe educational range instead of being rejected. Callers never see an
//! error, only clamped behaviour.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::{Angle, Area, Density, Length, Pressure, Velocity, Viscosity};

/// Thickness ratio range accepted by the model
pub const MIN_THICKNESS: f64 = 0.05;
pub const MAX_THICKNESS: f64 = 0.25;

/// Angle of attack range in degrees
pub const MIN_ANGLE_DEG: f64 = -15.0;
pub const MAX_ANGLE_DEG: f64 = 20.0;

/// Freestream velocity range in m/s
pub const MIN_VELOCITY: f64 = 5.0;
pub const MAX_VELOCITY: f64 = 60.0;

/// NACA 4-digit sections top out at 9.5% camber
pub const MAX_CAMBER: f64 = 0.1;

pub const MIN_CHORD: f64 = 0.01;
pub const MIN_REFERENCE_AREA: f64 = 1e-4;
pub const MIN_DENSITY: f64 = 0.01;
pub const MAX_DENSITY: f64 = 2000.0;
pub const MIN_VISCOSITY: f64 = 1e-7;
pub const MAX_VISCOSITY: f64 = 1.0;

/// Broad family of the cross-section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum ShapeClass {
    /// Symmetric section, camber is ignored
    Symmetric,
    /// Cambered section, camber is used as given
    Cambered,
    /// Thin flat plate: no camber, minimum thickness
    FlatPlate,
}

/// Cross-section and planform description of the lifting surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct GeometryDefinition {
    pub shape: ShapeClass,
    /// Chord length in meters
    pub chord: f64,
    /// Maximum thickness as a fraction of chord
    pub thickness: f64,
    /// Maximum camber as a fraction of chord
    pub camber: f64,
    /// Angle of attack in degrees
    pub angle_of_attack: f64,
    /// Reference (planform) area in m²
    pub reference_area: f64,
}

impl Default for GeometryDefinition {
    /// NACA 0012 at a modest angle of attack
    fn default() -> Self {
        Self {
            shape: ShapeClass::Symmetric,
            chord: 1.0,
            thickness: 0.12,
            camber: 0.0,
            angle_of_attack: 5.0,
            reference_area: 0.5,
        }
    }
}

impl GeometryDefinition {
    /// Returns a copy with every field pulled into the model's valid range.
    ///
    /// Non-finite values fall back to the default geometry's value first.
    /// The shape class then overrides camber (symmetric and flat plate) and
    /// thickness (flat plate).
    ///
    /// # Examples
    ///
    /// ```
    /// use aero::GeometryDefinition;
    ///
    /// let wild = GeometryDefinition {
    ///     angle_of_attack: 999.0,
    ///     thickness: 0.9,
    ///     ..GeometryDefinition::default()
    /// };
    /// let safe = wild.clamped();
    /// assert_eq!(safe.angle_of_attack, 20.0);
    /// assert_eq!(safe.thickness, 0.25);
    /// ```
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();

        let thickness = match self.shape {
            ShapeClass::FlatPlate => MIN_THICKNESS,
            _ => finite_or(self.thickness, defaults.thickness).clamp(MIN_THICKNESS, MAX_THICKNESS),
        };
        let camber = match self.shape {
            ShapeClass::Cambered => finite_or(self.camber, 0.0).clamp(0.0, MAX_CAMBER),
            ShapeClass::Symmetric | ShapeClass::FlatPlate => 0.0,
        };

        Self {
            shape: self.shape,
            chord: finite_or(self.chord, defaults.chord).max(MIN_CHORD),
            thickness,
            camber,
            angle_of_attack: finite_or(self.angle_of_attack, defaults.angle_of_attack)
                .clamp(MIN_ANGLE_DEG, MAX_ANGLE_DEG),
            reference_area: finite_or(self.reference_area, defaults.reference_area)
                .max(MIN_REFERENCE_AREA),
        }
    }

    pub fn angle(&self) -> Angle {
        Angle::from_degrees(self.angle_of_attack)
    }

    pub fn chord_length(&self) -> Length {
        Length::from_meters(self.chord)
    }

    pub fn area(&self) -> Area {
        Area::from_square_meters(self.reference_area)
    }
}

/// Freestream conditions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct FlowConditions {
    /// Freestream velocity in m/s
    pub velocity: f64,
    /// Fluid density in kg/m³
    pub density: f64,
    /// Dynamic viscosity in Pa·s, air at 15°C when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viscosity: Option<f64>,
}

impl Default for FlowConditions {
    fn default() -> Self {
        Self {
            velocity: 20.0,
            density: units::SEA_LEVEL_AIR_DENSITY,
            viscosity: None,
        }
    }
}

impl FlowConditions {
    /// Flow with the default (air at 15°C) viscosity
    pub fn new(velocity: f64, density: f64) -> Self {
        Self {
            velocity,
            density,
            viscosity: None,
        }
    }

    pub fn with_viscosity(mut self, viscosity: f64) -> Self {
        self.viscosity = Some(viscosity);
        self
    }

    /// Returns a copy with velocity, density and viscosity in range.
    ///
    /// An absent viscosity stays absent so that clamping is idempotent.
    pub fn clamped(&self) -> Self {
        let defaults = Self::default();
        Self {
            velocity: finite_or(self.velocity, defaults.velocity).clamp(MIN_VELOCITY, MAX_VELOCITY),
            density: finite_or(self.density, defaults.density).clamp(MIN_DENSITY, MAX_DENSITY),
            viscosity: self.viscosity.map(|mu| {
                finite_or(mu, units::AIR_VISCOSITY_15C).clamp(MIN_VISCOSITY, MAX_VISCOSITY)
            }),
        }
    }

    pub fn speed(&self) -> Velocity {
        Velocity::from_meters_per_sec(self.velocity)
    }

    pub fn fluid_density(&self) -> Density {
        Density::from_kg_per_m3(self.density)
    }

    pub fn dynamic_viscosity(&self) -> Viscosity {
        self.viscosity
            .map(Viscosity::from_pascal_seconds)
            .unwrap_or_default()
    }

    /// q = ½ρV²
    pub fn dynamic_pressure(&self) -> Pressure {
        Pressure::dynamic(self.fluid_density(), self.speed())
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}
