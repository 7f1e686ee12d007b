pub mod angle;
pub mod area;
pub mod density;
pub mod force;
pub mod length;
pub mod pressure;
pub mod velocity;
pub mod viscosity;

#[cfg(test)]
mod angle_test;
#[cfg(test)]
mod density_test;
#[cfg(test)]
mod pressure_test;
#[cfg(test)]
mod velocity_test;

pub use angle::Angle;
pub use area::Area;
pub use density::{Density, SEA_LEVEL_AIR_DENSITY};
pub use force::Force;
pub use length::Length;
pub use pressure::Pressure;
pub use velocity::Velocity;
pub use viscosity::{AIR_VISCOSITY_15C, Viscosity};
