//! Axis-aligned flow domain and inlet sampling.

use nalgebra::Point3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Box the particles live in. Flow enters through the `min.x` face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlowDomain {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
    /// Depth of the inlet slab along x
    pub inlet_depth: f64,
}

impl Default for FlowDomain {
    fn default() -> Self {
        Self {
            min: Point3::new(-2.5, -1.5, -0.5),
            max: Point3::new(3.5, 1.5, 0.5),
            inlet_depth: 0.2,
        }
    }
}

impl FlowDomain {
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    pub fn in_inlet(&self, point: &Point3<f64>) -> bool {
        self.contains(point) && point.x <= self.min.x + self.inlet_depth
    }

    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Uniformly random point in the inlet slab
    pub fn sample_inlet<R: Rng>(&self, rng: &mut R) -> Point3<f64> {
        Point3::new(
            self.min.x + rng.random::<f64>() * self.inlet_depth,
            self.min.y + rng.random::<f64>() * (self.max.y - self.min.y),
            self.min.z + rng.random::<f64>() * self.depth(),
        )
    }

    /// Evenly spaced inlet position for particle `index` of `count`.
    ///
    /// Particles fill `ceil(sqrt(count))` columns across y and as many rows
    /// across z as needed, each at the centre of its cell. Only x is jittered
    /// within the inlet slab.
    pub fn inlet_grid_point<R: Rng>(&self, index: usize, count: usize, rng: &mut R) -> Point3<f64> {
        let count = count.max(1);
        let columns = (count as f64).sqrt().ceil() as usize;
        let rows = count.div_ceil(columns);

        let column = index % columns;
        let row = index / columns;

        Point3::new(
            self.min.x + rng.random::<f64>() * self.inlet_depth,
            self.min.y + (column as f64 + 0.5) / columns as f64 * (self.max.y - self.min.y),
            self.min.z + (row as f64 + 0.5) / rows as f64 * self.depth(),
        )
    }
}
