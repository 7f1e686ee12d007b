//! Uniform-grid spatial hash over the collision objects.
//!
//! Objects are bucketed by the cell containing their centre. A point query
//! scans the 3×3×3 block of cells around the query cell, so any object whose
//! radius is no larger than the cell size is guaranteed to be found.
//!
//! # Example
//!
//! ```rust
//! use flowfield::{CollisionObject, SpatialHash};
//! use nalgebra::{Point3, Vector3};
//!
//! let objects = vec![
//!     CollisionObject::new(Point3::new(0.0, 0.0, 0.0), 0.06, Vector3::y()),
//!     CollisionObject::new(Point3::new(2.0, 0.0, 0.0), 0.06, Vector3::y()),
//! ];
//! let hash = SpatialHash::build(&objects, 0.25);
//!
//! let nearby: Vec<usize> = hash.candidates(&Point3::new(0.1, 0.0, 0.0)).collect();
//! assert_eq!(nearby, vec![0]);
//! ```

use std::collections::HashMap;

use nalgebra::Point3;

use crate::collisions::CollisionObject;

/// Smallest usable cell size; guards against a zero or negative config value
const MIN_CELL_SIZE: f64 = 1e-3;

/// Quantized integer coordinates of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey(pub i32, pub i32, pub i32);

impl CellKey {
    /// The key and its 26 neighbours
    pub fn neighborhood(self) -> impl Iterator<Item = CellKey> {
        let CellKey(x, y, z) = self;
        (-1..=1).flat_map(move |dx| {
            (-1..=1).flat_map(move |dy| (-1..=1).map(move |dz| CellKey(x + dx, y + dy, z + dz)))
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpatialHash {
    cell_size: f64,
    cells: HashMap<CellKey, Vec<usize>>,
}

impl SpatialHash {
    /// Index every object by the cell containing its centre.
    ///
    /// The cell is widened to the largest object radius so that a 27-cell
    /// query always reaches every object that can contain the query point.
    ///
    /// # Arguments
    ///
    /// * `objects` - Collision objects; the hash stores indices into this slice
    /// * `cell_size` - Requested cell edge length in scene units
    pub fn build(objects: &[CollisionObject], cell_size: f64) -> Self {
        let largest_radius = objects
            .iter()
            .map(|o| o.radius)
            .filter(|r| r.is_finite())
            .fold(0.0, f64::max);
        let mut hash = Self {
            cell_size: cell_size.max(largest_radius).max(MIN_CELL_SIZE),
            cells: HashMap::new(),
        };
        for (idx, object) in objects.iter().enumerate() {
            let key = hash.key_for(&object.center);
            hash.cells.entry(key).or_default().push(idx);
        }
        hash
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn key_for(&self, point: &Point3<f64>) -> CellKey {
        let quantize = |v: f64| (v / self.cell_size).floor() as i32;
        CellKey(quantize(point.x), quantize(point.y), quantize(point.z))
    }

    /// Indices of objects bucketed in the 27 cells around `point`
    pub fn candidates(&self, point: &Point3<f64>) -> impl Iterator<Item = usize> + '_ {
        self.key_for(point)
            .neighborhood()
            .filter_map(|key| self.cells.get(&key))
            .flat_map(|bucket| bucket.iter().copied())
    }

    /// Indices of objects whose centre lies within `radius` of `pos`.
    ///
    /// Only exact when `radius` does not exceed the cell size.
    pub fn neighbors_within(
        &self,
        objects: &[CollisionObject],
        pos: &Point3<f64>,
        radius: f64,
    ) -> Vec<usize> {
        let radius_sq = radius * radius;
        self.candidates(pos)
            .filter(|&idx| (objects[idx].center - pos).magnitude_squared() <= radius_sq)
            .collect()
    }

    /// Number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Total number of indexed objects
    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
