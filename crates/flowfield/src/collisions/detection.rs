//! Swept collision detection
//!
//! Provides two detector implementations:
//! - DirectDetector: O(N) scan over every object
//! - SpatialHash: 27-cell neighbourhood lookup
//!
//! and [`sweep`], which samples points along a particle move so thin
//! sections cannot be skipped over in a single step.

use nalgebra::{Point3, Vector3};

use crate::collisions::CollisionObject;
use crate::spatial_hash::SpatialHash;

/// Where a swept move first touched the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionHit {
    /// Index of the collision object that was hit
    pub object: usize,
    /// Fraction of the move (0..1] at which the hit sample lies
    pub t: f64,
    /// Hit sample projected onto the object's surface
    pub point: Point3<f64>,
    /// Outward surface normal at the hit
    pub normal: Vector3<f64>,
}

/// Point-in-body queries against a set of collision objects
///
/// Ties between equally distant objects go to the lowest index, so every
/// implementation answers identically.
pub trait CollisionDetector: Send + Sync {
    /// Index of the nearest object whose sphere contains `point`
    ///
    /// # Arguments
    ///
    /// * `objects` - The object set the detector was built for
    /// * `point` - Query point
    fn nearest_containing(&self, objects: &[CollisionObject], point: &Point3<f64>) -> Option<usize>;
}

fn nearest_of(
    objects: &[CollisionObject],
    point: &Point3<f64>,
    candidates: impl Iterator<Item = usize>,
) -> Option<usize> {
    candidates
        .filter(|&idx| objects[idx].contains(point))
        .map(|idx| (idx, objects[idx].distance_to(point)))
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
        .map(|(idx, _)| idx)
}

/// Checks every object. Reference implementation for tests.
pub struct DirectDetector;

impl CollisionDetector for DirectDetector {
    fn nearest_containing(&self, objects: &[CollisionObject], point: &Point3<f64>) -> Option<usize> {
        nearest_of(objects, point, 0..objects.len())
    }
}

impl CollisionDetector for SpatialHash {
    fn nearest_containing(&self, objects: &[CollisionObject], point: &Point3<f64>) -> Option<usize> {
        nearest_of(objects, point, self.candidates(point))
    }
}

/// Test a straight move from `from` to `to` against the body.
///
/// Checks `samples` evenly spaced points at `t = k/samples` for
/// `k = 1..=samples`; the first sample inside an object wins. The start point
/// itself is not tested.
///
/// # Examples
///
/// ```
/// use flowfield::collisions::{sweep, CollisionObject, DirectDetector};
/// use nalgebra::{Point3, Vector3};
///
/// let wall = [CollisionObject::new(Point3::origin(), 0.06, -Vector3::x())];
///
/// // Endpoint test alone would miss this: both ends are outside the sphere
/// let hit = sweep(&DirectDetector, &wall, &Point3::new(-0.5, 0.0, 0.0), &Point3::new(0.5, 0.0, 0.0), 5);
/// assert!(hit.is_none());
///
/// let hit = sweep(&DirectDetector, &wall, &Point3::new(-0.5, 0.0, 0.0), &Point3::new(0.5, 0.0, 0.0), 10);
/// assert!(hit.is_some());
/// ```
pub fn sweep<D: CollisionDetector + ?Sized>(
    detector: &D,
    objects: &[CollisionObject],
    from: &Point3<f64>,
    to: &Point3<f64>,
    samples: usize,
) -> Option<CollisionHit> {
    let samples = samples.max(1);
    let delta = to - from;

    (1..=samples).find_map(|k| {
        let t = k as f64 / samples as f64;
        let sample = from + delta * t;
        detector.nearest_containing(objects, &sample).map(|idx| {
            let object = &objects[idx];
            CollisionHit {
                object: idx,
                t,
                point: object.project_to_surface(&sample),
                normal: object.normal,
            }
        })
    })
}
