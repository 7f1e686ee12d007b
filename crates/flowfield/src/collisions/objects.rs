//! Collision spheres generated from the airfoil outline.

use nalgebra::{Point3, Vector3};

use crate::config::CollisionConfig;
use crate::domain::FlowDomain;
use crate::polygon::AirfoilPolygon;

/// Closest spacing allowed between collision objects along an edge
pub const MIN_EDGE_SPACING: f64 = 1e-3;
/// Most objects placed around one outline copy, plus one per polygon vertex
pub const MAX_OBJECTS_PER_LAYER: usize = 4096;
/// Most outline copies across the domain depth
pub const MAX_Z_LAYERS: usize = 64;

/// A sphere sitting on the body surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionObject {
    pub center: Point3<f64>,
    pub radius: f64,
    /// Unit normal pointing out of the body
    pub normal: Vector3<f64>,
}

impl CollisionObject {
    pub fn new(center: Point3<f64>, radius: f64, normal: Vector3<f64>) -> Self {
        Self {
            center,
            radius,
            normal,
        }
    }

    pub fn contains(&self, point: &Point3<f64>) -> bool {
        (point - self.center).magnitude_squared() < self.radius * self.radius
    }

    pub fn distance_to(&self, point: &Point3<f64>) -> f64 {
        (point - self.center).magnitude()
    }

    /// Moves `point` along the normal until it sits on the sphere's outer
    /// tangent plane. Points already outside that plane are unchanged.
    pub fn project_to_surface(&self, point: &Point3<f64>) -> Point3<f64> {
        let height = (point - self.center).dot(&self.normal);
        point + self.normal * (self.radius - height).max(0.0)
    }
}

/// z coordinate of each outline copy, spread evenly over the domain depth
fn layer_depths(domain: &FlowDomain, layers: usize) -> Vec<f64> {
    match layers {
        0 => Vec::new(),
        1 => vec![0.5 * (domain.min.z + domain.max.z)],
        n => (0..n)
            .map(|i| domain.min.z + domain.depth() * i as f64 / (n - 1) as f64)
            .collect(),
    }
}

/// Densify the outline and extrude it into z layers.
///
/// Each edge is split into `ceil(length / spacing)` segments; one object is
/// placed at the start of every segment, so polygon vertices are covered
/// exactly once. Every object inherits the outward normal of its edge.
///
/// `spacing` is `edge_spacing`, widened when needed so one layer holds at most
/// [`MAX_OBJECTS_PER_LAYER`] objects plus one per vertex. Layers are capped
/// at [`MAX_Z_LAYERS`].
///
/// # Examples
///
/// ```
/// use flowfield::collisions::build_collision_objects;
/// use flowfield::{AirfoilPolygon, CollisionConfig, FlowDomain};
///
/// let square = AirfoilPolygon::from_flat(&[0.0, 0.0, 0.4, 0.0, 0.4, 0.4, 0.0, 0.4]).unwrap();
/// let config = CollisionConfig { edge_spacing: 0.15, z_layers: 3, ..Default::default() };
///
/// let objects = build_collision_objects(&square, &config, &FlowDomain::default());
/// // 3 segments per 0.4 edge, 4 edges, 3 layers
/// assert_eq!(objects.len(), 3 * 4 * 3);
/// ```
pub fn build_collision_objects(
    polygon: &AirfoilPolygon,
    config: &CollisionConfig,
    domain: &FlowDomain,
) -> Vec<CollisionObject> {
    let perimeter = polygon.perimeter();
    let spacing = config
        .edge_spacing
        .max(MIN_EDGE_SPACING)
        .max(perimeter / MAX_OBJECTS_PER_LAYER as f64);

    let outline: Vec<_> = polygon
        .outward_edges()
        .flat_map(|(start, end, normal)| {
            let segments = ((end - start).magnitude() / spacing).ceil().max(1.0) as usize;
            (0..segments).map(move |k| {
                let t = k as f64 / segments as f64;
                (start + (end - start) * t, normal)
            })
        })
        .collect();

    layer_depths(domain, config.z_layers.min(MAX_Z_LAYERS))
        .into_iter()
        .flat_map(|z| {
            outline.iter().map(move |(p, n)| {
                CollisionObject::new(
                    Point3::new(p.x, p.y, z),
                    config.object_radius,
                    Vector3::new(n.x, n.y, 0.0),
                )
            })
        })
        .collect()
}
