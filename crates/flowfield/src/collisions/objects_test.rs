use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::collisions::objects::*;
use crate::config::CollisionConfig;
use crate::domain::FlowDomain;
use crate::polygon::AirfoilPolygon;

fn diamond() -> AirfoilPolygon {
    AirfoilPolygon::from_flat(&[-0.5, 0.0, 0.0, 0.1, 0.5, 0.0, 0.0, -0.1]).unwrap()
}

#[test]
fn test_contains_and_distance() {
    let object = CollisionObject::new(Point3::origin(), 0.06, Vector3::y());

    assert!(object.contains(&Point3::new(0.0, 0.05, 0.0)));
    assert!(!object.contains(&Point3::new(0.0, 0.06, 0.0)));
    assert_relative_eq!(object.distance_to(&Point3::new(0.3, 0.4, 0.0)), 0.5);
}

#[test]
fn test_project_to_surface_moves_along_normal() {
    let object = CollisionObject::new(Point3::origin(), 0.06, Vector3::y());

    let projected = object.project_to_surface(&Point3::new(0.01, -0.02, 0.0));
    assert_relative_eq!(projected, Point3::new(0.01, 0.06, 0.0), epsilon = 1e-12);

    // Already beyond the tangent plane
    let outside = Point3::new(0.0, 0.1, 0.0);
    assert_eq!(object.project_to_surface(&outside), outside);
}

#[test]
fn test_layers_span_domain_depth() {
    let config = CollisionConfig::default();
    let objects = build_collision_objects(&diamond(), &config, &FlowDomain::default());

    let per_layer = objects.len() / config.z_layers;
    assert_eq!(objects.len(), per_layer * config.z_layers);

    let min_z = objects.iter().map(|o| o.center.z).fold(f64::INFINITY, f64::min);
    let max_z = objects.iter().map(|o| o.center.z).fold(f64::NEG_INFINITY, f64::max);
    assert_relative_eq!(min_z, -0.5);
    assert_relative_eq!(max_z, 0.5, epsilon = 1e-12);
}

#[test]
fn test_objects_are_densified_along_edges() {
    let config = CollisionConfig {
        z_layers: 1,
        ..CollisionConfig::default()
    };
    let polygon = diamond();
    let objects = build_collision_objects(&polygon, &config, &FlowDomain::default());

    // Each edge is ~0.51 long: ceil(0.51 / 0.04) = 13 segments
    assert_eq!(objects.len(), 4 * 13);

    // Single layer sits mid-depth
    assert!(objects.iter().all(|o| o.center.z == 0.0));

    // Spacing never exceeds the configured edge spacing
    for pair in objects.windows(2) {
        let gap = (pair[1].center - pair[0].center).magnitude();
        assert!(gap <= config.edge_spacing + 1e-12);
    }
}

#[test]
fn test_normals_point_away_from_the_body() {
    let config = CollisionConfig {
        z_layers: 1,
        ..CollisionConfig::default()
    };

    // Same diamond with the opposite winding
    let reversed =
        AirfoilPolygon::from_flat(&[-0.5, 0.0, 0.0, -0.1, 0.5, 0.0, 0.0, 0.1]).unwrap();

    for polygon in [diamond(), reversed] {
        for object in build_collision_objects(&polygon, &config, &FlowDomain::default()) {
            assert_relative_eq!(object.normal.magnitude(), 1.0, epsilon = 1e-12);
            assert_eq!(object.normal.z, 0.0);
            // The diamond is convex and centred on the origin
            let outward = object.center.coords + object.normal * 0.01;
            assert!(outward.magnitude() >= object.center.coords.magnitude());
        }
    }
}

#[test]
fn test_no_layers_means_no_objects() {
    let config = CollisionConfig {
        z_layers: 0,
        ..CollisionConfig::default()
    };
    assert!(build_collision_objects(&diamond(), &config, &FlowDomain::default()).is_empty());
}

#[test]
fn test_huge_outline_builds_a_bounded_set() {
    let config = CollisionConfig::default();
    let domain = FlowDomain::default();
    let bound = (MAX_OBJECTS_PER_LAYER + 3) * config.z_layers;

    let mut counts = Vec::new();
    for scale in [1.0, 100.0, 1.0e6] {
        let triangle =
            AirfoilPolygon::from_flat(&[0.0, 0.0, 2.0 * scale, 0.0, 0.0, scale]).unwrap();
        let objects = build_collision_objects(&triangle, &config, &domain);
        assert!(objects.len() <= bound, "{} objects at scale {scale}", objects.len());
        counts.push(objects.len());
    }
    // The small outline is not affected by the cap
    assert!(counts[0] < counts[1]);
}

#[test]
fn test_tiny_spacing_and_many_layers_are_capped() {
    let config = CollisionConfig {
        edge_spacing: 0.0,
        z_layers: 100_000,
        ..CollisionConfig::default()
    };
    let objects = build_collision_objects(&diamond(), &config, &FlowDomain::default());

    let per_layer_bound = (diamond().perimeter() / MIN_EDGE_SPACING).ceil() as usize + 4;
    assert!(objects.len() <= per_layer_bound * MAX_Z_LAYERS);
    assert_eq!(objects.len() % MAX_Z_LAYERS, 0);
}
