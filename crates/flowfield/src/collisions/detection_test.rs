use nalgebra::{Point3, Vector3};

use crate::collisions::detection::*;
use crate::collisions::{CollisionObject, build_collision_objects};
use crate::config::CollisionConfig;
use crate::domain::FlowDomain;
use crate::polygon::AirfoilPolygon;
use crate::spatial_hash::SpatialHash;

fn plate_objects() -> Vec<CollisionObject> {
    // Vertical plate 0.1 thick, centred on x = 0
    let plate = AirfoilPolygon::from_flat(&[-0.05, -0.3, 0.05, -0.3, 0.05, 0.3, -0.05, 0.3]).unwrap();
    build_collision_objects(&plate, &CollisionConfig::default(), &FlowDomain::default())
}

#[test]
fn test_direct_detector_finds_nearest() {
    let objects = vec![
        CollisionObject::new(Point3::new(0.0, 0.0, 0.0), 0.06, Vector3::x()),
        CollisionObject::new(Point3::new(0.05, 0.0, 0.0), 0.06, Vector3::x()),
    ];

    let hit = DirectDetector.nearest_containing(&objects, &Point3::new(0.04, 0.0, 0.0));
    assert_eq!(hit, Some(1));

    let miss = DirectDetector.nearest_containing(&objects, &Point3::new(0.5, 0.0, 0.0));
    assert_eq!(miss, None);
}

#[test]
fn test_hash_agrees_with_direct_detector() {
    let objects = plate_objects();
    let hash = SpatialHash::build(&objects, CollisionConfig::default().hash_cell_size);

    for i in 0..40 {
        for j in 0..40 {
            let point = Point3::new(-0.2 + i as f64 * 0.01, -0.4 + j as f64 * 0.02, 0.1);
            assert_eq!(
                hash.nearest_containing(&objects, &point),
                DirectDetector.nearest_containing(&objects, &point),
                "disagreement at {point:?}"
            );
        }
    }
}

#[test]
fn test_sweep_catches_fast_particle() {
    let objects = plate_objects();
    let hash = SpatialHash::build(&objects, 0.25);

    let from = Point3::new(-0.3, 0.0, 0.0);
    let to = Point3::new(0.2, 0.0, 0.0);

    // Both endpoints are clear of the plate
    assert!(hash.nearest_containing(&objects, &from).is_none());
    assert!(hash.nearest_containing(&objects, &to).is_none());

    let hit = sweep(&hash, &objects, &from, &to, 5).expect("swept move should hit the plate");
    // Sample at x = -0.1 is inside the upstream face's spheres
    assert_eq!(hit.t, 0.4);
    assert!(hit.normal.x < 0.0, "upstream face normal should point upstream");
    assert!(hit.point.x < -0.1);
}

#[test]
fn test_sweep_misses_when_path_is_clear() {
    let objects = plate_objects();
    let hash = SpatialHash::build(&objects, 0.25);

    let hit = sweep(
        &hash,
        &objects,
        &Point3::new(-0.3, 0.6, 0.0),
        &Point3::new(0.3, 0.6, 0.0),
        5,
    );
    assert!(hit.is_none());
}

#[test]
fn test_sweep_does_not_test_start_point() {
    let objects = vec![CollisionObject::new(Point3::origin(), 0.06, Vector3::y())];
    let hit = sweep(
        &DirectDetector,
        &objects,
        &Point3::origin(),
        &Point3::new(1.0, 0.0, 0.0),
        5,
    );
    assert!(hit.is_none());
}

#[test]
fn test_sweep_with_zero_samples_tests_endpoint() {
    let objects = vec![CollisionObject::new(Point3::origin(), 0.06, Vector3::y())];
    let hit = sweep(
        &DirectDetector,
        &objects,
        &Point3::new(-1.0, 0.0, 0.0),
        &Point3::origin(),
        0,
    );
    assert_eq!(hit.map(|h| h.t), Some(1.0));
}
