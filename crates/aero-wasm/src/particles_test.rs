use flowfield::{AirfoilPolygon, ParticleSimulator, PolygonError};
use units::{Angle, Velocity};

use crate::error::BindingError;
use crate::particles::{FlowSnapshot, create, register, unregister, with_simulator};

const DIAMOND: [f64; 8] = [-0.5, 0.0, 0.0, 0.05, 0.5, 0.0, 0.0, -0.05];

fn diamond_simulator(count: usize) -> ParticleSimulator {
    let polygon = AirfoilPolygon::from_flat(&DIAMOND).unwrap();
    ParticleSimulator::new(
        &polygon,
        count,
        Velocity::from_meters_per_sec(20.0),
        Angle::from_degrees(5.0),
    )
}

#[test]
fn ids_are_unique() {
    let a = register(diamond_simulator(10));
    let b = register(diamond_simulator(10));
    assert_ne!(a, b);
    assert!(unregister(a));
    assert!(unregister(b));
}

#[test]
fn registered_simulator_can_be_stepped() {
    let id = register(diamond_simulator(50));

    let steps = with_simulator(id, |sim| sim.update(0.04)).unwrap();
    assert_eq!(steps, 2);

    let positions = with_simulator(id, |sim| sim.positions()).unwrap();
    assert_eq!(positions.len(), 150);

    let snapshot = with_simulator(id, |sim| FlowSnapshot::from(&*sim)).unwrap();
    assert_eq!(snapshot.step_count, 2);
    assert_eq!(snapshot.particle_count, 50);
    assert!(snapshot.collision_objects > 0);

    assert!(unregister(id));
}

#[test]
fn deleted_simulator_is_gone() {
    let id = register(diamond_simulator(5));
    assert!(unregister(id));
    assert!(!unregister(id));

    let err = with_simulator(id, |sim| sim.particle_count()).unwrap_err();
    assert!(matches!(err, BindingError::SimulatorNotFound(missing) if missing == id));
    assert_eq!(err.to_string(), format!("flow simulator {id} not found"));
}

#[test]
fn create_rejects_bad_polygons() {
    let odd = create(&[0.0, 0.0, 1.0], 10, 20.0, 0.0, Default::default());
    assert!(matches!(
        odd,
        Err(BindingError::Polygon(PolygonError::OddCoordinateCount(3)))
    ));

    let line = create(&[0.0, 0.0, 1.0, 0.0], 10, 20.0, 0.0, Default::default());
    assert!(matches!(
        line,
        Err(BindingError::Polygon(PolygonError::TooFewVertices(2)))
    ));
}

#[test]
fn create_registers_the_requested_particle_count() {
    let id = create(&DIAMOND, 120, 20.0, 5.0, Default::default()).unwrap();
    assert_eq!(with_simulator(id, |sim| sim.particle_count()).unwrap(), 120);
    assert!(unregister(id));
}
