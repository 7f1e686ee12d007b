use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use units::{Angle, Velocity};

use crate::config::FieldConfig;
use crate::velocity_field::*;

fn quiet_config() -> FieldConfig {
    FieldConfig {
        perturbation_amplitude: 0.0,
        ..FieldConfig::default()
    }
}

#[test]
fn test_uniform_flow() {
    let field = UniformFlow::new(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(field.sample(&Point3::new(5.0, -3.0, 1.0)), Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_freestream_is_rotated_by_angle_of_attack() {
    let field = AirfoilFlowField::new(2.0, Angle::from_degrees(30.0), quiet_config());
    let v = field.freestream();

    assert_relative_eq!(v.x, 2.0 * 30.0_f64.to_radians().cos(), epsilon = 1e-12);
    assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
    assert_eq!(v.z, 0.0);
}

#[test]
fn test_from_flow_scales_velocity() {
    let field = AirfoilFlowField::from_flow(
        Velocity::from_meters_per_sec(20.0),
        Angle::from_degrees(0.0),
        0.05,
        FieldConfig::default(),
    );
    assert_relative_eq!(field.speed, 1.0, epsilon = 1e-12);
}

#[test]
fn test_no_circulation_without_angle_of_attack() {
    let field = AirfoilFlowField::new(1.0, Angle::from_degrees(0.0), quiet_config());
    assert_eq!(field.circulation(&Point3::new(0.0, 0.5, 0.0)), Vector3::zeros());
}

#[test]
fn test_circulation_speeds_flow_over_the_top() {
    let field = AirfoilFlowField::new(1.0, Angle::from_degrees(10.0), quiet_config());

    let above = field.circulation(&Point3::new(0.0, 0.5, 0.0));
    let below = field.circulation(&Point3::new(0.0, -0.5, 0.0));
    assert!(above.x > 0.0);
    assert!(below.x < 0.0);

    // speed · sin α · gain · (1 − r/R)
    let expected = 10.0_f64.to_radians().sin() * 0.5 * (1.0 - 0.5 / 1.5);
    assert_relative_eq!(above.magnitude(), expected, epsilon = 1e-12);
}

#[test]
fn test_circulation_is_tangential_and_local() {
    let field = AirfoilFlowField::new(1.0, Angle::from_degrees(10.0), quiet_config());

    let p = Point3::new(0.3, 0.4, 0.2);
    let swirl = field.circulation(&p);
    assert_relative_eq!(swirl.dot(&Vector3::new(p.x, p.y, 0.0)), 0.0, epsilon = 1e-12);
    assert_eq!(swirl.z, 0.0);

    assert_eq!(field.circulation(&Point3::new(1.6, 0.0, 0.0)), Vector3::zeros());
    assert_eq!(field.circulation(&Point3::new(0.0, 0.0, 0.3)), Vector3::zeros());
}

#[test]
fn test_perturbation_is_bounded() {
    let field = AirfoilFlowField::new(2.0, Angle::from_degrees(5.0), FieldConfig::default());
    let limit = 0.05 * 2.0;

    for i in 0..50 {
        let x = -2.5 + i as f64 * 0.12;
        let p = field.perturbation(&Point3::new(x, 0.7 - x * 0.3, x * 0.1));
        assert!(p.x.abs() <= limit && p.y.abs() <= limit && p.z.abs() <= limit);
    }
}

#[test]
fn test_sample_is_sum_of_terms() {
    let field = AirfoilFlowField::new(1.5, Angle::from_degrees(8.0), FieldConfig::default());
    let p = Point3::new(-0.2, 0.3, 0.1);

    let expected = field.freestream() + field.circulation(&p) + field.perturbation(&p);
    assert_eq!(field.sample(&p), expected);
}
