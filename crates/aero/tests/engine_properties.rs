//! Property sweeps over the full coefficient pipeline.
//!
//! These run `simulate` across a grid of shapes, angles, thicknesses and
//! speeds and check the invariants every result must satisfy.

use aero::{
    FlowConditions, FlowRegime, GeometryDefinition, SeparationState, ShapeClass, UncertaintyBounds,
    calculate_lift, classify, detect_separation, simulate,
};

fn ordered(bounds: &UncertaintyBounds) -> bool {
    bounds.min <= bounds.nominal && bounds.nominal <= bounds.max
}

fn sweep() -> impl Iterator<Item = (GeometryDefinition, FlowConditions)> {
    let shapes = [
        (ShapeClass::Symmetric, 0.0),
        (ShapeClass::Cambered, 0.04),
        (ShapeClass::FlatPlate, 0.0),
    ];
    let thicknesses = [0.05, 0.12, 0.18, 0.25];
    let velocities = [5.0, 20.0, 60.0];

    shapes.into_iter().flat_map(move |(shape, camber)| {
        thicknesses.into_iter().flat_map(move |thickness| {
            velocities.into_iter().flat_map(move |velocity| {
                (-15..=20).map(move |angle| {
                    let geometry = GeometryDefinition {
                        shape,
                        chord: 0.3,
                        thickness,
                        camber,
                        angle_of_attack: angle as f64,
                        reference_area: 0.2,
                    };
                    (geometry, FlowConditions::new(velocity, 1.225))
                })
            })
        })
    })
}

#[test]
fn bounds_are_always_ordered() {
    let mut checked = 0;
    for (geometry, flow) in sweep() {
        let results = simulate(&geometry, &flow);
        for (name, bounds) in [
            ("cl", &results.lift_coefficient),
            ("cd", &results.drag_coefficient),
            ("lift", &results.lift_force),
            ("drag", &results.drag_force),
            ("efficiency", &results.efficiency),
        ] {
            assert!(
                ordered(bounds),
                "{name} bounds out of order for {geometry:?} at {flow:?}: {bounds:?}"
            );
        }
        assert!(results.drag_coefficient.nominal > 0.0);
        checked += 1;
    }
    println!("checked {checked} configurations");
}

#[test]
fn results_are_deterministic() {
    for (geometry, flow) in sweep().step_by(17) {
        assert_eq!(simulate(&geometry, &flow), simulate(&geometry, &flow));
    }
}

#[test]
fn lift_increases_through_the_attached_range() {
    // NACA 0012 at 20 m/s: stall 13.8°, attached below 9.66°
    let flow = FlowConditions::new(20.0, 1.225);
    let mut previous = f64::NEG_INFINITY;

    for tenth in 0..=90 {
        let geometry = GeometryDefinition {
            angle_of_attack: tenth as f64 / 10.0,
            ..GeometryDefinition::default()
        };
        let results = simulate(&geometry, &flow);
        assert_eq!(results.separation.state, SeparationState::Attached);

        let cl = results.lift_coefficient.nominal;
        assert!(cl >= previous, "lift fell at {}°", geometry.angle_of_attack);
        previous = cl;
    }
}

#[test]
fn raw_lift_is_monotonic_below_stall_for_every_thickness() {
    for thickness in [0.05, 0.1, 0.15, 0.2, 0.25] {
        let stall = 15.0 - 10.0 * thickness;
        let mut previous = f64::NEG_INFINITY;
        let mut angle = -stall;
        while angle <= stall {
            let geometry = GeometryDefinition {
                thickness,
                angle_of_attack: angle,
                ..GeometryDefinition::default()
            };
            let cl = calculate_lift(&geometry, 1.0e6);
            assert!(cl >= previous);
            previous = cl;
            angle += 0.25;
        }
    }
}

#[test]
fn separation_severity_grows_with_angle() {
    for re in [2.0e4, 2.0e5, 1.0e6, 5.0e6] {
        let mut previous = SeparationState::Attached;
        for angle in 0..=20 {
            let geometry = GeometryDefinition {
                angle_of_attack: angle as f64,
                ..GeometryDefinition::default()
            };
            let state = detect_separation(&geometry, re).state;
            assert!(state >= previous, "Re {re:.0e}: {previous:?} -> {state:?} at {angle}°");
            previous = state;
        }
    }
}

#[test]
fn regime_boundaries_are_exact() {
    let cases = [
        (49_999.0, FlowRegime::VeryLowRe),
        (50_000.0, FlowRegime::Laminar),
        (499_999.0, FlowRegime::Laminar),
        (500_000.0, FlowRegime::Transitional),
        (999_999.0, FlowRegime::Transitional),
        (1_000_000.0, FlowRegime::Turbulent),
        (2_999_999.0, FlowRegime::Turbulent),
        (3_000_000.0, FlowRegime::HighReTurbulent),
    ];
    for (re, regime) in cases {
        assert_eq!(classify(re).regime, regime, "Re = {re}");
    }
}

#[test]
fn clamping_makes_extreme_inputs_safe() {
    let clamped = simulate(
        &GeometryDefinition {
            angle_of_attack: 20.0,
            ..GeometryDefinition::default()
        },
        &FlowConditions::new(60.0, 1.225),
    );
    let extreme = simulate(
        &GeometryDefinition {
            angle_of_attack: 999.0,
            ..GeometryDefinition::default()
        },
        &FlowConditions::new(10_000.0, 1.225),
    );
    assert_eq!(clamped, extreme);

    let nonsense = simulate(
        &GeometryDefinition {
            chord: f64::NAN,
            thickness: f64::INFINITY,
            angle_of_attack: f64::NEG_INFINITY,
            reference_area: -1.0,
            ..GeometryDefinition::default()
        },
        &FlowConditions::new(f64::NAN, f64::NAN),
    );
    assert!(nonsense.lift_force.nominal.is_finite());
    assert!(nonsense.drag_force.nominal.is_finite());
    assert!(nonsense.efficiency.nominal.is_finite());
}

#[test]
fn water_flow_is_high_reynolds() {
    let geometry = GeometryDefinition::default();
    let water = FlowConditions::new(10.0, 998.0).with_viscosity(1.0e-3);
    let results = simulate(&geometry, &water);

    assert_eq!(results.flow.regime, FlowRegime::HighReTurbulent);
    assert!(results.has_warning(aero::WarningKind::HighReynolds));
}
