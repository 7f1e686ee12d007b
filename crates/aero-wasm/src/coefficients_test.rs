use approx::assert_relative_eq;

use aero::{FlowConditions, GeometryDefinition, airfoil_polygon};

use crate::coefficients::{aero_simulate, flatten_profile};

#[test]
fn flattened_profile_interleaves_coordinates() {
    let geometry = GeometryDefinition::default();
    let flat = flatten_profile(&geometry, 40);
    let outline = airfoil_polygon(&geometry, 40);

    assert_eq!(flat.len(), 2 * outline.len());
    for (i, p) in outline.iter().enumerate() {
        assert_relative_eq!(flat[2 * i], p.x);
        assert_relative_eq!(flat[2 * i + 1], p.y);
    }
}

#[test]
fn flattened_profile_is_a_valid_polygon() {
    let flat = flatten_profile(&GeometryDefinition::default(), 30);
    let polygon = flowfield::AirfoilPolygon::from_flat(&flat).unwrap();
    assert_eq!(polygon.len(), 61);
}

#[test]
fn binding_matches_engine() {
    let geometry = GeometryDefinition::default();
    let flow = FlowConditions::default();
    assert_eq!(aero_simulate(geometry, flow), aero::simulate(&geometry, &flow));
}
