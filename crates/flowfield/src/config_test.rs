use crate::config::*;

#[test]
fn test_default_simulator_config() {
    let config = SimulatorConfig::default();

    assert_eq!(config.max_age, 12.0);
    assert_eq!(config.fixed_dt, 1.0 / 60.0);
    assert_eq!(config.max_frame_delta, 0.1);
    assert_eq!(config.max_steps_per_update, 5);
    assert_eq!(config.collision.sweep_samples, 5);
    assert_eq!(config.collision.z_layers, 11);
    assert_eq!(config.collision.push_out, 0.02);
}

#[test]
fn test_with_seed_keeps_other_defaults() {
    let config = SimulatorConfig::with_seed(7);
    assert_eq!(config.seed, 7);
    assert_eq!(
        SimulatorConfig {
            seed: SimulatorConfig::default().seed,
            ..config
        },
        SimulatorConfig::default()
    );
}

#[test]
fn test_collision_radius_fits_hash_cell() {
    // The 27-cell query is only exhaustive when objects are no larger than a cell
    let collision = CollisionConfig::default();
    assert!(collision.object_radius <= collision.hash_cell_size);
    assert!(collision.edge_spacing < 2.0 * collision.object_radius);
}
