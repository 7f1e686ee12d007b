//! Wind tunnel example
//!
//! Evaluates a NACA section with the coefficient engine, then runs the
//! particle simulator around the same outline for ten seconds of 60 Hz
//! frames, reporting collisions and respawns along the way.
//!
//! Run with: RUST_LOG=debug cargo run --package flowfield --example wind_tunnel

use aero::{FlowConditions, GeometryDefinition, ShapeClass, airfoil_polygon, simulate};
use flowfield::{AirfoilPolygon, FixedTimestep, ParticleSimulator, StepStats};
use log::info;
use units::{Angle, Velocity};

const FRAME: f64 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let geometry = GeometryDefinition {
        shape: ShapeClass::Cambered,
        chord: 1.0,
        thickness: 0.12,
        camber: 0.02,
        angle_of_attack: 6.0,
        reference_area: 0.5,
    };
    let flow = FlowConditions::new(25.0, 1.225);

    let results = simulate(&geometry, &flow);
    println!("NACA 2412 at {:.1}°, {:.0} m/s", geometry.angle_of_attack, flow.velocity);
    println!("{}", "=".repeat(60));
    println!("  Re        {:.3e} ({:?})", results.flow.reynolds_number, results.flow.regime);
    println!(
        "  cl        {:.3} [{:.3}, {:.3}]",
        results.lift_coefficient.nominal, results.lift_coefficient.min, results.lift_coefficient.max
    );
    println!(
        "  cd        {:.4} [{:.4}, {:.4}]",
        results.drag_coefficient.nominal, results.drag_coefficient.min, results.drag_coefficient.max
    );
    println!("  L/D       {:.1}", results.efficiency.nominal);
    println!("  lift      {:.1} N", results.lift_force.nominal);
    for warning in &results.warnings {
        println!("  warning   {}", warning.message);
    }

    let outline = airfoil_polygon(&geometry, 60);
    let polygon = match AirfoilPolygon::new(outline) {
        Ok(polygon) => polygon,
        Err(err) => {
            eprintln!("invalid outline: {err}");
            return;
        }
    };

    let mut sim = ParticleSimulator::new(
        &polygon,
        3_000,
        Velocity::from_meters_per_sec(flow.velocity),
        Angle::from_degrees(geometry.angle_of_attack),
    );
    println!(
        "\nFlow simulator: {} particles, {} collision objects",
        sim.particle_count(),
        sim.collision_objects().len()
    );

    // Drive the fixed steps by hand to collect per-step stats; this is what
    // ParticleSimulator::update does internally.
    let config = *sim.config();
    let mut clock = FixedTimestep::new(
        config.fixed_dt,
        config.max_frame_delta,
        config.max_steps_per_update,
    );
    let mut totals = StepStats::default();
    for frame in 0..600 {
        // Every 100th frame stalls for half a second to exercise the catch-up cap
        let delta = if frame % 100 == 99 { 0.5 } else { FRAME };
        for _ in 0..clock.advance(delta) {
            let stats = sim.step();
            totals.collisions += stats.collisions;
            totals.respawns += stats.respawns;
        }
        if frame % 60 == 0 {
            info!(
                "t={:.2}s steps={} residual={:.4}",
                sim.time(),
                sim.step_count(),
                clock.residual()
            );
        }
    }

    let mean_speed =
        sim.particles().iter().map(|p| p.speed()).sum::<f64>() / sim.particle_count() as f64;
    println!("  simulated {:.2}s in {} steps", sim.time(), sim.step_count());
    println!(
        "  {} collisions, {} respawns",
        totals.collisions, totals.respawns
    );
    println!("  mean particle speed {:.3} units/s", mean_speed);
}
