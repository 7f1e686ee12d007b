//! The particle flow simulator.
//!
//! Owns the particles, the collision geometry and its spatial hash, the
//! velocity field and the fixed-timestep clock. Not reentrant: `update` and
//! `step` mutate the particle array in place and expect a single caller.

use log::{debug, trace};
use nalgebra::Point3;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Angle, Velocity};

use crate::collisions::{CollisionDetector, CollisionObject, build_collision_objects, sweep};
use crate::config::{
    DEFAULT_FLOW_VELOCITY, MAX_ANGLE_OF_ATTACK_DEG, MAX_FLOW_VELOCITY, MIN_ANGLE_OF_ATTACK_DEG,
    MIN_FLOW_VELOCITY, SimulatorConfig,
};
use crate::particle::Particle;
use crate::polygon::AirfoilPolygon;
use crate::spatial_hash::SpatialHash;
use crate::timestep::FixedTimestep;
use crate::velocity_field::{AirfoilFlowField, VelocityField};

/// What happened during one fixed step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    /// Particles whose move was stopped by the body
    pub collisions: usize,
    /// Particles sent back to the inlet
    pub respawns: usize,
}

#[derive(Debug, Clone)]
pub struct ParticleSimulator {
    config: SimulatorConfig,
    particles: Vec<Particle>,
    objects: Vec<CollisionObject>,
    hash: SpatialHash,
    field: AirfoilFlowField,
    clock: FixedTimestep,
    rng: ChaChaRng,
    /// Simulated time in seconds
    time: f64,
    steps: u64,
}

impl ParticleSimulator {
    /// Creates a simulator with the default configuration
    ///
    /// # Arguments
    ///
    /// * `polygon` - Body outline in scene units, centred near the origin
    /// * `particle_count` - Size of the particle population
    /// * `flow_velocity` - Freestream velocity
    /// * `angle_of_attack` - Rotation of the freestream relative to the x axis
    pub fn new(
        polygon: &AirfoilPolygon,
        particle_count: usize,
        flow_velocity: Velocity,
        angle_of_attack: Angle,
    ) -> Self {
        Self::with_config(
            polygon,
            particle_count,
            flow_velocity,
            angle_of_attack,
            SimulatorConfig::default(),
        )
    }

    /// Creates a simulator with an explicit configuration.
    ///
    /// Velocity is clamped to `[MIN_FLOW_VELOCITY, MAX_FLOW_VELOCITY]` and the
    /// angle of attack to `[MIN_ANGLE_OF_ATTACK_DEG, MAX_ANGLE_OF_ATTACK_DEG]`;
    /// non-finite values fall back to 20 m/s and 0°. Collision objects and their spatial hash are built once here; the
    /// particles are seeded on an even grid across the inlet with ages
    /// staggered over `[0, max_age)` so they do not all respawn together.
    pub fn with_config(
        polygon: &AirfoilPolygon,
        particle_count: usize,
        flow_velocity: Velocity,
        angle_of_attack: Angle,
        config: SimulatorConfig,
    ) -> Self {
        let (flow_velocity, angle_of_attack) = clamp_flow(flow_velocity, angle_of_attack);
        let mut rng = ChaChaRng::seed_from_u64(config.seed);
        let objects = build_collision_objects(polygon, &config.collision, &config.domain);
        let hash = SpatialHash::build(&objects, config.collision.hash_cell_size);
        let field = AirfoilFlowField::from_flow(
            flow_velocity,
            angle_of_attack,
            config.velocity_scale,
            config.field,
        );

        let particles = (0..particle_count)
            .map(|i| {
                let position = config.domain.inlet_grid_point(i, particle_count, &mut rng);
                let age = i as f64 / particle_count as f64 * config.max_age;
                Particle::new(position, age)
            })
            .collect();

        debug!(
            "flow simulator: {} particles, {} collision objects in {} cells, speed {:.3} units/s, alpha {:.1}°",
            particle_count,
            objects.len(),
            hash.cell_count(),
            field.speed,
            angle_of_attack.to_degrees()
        );

        Self {
            clock: FixedTimestep::new(
                config.fixed_dt,
                config.max_frame_delta,
                config.max_steps_per_update,
            ),
            config,
            particles,
            objects,
            hash,
            field,
            rng,
            time: 0.0,
            steps: 0,
        }
    }

    /// Advance by one fixed timestep.
    ///
    /// For each active particle: sample the field, sweep the move against the body,
    /// slide along the surface on contact, then age and respawn if the
    /// particle left the domain or outlived `max_age`.
    pub fn step(&mut self) -> StepStats {
        let dt = self.config.fixed_dt;
        let collision = self.config.collision;
        let domain = self.config.domain;
        let max_age = self.config.max_age;
        let mut stats = StepStats::default();

        for particle in self.particles.iter_mut().filter(|p| p.active) {
            let velocity = self.field.sample(&particle.position);
            let tentative = particle.position + velocity * dt;

            match sweep(
                &self.hash,
                &self.objects,
                &particle.position,
                &tentative,
                collision.sweep_samples,
            ) {
                Some(hit) => {
                    // Keep only the tangential component so the particle slides
                    let n = hit.normal;
                    particle.velocity = velocity - n * velocity.dot(&n);
                    particle.position = hit.point + n * collision.push_out;
                    stats.collisions += 1;
                }
                None => {
                    particle.position = tentative;
                    particle.velocity = velocity;
                }
            }

            particle.age += dt;
            if particle.age > max_age || !domain.contains(&particle.position) {
                particle.respawn(domain.sample_inlet(&mut self.rng));
                stats.respawns += 1;
            }
        }

        self.time += dt;
        self.steps += 1;
        trace!(
            "step {}: {} collisions, {} respawns",
            self.steps, stats.collisions, stats.respawns
        );
        stats
    }

    /// Advance by a wall-clock frame delta in seconds.
    ///
    /// Runs as many fixed steps as the accumulator allows, at most
    /// `max_steps_per_update`, and returns how many ran.
    pub fn update(&mut self, delta_seconds: f64) -> u32 {
        let steps = self.clock.advance(delta_seconds);
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    /// Flat `[x0, y0, z0, x1, ...]` positions for upload to the GPU
    pub fn positions(&self) -> Vec<f32> {
        self.particles
            .iter()
            .flat_map(|p| [p.position.x as f32, p.position.y as f32, p.position.z as f32])
            .collect()
    }

    /// Flat `[vx0, vy0, vz0, vx1, ...]` velocities
    pub fn velocities(&self) -> Vec<f32> {
        self.particles
            .iter()
            .flat_map(|p| [p.velocity.x as f32, p.velocity.y as f32, p.velocity.z as f32])
            .collect()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Particles still advancing; the rest stay frozen until reactivated
    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.active).count()
    }

    pub fn collision_objects(&self) -> &[CollisionObject] {
        &self.objects
    }

    pub fn spatial_hash(&self) -> &SpatialHash {
        &self.hash
    }

    pub fn field(&self) -> &AirfoilFlowField {
        &self.field
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Unpaid time in the fixed-step accumulator
    pub fn residual(&self) -> f64 {
        self.clock.residual()
    }

    /// Nearest collision object containing `point`, if any
    pub fn body_at(&self, point: &Point3<f64>) -> Option<&CollisionObject> {
        self.hash
            .nearest_containing(&self.objects, point)
            .map(|idx| &self.objects[idx])
    }
}

/// Bring freestream inputs into the range the collision sweep is tuned for
pub fn clamp_flow(velocity: Velocity, angle_of_attack: Angle) -> (Velocity, Angle) {
    let velocity = if velocity.to_meters_per_sec().is_finite() {
        velocity
    } else {
        Velocity::from_meters_per_sec(DEFAULT_FLOW_VELOCITY)
    };
    let angle = if angle_of_attack.to_degrees().is_finite() {
        angle_of_attack
    } else {
        Angle::zero()
    };
    (
        velocity.clamp(MIN_FLOW_VELOCITY, MAX_FLOW_VELOCITY),
        angle.clamp(MIN_ANGLE_OF_ATTACK_DEG, MAX_ANGLE_OF_ATTACK_DEG),
    )
}
