//! Ambient particle field
//!
//! A fixed-size pool of drifting dust motes. Each particle's velocity is
//! drawn once at creation and never changes; positions integrate every frame
//! and wrap to the opposite face of an axis-aligned box when they exceed it.
//! The pool size is constant for the session and is not user-driven.

use rand::Rng;

use crate::config::ParticleConfig;
use crate::foundation::math::Vec3;

/// Horizontal velocity half-range in units per second
const VELOCITY_XZ: f32 = 0.3;

/// Maximum upward velocity in units per second
const VELOCITY_Y: f32 = 0.3;

#[derive(Debug, Clone)]
struct Particle {
    position: Vec3,
    velocity: Vec3,
}

/// Fixed pool of ambient particles inside a wrap-around box
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    config: ParticleConfig,
}

impl ParticleField {
    /// Create a field with positions and velocities drawn from `rng`
    pub fn new<R: Rng + ?Sized>(config: ParticleConfig, rng: &mut R) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle {
                position: Vec3::new(
                    rng.gen_range(-config.x_extent..=config.x_extent),
                    rng.gen_range(config.y_min..=config.y_max),
                    rng.gen_range(-config.z_extent..=config.z_extent),
                ),
                velocity: Vec3::new(
                    rng.gen_range(-VELOCITY_XZ..=VELOCITY_XZ),
                    rng.gen_range(0.0..=VELOCITY_Y),
                    rng.gen_range(-VELOCITY_XZ..=VELOCITY_XZ),
                ),
            })
            .collect();

        Self { particles, config }
    }

    /// Integrate all positions by `delta` seconds and apply wrap-around
    ///
    /// Wrapping happens in the same update: a component is never observable
    /// outside its bound, even transiently.
    pub fn step(&mut self, delta: f32) {
        let c = &self.config;
        for particle in &mut self.particles {
            particle.position += particle.velocity * delta;

            wrap(&mut particle.position.x, -c.x_extent, c.x_extent);
            wrap(&mut particle.position.y, c.y_min, c.y_max);
            wrap(&mut particle.position.z, -c.z_extent, c.z_extent);
        }
    }

    /// Number of particles in the pool
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current particle positions
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.particles.iter().map(|p| p.position)
    }

    /// Per-particle velocities, fixed at creation
    pub fn velocities(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.particles.iter().map(|p| p.velocity)
    }
}

/// Snap a value exceeding one edge of `[min, max]` to the opposite edge
fn wrap(value: &mut f32, min: f32, max: f32) {
    if *value > max {
        *value = min;
    } else if *value < min {
        *value = max;
    }
}
