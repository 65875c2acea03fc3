//! Lantern entity: spawn-in ramp, steady-state drift, flicker
//!
//! A lantern is an anchor position plus a set of scalars drawn once at
//! creation. Its animator is a pure function of `(anchor, params, elapsed
//! time)`; the only mutable state is the latch that makes the spawn
//! completion signal fire exactly once.

use rand::Rng;

use crate::foundation::math::{Transform, Vec3};
use crate::oscillator;

/// Duration of the spawn-in scale ramp in seconds
pub const SPAWN_DURATION: f32 = 0.5;

/// Steady spin rate around the vertical axis in radians per second
pub const SPIN_RATE: f32 = 0.18;

/// Amplitude of the steady-state breathing scale oscillation
const BREATHING_AMOUNT: f32 = 0.03;

/// Linear RGB color of a lantern's glow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel in [0, 1]
    pub r: f32,
    /// Green channel in [0, 1]
    pub g: f32,
    /// Blue channel in [0, 1]
    pub b: f32,
}

/// The fixed palette of warm lantern colors; one is chosen per lantern at creation
pub const PALETTE: [Color; 5] = [
    Color { r: 1.0, g: 0.823_53, b: 0.498_04 }, // #ffd27f
    Color { r: 1.0, g: 0.909_80, b: 0.701_96 }, // #ffe8b3
    Color { r: 1.0, g: 0.956_86, b: 0.8 },      // #fff4cc
    Color { r: 1.0, g: 0.752_94, b: 0.411_76 }, // #ffc069
    Color { r: 1.0, g: 0.701_96, b: 0.278_43 }, // #ffb347
];

/// Immutable per-lantern motion scalars, drawn once at creation
///
/// Every phase-bearing field carries an additive random offset so lanterns
/// created in the same frame never animate in visual lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    /// Additive phase offset for the drift sinusoids
    pub time_offset: f32,
    /// Time scale of the horizontal drift
    pub drift_speed: f32,
    /// Horizontal drift amplitude on X
    pub drift_range_x: f32,
    /// Horizontal drift amplitude on Z
    pub drift_range_z: f32,
    /// Vertical bobbing amplitude
    pub bob_amount: f32,
    /// Vertical bobbing frequency multiplier
    pub bob_speed: f32,
    /// Base scale of this lantern; the spawn ramp and breathing both target it
    pub size_variation: f32,
    /// Frequency of the breathing scale oscillation
    pub flicker_speed: f32,
    /// Phase offset into the shared wind sway
    pub wind_offset: f32,
}

impl MotionParams {
    /// Draw a fresh parameter set from the fixed distributions
    ///
    /// Out-of-range draws are clamped here, at generation time; the animator
    /// assumes stored parameters are valid and never re-validates per frame.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let tau = std::f32::consts::TAU;
        Self {
            time_offset: (rng.gen::<f32>() * tau).clamp(0.0, tau),
            drift_speed: (0.3 + rng.gen::<f32>() * 0.4).clamp(0.3, 0.7),
            drift_range_x: (2.0 + rng.gen::<f32>() * 3.0).clamp(2.0, 5.0),
            drift_range_z: (2.0 + rng.gen::<f32>() * 3.0).clamp(2.0, 5.0),
            bob_amount: (0.2 + rng.gen::<f32>() * 0.3).clamp(0.2, 0.5),
            bob_speed: (0.8 + rng.gen::<f32>() * 0.6).clamp(0.8, 1.4),
            size_variation: (0.85 + rng.gen::<f32>() * 0.3).clamp(0.85, 1.15),
            flicker_speed: (2.0 + rng.gen::<f32>() * 1.5).clamp(2.0, 3.5),
            wind_offset: (rng.gen::<f32>() * tau).clamp(0.0, tau),
        }
    }
}

/// Per-frame animator output handed to the render collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct LanternInstance {
    /// Authoritative transform for this frame
    pub transform: Transform,
    /// Flame glow intensity multiplier
    pub glow: f32,
    /// This lantern's palette color
    pub color: Color,
}

/// One floating wish-light
#[derive(Debug, Clone)]
pub struct Lantern {
    anchor: Vec3,
    params: MotionParams,
    color: Color,
    spawn_time: f32,
    settled_reported: bool,
}

impl Lantern {
    /// Create a lantern anchored at `anchor`, spawned at scene time `spawn_time`
    pub fn new<R: Rng + ?Sized>(anchor: Vec3, spawn_time: f32, rng: &mut R) -> Self {
        let params = MotionParams::generate(rng);
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        Self::with_params(anchor, spawn_time, params, color)
    }

    /// Create a lantern with explicit parameters (exact-trajectory tests)
    pub fn with_params(anchor: Vec3, spawn_time: f32, params: MotionParams, color: Color) -> Self {
        Self {
            anchor,
            params,
            color,
            spawn_time,
            settled_reported: false,
        }
    }

    /// The fixed point this lantern's drift oscillates around
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// The immutable motion parameters drawn at creation
    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    /// This lantern's palette color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Scene time at which this lantern was spawned
    pub fn spawn_time(&self) -> f32 {
        self.spawn_time
    }

    /// Spawn-in progress in [0, 1]; non-decreasing, 1 from `spawn_time + 0.5` on
    pub fn spawn_progress(&self, now: f32) -> f32 {
        ((now - self.spawn_time) / SPAWN_DURATION).clamp(0.0, 1.0)
    }

    /// Whether the lantern has entered its permanent steady state
    pub fn is_settled(&self, now: f32) -> bool {
        self.spawn_progress(now) >= 1.0
    }

    /// Returns `true` exactly once, on the first frame in steady state
    pub fn take_settled_signal(&mut self, now: f32) -> bool {
        if !self.settled_reported && self.is_settled(now) {
            self.settled_reported = true;
            return true;
        }
        false
    }

    /// Compute this frame's transform and glow; pure in `now`
    pub fn animate(&self, now: f32) -> LanternInstance {
        let p = &self.params;
        let time = now * p.drift_speed + p.time_offset;
        let sway = oscillator::wind_sway(now, p.wind_offset);

        // Two drift frequencies per horizontal axis so the path is a
        // non-repeating ellipse; sway couples neighbours to the wind phase.
        let position = Vec3::new(
            self.anchor.x + time.sin() * p.drift_range_x + sway,
            self.anchor.y + (time * p.bob_speed).sin() * p.bob_amount,
            self.anchor.z + (time * 0.7).cos() * p.drift_range_z,
        );

        let yaw = now * SPIN_RATE;
        let tilt = (time * 0.5).sin() * 0.1 + sway * 0.2;

        let progress = self.spawn_progress(now);
        let scale = if progress < 1.0 {
            progress * p.size_variation
        } else {
            p.size_variation * oscillator::breathing(now, p.flicker_speed, BREATHING_AMOUNT)
        };

        LanternInstance {
            transform: Transform::from_position_euler(position, Vec3::new(0.0, yaw, tilt))
                .with_uniform_scale(scale),
            glow: oscillator::flame_flicker(now),
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_lantern(spawn_time: f32) -> Lantern {
        let mut rng = StdRng::seed_from_u64(7);
        Lantern::new(Vec3::new(1.0, 0.5, -2.0), spawn_time, &mut rng)
    }

    #[test]
    fn test_params_within_distribution_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = MotionParams::generate(&mut rng);
            assert!((0.3..=0.7).contains(&p.drift_speed));
            assert!((2.0..=5.0).contains(&p.drift_range_x));
            assert!((2.0..=5.0).contains(&p.drift_range_z));
            assert!((0.2..=0.5).contains(&p.bob_amount));
            assert!((0.8..=1.4).contains(&p.bob_speed));
            assert!((0.85..=1.15).contains(&p.size_variation));
            assert!((2.0..=3.5).contains(&p.flicker_speed));
            assert!((0.0..=std::f32::consts::TAU).contains(&p.time_offset));
            assert!((0.0..=std::f32::consts::TAU).contains(&p.wind_offset));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(MotionParams::generate(&mut a), MotionParams::generate(&mut b));
    }

    #[test]
    fn test_animate_is_referentially_transparent() {
        let lantern = test_lantern(0.0);
        let first = lantern.animate(12.345);
        let second = lantern.animate(12.345);
        assert_eq!(first.transform, second.transform);
        assert_eq!(first.glow.to_bits(), second.glow.to_bits());
    }

    #[test]
    fn test_spawn_progress_monotone_and_bounded() {
        let lantern = test_lantern(2.0);

        assert_eq!(lantern.spawn_progress(2.0), 0.0);
        assert_eq!(lantern.spawn_progress(2.5), 1.0);
        assert_eq!(lantern.spawn_progress(100.0), 1.0);

        let mut previous = 0.0;
        let mut t = 2.0_f32;
        while t <= 2.5 {
            let progress = lantern.spawn_progress(t);
            assert!(progress >= previous, "spawn progress regressed at t={t}");
            previous = progress;
            t += 0.01;
        }
    }

    #[test]
    fn test_scale_ramps_then_breathes() {
        let lantern = test_lantern(0.0);
        let size = lantern.params().size_variation;

        // Mid-ramp: scale is the linear fraction of the final size.
        let mid = lantern.animate(0.25);
        assert_relative_eq!(mid.transform.scale.x, 0.5 * size, epsilon = 1e-5);

        // Steady state: scale breathes within ±3% of the final size.
        let mut t = 0.5_f32;
        while t < 10.0 {
            let scale = lantern.animate(t).transform.scale.x;
            assert!(scale >= size * (1.0 - 0.03 - 1e-5));
            assert!(scale <= size * (1.0 + 0.03 + 1e-5));
            t += 0.1;
        }
    }

    #[test]
    fn test_settled_signal_fires_exactly_once() {
        let mut lantern = test_lantern(1.0);

        assert!(!lantern.take_settled_signal(1.2));
        assert!(lantern.take_settled_signal(1.5));
        assert!(!lantern.take_settled_signal(1.6));
        assert!(!lantern.take_settled_signal(50.0));
    }

    #[test]
    fn test_drift_stays_within_param_envelope() {
        let lantern = test_lantern(0.0);
        let p = *lantern.params();
        let anchor = lantern.anchor();

        let mut t = 0.0_f32;
        while t < 60.0 {
            let position = lantern.animate(t).transform.position;
            // Max sway contribution is 0.3 on X.
            assert!((position.x - anchor.x).abs() <= p.drift_range_x + 0.3 + 1e-4);
            assert!((position.y - anchor.y).abs() <= p.bob_amount + 1e-4);
            assert!((position.z - anchor.z).abs() <= p.drift_range_z + 1e-4);
            t += 0.05;
        }
    }

    #[test]
    fn test_spin_is_monotone() {
        let lantern = test_lantern(0.0);
        let mut previous = f32::MIN;
        // Stay under a quarter turn so the Euler extraction is unambiguous.
        let mut t = 0.0_f32;
        while t < 8.0 {
            let (_, yaw, _) = lantern.animate(t).transform.rotation.euler_angles();
            assert!(yaw > previous, "yaw must increase monotonically");
            previous = yaw;
            t += 0.25;
        }
    }

    #[test]
    fn test_simultaneous_spawns_do_not_synchronize() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = Lantern::new(Vec3::zeros(), 0.0, &mut rng);
        let b = Lantern::new(Vec3::zeros(), 0.0, &mut rng);

        let pa = a.animate(4.0).transform.position;
        let pb = b.animate(4.0).transform.position;
        assert!((pa - pb).magnitude() > 1e-3, "same-frame lanterns moved in lockstep");
    }
}
