//! Camera controller
//!
//! A three-state machine switched only by explicit user action, never by
//! internal logic. Follow and free drift are procedural; orbit hands the
//! pose to the host's drag interaction and suspends the procedural rule
//! without resetting its state, so leaving orbit resumes smoothly from
//! wherever the orbit left the camera.

use crate::config::CameraConfig;
use crate::foundation::math::Vec3;
use crate::oscillator;

/// Camera behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Track the most recently spawned lantern
    Follow,
    /// Constant forward advance with lateral sway
    FreeDrift,
    /// Pose fully delegated to the host's orbit interaction
    Orbit,
}

/// Mode-based camera rig computing position and look target each frame
#[derive(Debug, Clone)]
pub struct CameraRig {
    config: CameraConfig,
    orbit_active: bool,
    auto_follow: bool,
    position: Vec3,
    look_target: Vec3,
}

impl CameraRig {
    /// Create a rig at the session's initial pose
    pub fn new(config: CameraConfig) -> Self {
        let base_height = config.base_height;
        Self {
            config,
            orbit_active: false,
            auto_follow: true,
            position: Vec3::new(0.0, base_height + 0.5, 12.0),
            look_target: Vec3::new(0.0, 0.5, -10.0),
        }
    }

    /// Current mode, derived from the orbit and auto-follow switches
    pub fn mode(&self) -> CameraMode {
        if self.orbit_active {
            CameraMode::Orbit
        } else if self.auto_follow {
            CameraMode::Follow
        } else {
            CameraMode::FreeDrift
        }
    }

    /// Toggle between the procedural modes and orbit
    pub fn cycle_mode(&mut self) {
        self.orbit_active = !self.orbit_active;
        log::debug!("camera mode now {:?}", self.mode());
    }

    /// Enable or disable auto-follow; has no effect while in orbit
    pub fn set_auto_follow(&mut self, on: bool) {
        if !self.orbit_active {
            self.auto_follow = on;
        }
    }

    /// Whether auto-follow is currently enabled
    pub fn auto_follow(&self) -> bool {
        self.auto_follow
    }

    /// Write the orbit interaction's pose; ignored outside orbit mode
    ///
    /// The pose is clamped against the configured distance and polar-angle
    /// bounds before being stored.
    pub fn set_orbit_pose(&mut self, position: Vec3, target: Vec3) {
        if !self.orbit_active {
            return;
        }

        let offset = position - target;
        let distance = offset.magnitude();
        if distance <= f32::EPSILON {
            return;
        }

        let orbit = &self.config.orbit;
        let clamped_distance = distance.clamp(orbit.min_distance, orbit.max_distance);
        let direction = offset / distance;
        let polar = direction.y.clamp(-1.0, 1.0).acos();
        let clamped_polar = polar.clamp(orbit.min_polar, orbit.max_polar);
        let azimuth = direction.z.atan2(direction.x);

        let direction = Vec3::new(
            clamped_polar.sin() * azimuth.cos(),
            clamped_polar.cos(),
            clamped_polar.sin() * azimuth.sin(),
        );
        self.position = target + direction * clamped_distance;
        self.look_target = target;
    }

    /// Advance the procedural rule by one frame
    ///
    /// `newest_anchor` is the anchor of the most recently spawned lantern,
    /// if any; follow mode falls back to forward drift without one. Runs
    /// after all entity writers in the frame, and not at all during orbit.
    pub fn update(&mut self, t: f32, newest_anchor: Option<Vec3>) {
        if self.orbit_active {
            return;
        }

        let c = &self.config;
        if let Some(anchor) = newest_anchor.filter(|_| self.auto_follow) {
            // Discrete low-pass toward the desired offset pose; no spring,
            // no overshoot for any smoothing factor below 1.
            let desired_x = anchor.x + c.side_offset;
            let desired_z = anchor.z + c.back_offset;
            self.position.x += (desired_x - self.position.x) * c.smoothing;
            self.position.z += (desired_z - self.position.z) * c.smoothing;
            self.look_target = Vec3::new(anchor.x - 3.0, 1.0, anchor.z - 5.0);
        } else {
            self.position.z -= c.drift_rate;
            self.position.x += oscillator::sine(0.005, 0.2, 0.0, t);
            self.look_target = Vec3::new(0.0, 0.5, -10.0);
        }

        self.position.y = c.base_height + oscillator::sine(c.breathe_amount, c.breathe_speed, 0.0, t);
    }

    /// Current camera position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current look target
    pub fn look_target(&self) -> Vec3 {
        self.look_target
    }
}
