//! Performance-adaptive capacity monitor
//!
//! Counts frames over rolling one-second windows of scene time and adjusts
//! the lantern cap on each window boundary. Adjustment is asymmetric: load
//! is shed faster than it is restored. Lowering the cap never evicts live
//! lanterns; it only blocks future spawns.

use crate::config::CapacityConfig;

/// Rolling FPS estimator with a derived lantern budget
#[derive(Debug, Clone)]
pub struct CapacityMonitor {
    config: CapacityConfig,
    cap: usize,
    fps: f32,
    frames: u32,
    window_start: f32,
}

impl CapacityMonitor {
    /// Create a monitor starting at the configured initial cap
    pub fn new(config: CapacityConfig) -> Self {
        let cap = config.initial.clamp(config.floor, config.ceiling);
        Self {
            config,
            cap,
            fps: 0.0,
            frames: 0,
            window_start: 0.0,
        }
    }

    /// Record one frame at scene time `now`
    ///
    /// On each one-second window boundary the FPS estimate is refreshed and
    /// the cap adjusted.
    pub fn sample(&mut self, now: f32) {
        self.frames += 1;

        let elapsed = now - self.window_start;
        if elapsed < 1.0 {
            return;
        }

        self.fps = self.frames as f32 / elapsed;
        self.frames = 0;
        self.window_start = now;
        self.adjust();
    }

    fn adjust(&mut self) {
        let c = &self.config;
        if self.fps < c.low_fps && self.cap > c.floor {
            self.cap = self.cap.saturating_sub(c.shed_step).max(c.floor);
            log::warn!("performance: reducing lantern cap to {}", self.cap);
        } else if self.fps > c.high_fps && self.cap < c.ceiling {
            self.cap = (self.cap + c.restore_step).min(c.ceiling);
            log::debug!("performance: raising lantern cap to {}", self.cap);
        }
    }

    /// Latest FPS estimate (zero until the first window closes)
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Current lantern budget consumed by the collection manager
    pub fn max_lanterns(&self) -> usize {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Drive the monitor at a steady frame rate for `seconds` of scene time.
    fn run_at(monitor: &mut CapacityMonitor, fps: f32, seconds: f32, start: f32) -> f32 {
        let delta = 1.0 / fps;
        let mut now = start;
        let frames = (seconds * fps) as u32;
        for _ in 0..frames {
            now += delta;
            monitor.sample(now);
        }
        now
    }

    #[test]
    fn test_initial_cap() {
        let monitor = CapacityMonitor::new(CapacityConfig::default());
        assert_eq!(monitor.max_lanterns(), 30);
        assert_eq!(monitor.fps(), 0.0);
    }

    #[test]
    fn test_fps_estimate_after_one_window() {
        let mut monitor = CapacityMonitor::new(CapacityConfig::default());
        run_at(&mut monitor, 40.0, 1.5, 0.0);
        assert_relative_eq!(monitor.fps(), 40.0, epsilon = 1.0);
    }

    #[test]
    fn test_low_fps_sheds_load() {
        let mut monitor = CapacityMonitor::new(CapacityConfig::default());
        run_at(&mut monitor, 20.0, 1.1, 0.0);
        assert_eq!(monitor.max_lanterns(), 25);
    }

    #[test]
    fn test_high_fps_restores_slowly() {
        let mut monitor = CapacityMonitor::new(CapacityConfig::default());
        run_at(&mut monitor, 60.0, 1.1, 0.0);
        assert_eq!(monitor.max_lanterns(), 32);
    }

    #[test]
    fn test_mid_band_fps_leaves_cap_alone() {
        let mut monitor = CapacityMonitor::new(CapacityConfig::default());
        run_at(&mut monitor, 45.0, 5.0, 0.0);
        assert_eq!(monitor.max_lanterns(), 30);
    }

    #[test]
    fn test_cap_never_drops_below_floor() {
        let mut monitor = CapacityMonitor::new(CapacityConfig::default());
        run_at(&mut monitor, 10.0, 60.0, 0.0);
        assert_eq!(monitor.max_lanterns(), 10);
    }

    #[test]
    fn test_cap_never_exceeds_ceiling() {
        let mut monitor = CapacityMonitor::new(CapacityConfig::default());
        run_at(&mut monitor, 120.0, 60.0, 0.0);
        assert_eq!(monitor.max_lanterns(), 60);
    }

    #[test]
    fn test_shedding_is_faster_than_restoring() {
        let config = CapacityConfig::default();
        let mut slow = CapacityMonitor::new(config.clone());
        let mut fast = CapacityMonitor::new(config);

        run_at(&mut slow, 20.0, 2.2, 0.0);
        run_at(&mut fast, 60.0, 2.2, 0.0);

        let shed = 30 - slow.max_lanterns();
        let restored = fast.max_lanterns() - 30;
        assert!(shed > restored, "shed {shed} should outpace restore {restored}");
    }

    #[test]
    fn test_no_adjustment_before_window_closes() {
        let mut monitor = CapacityMonitor::new(CapacityConfig::default());
        // Plenty of frames, but less than a second of scene time.
        for i in 1..=50 {
            monitor.sample(i as f32 * 0.01);
        }
        assert_eq!(monitor.max_lanterns(), 30);
        assert_eq!(monitor.fps(), 0.0);
    }

    #[test]
    fn test_initial_cap_clamped_into_band() {
        let config = CapacityConfig {
            initial: 500,
            ..CapacityConfig::default()
        };
        let monitor = CapacityMonitor::new(config);
        assert_eq!(monitor.max_lanterns(), 60);
    }
}
