//! Frame timing fed by the host's frame driver
//!
//! The host rendering framework owns the real clock; the core only ever sees
//! the per-frame delta it is handed. Keeping `Instant` out of this type is
//! what makes whole-session replays deterministic.

/// Accumulates elapsed scene time from host-supplied frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock at time zero
    pub fn new() -> Self {
        Self {
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance by one frame (should be called once per display frame)
    ///
    /// Negative deltas are treated as zero so total time stays monotonic.
    pub fn advance(&mut self, delta_time: f32) {
        self.delta_time = delta_time.max(0.0);
        self.total_time += self.delta_time;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since clock creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since clock creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }

    /// Get the current FPS (based on last frame time)
    pub fn current_fps(&self) -> f32 {
        if self.delta_time > 0.0 {
            1.0 / self.delta_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clock_accumulates_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(0.016);
        clock.advance(0.016);

        assert_relative_eq!(clock.total_time(), 0.032, epsilon = 1e-6);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_negative_delta_keeps_time_monotonic() {
        let mut clock = FrameClock::new();
        clock.advance(0.02);
        clock.advance(-1.0);

        assert_relative_eq!(clock.total_time(), 0.02, epsilon = 1e-6);
        assert_eq!(clock.delta_time(), 0.0);
    }

    #[test]
    fn test_fps_helpers() {
        let mut clock = FrameClock::new();
        clock.advance(0.02);

        assert_relative_eq!(clock.current_fps(), 50.0, epsilon = 1e-4);
        assert_relative_eq!(clock.average_fps(), 50.0, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_time_fps_is_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.current_fps(), 0.0);
        assert_eq!(clock.average_fps(), 0.0);
    }
}
