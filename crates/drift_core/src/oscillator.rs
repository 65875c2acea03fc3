//! Shared sine/cosine composition helpers
//!
//! Every animated entity builds its motion out of these functions rather
//! than an ad-hoc formula of its own. All of them are pure: the same
//! `(time, constants)` inputs return bit-identical outputs, which is what
//! makes trajectories directly assertable in tests.

/// A single sinusoid: `amplitude * sin(frequency * t + phase)`
pub fn sine(amplitude: f32, frequency: f32, phase: f32, t: f32) -> f32 {
    amplitude * (frequency * t + phase).sin()
}

/// A single cosinusoid: `amplitude * cos(frequency * t + phase)`
pub fn cosine(amplitude: f32, frequency: f32, phase: f32, t: f32) -> f32 {
    amplitude * (frequency * t + phase).cos()
}

/// Flame flicker as a sum of three incommensurate sinusoids
///
/// The frequencies (3, 7.3, 13.7) share no small common period, so the
/// combined signal reads as organic flicker rather than a visible pulse.
/// Output stays within `0.8 ± 0.17`.
pub fn flame_flicker(t: f32) -> f32 {
    0.8 + (t * 3.0).sin() * 0.1 + (t * 7.3).sin() * 0.05 + (t * 13.7).sin() * 0.02
}

/// Shared wind sway phase: `0.3 * sin(0.4 t + offset)`
///
/// All lanterns sample this with per-instance offsets near each other, so
/// neighbours sway coherently without ever locking into sync.
pub fn wind_sway(t: f32, offset: f32) -> f32 {
    sine(0.3, 0.4, offset, t)
}

/// Small multiplicative "breathing" oscillation around 1.0
pub fn breathing(t: f32, speed: f32, amount: f32) -> f32 {
    1.0 + (t * speed).sin() * amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sine_matches_closed_form() {
        let value = sine(2.5, 0.3, 1.0, 4.0);
        assert_relative_eq!(value, 2.5 * (0.3f32 * 4.0 + 1.0).sin(), epsilon = 1e-6);
    }

    #[test]
    fn test_referential_transparency() {
        // Bit-identical results on repeated calls with identical inputs.
        for t in [0.0_f32, 0.25, 1.75, 133.7] {
            assert_eq!(sine(1.2, 0.7, 0.3, t).to_bits(), sine(1.2, 0.7, 0.3, t).to_bits());
            assert_eq!(flame_flicker(t).to_bits(), flame_flicker(t).to_bits());
            assert_eq!(wind_sway(t, 0.9).to_bits(), wind_sway(t, 0.9).to_bits());
        }
    }

    #[test]
    fn test_flicker_stays_in_band() {
        let mut t = 0.0_f32;
        while t < 60.0 {
            let f = flame_flicker(t);
            assert!(f > 0.8 - 0.171 && f < 0.8 + 0.171, "flicker {f} out of band at t={t}");
            t += 0.01;
        }
    }

    #[test]
    fn test_wind_sway_bounds() {
        let mut t = 0.0_f32;
        while t < 30.0 {
            assert!(wind_sway(t, 1.3).abs() <= 0.3 + 1e-6);
            t += 0.05;
        }
    }

    #[test]
    fn test_breathing_oscillates_around_unity() {
        assert_relative_eq!(breathing(0.0, 2.0, 0.03), 1.0, epsilon = 1e-6);
        let peak = breathing(std::f32::consts::FRAC_PI_2 / 2.0, 2.0, 0.03);
        assert_relative_eq!(peak, 1.03, epsilon = 1e-6);
    }
}
