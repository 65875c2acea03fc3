//! Parallax cloud layer
//!
//! Sixteen decorative billboards anchored in three altitude bands. Each
//! cloud perturbs its anchor with a slow sinusoid on X and Z only; Y never
//! moves, so depth ordering against the lanterns is stable for the session.

use rand::Rng;

use crate::foundation::math::Vec3;

/// Fixed cloud anchors: a mid band at lantern level, a low band just above
/// the water, and a high band for sky depth.
pub const ANCHORS: [[f32; 3]; 16] = [
    // Mid band
    [-10.0, 3.0, -15.0],
    [5.0, 3.4, -10.0],
    [0.0, 2.6, -5.0],
    [8.0, 3.2, 0.0],
    [-7.0, 3.6, 5.0],
    [12.0, 3.1, -8.0],
    [-14.0, 2.9, -4.0],
    [6.0, 3.5, 7.0],
    // Low band
    [4.0, 1.8, -12.0],
    [-6.0, 1.6, -9.0],
    [10.0, 1.9, -6.0],
    [-11.0, 1.7, -3.0],
    // High band
    [0.0, 6.5, -18.0],
    [9.0, 7.0, -14.0],
    [-9.0, 6.8, -16.0],
    [3.0, 7.2, -20.0],
];

/// Immutable per-cloud drift and billboard parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudParams {
    /// Drift frequency on X
    pub speed_x: f32,
    /// Drift frequency on Z
    pub speed_z: f32,
    /// Drift amplitude on both horizontal axes
    pub drift: f32,
    /// Billboard opacity
    pub opacity: f32,
    /// Billboard width
    pub width: f32,
    /// Billboard depth
    pub depth: f32,
}

impl CloudParams {
    /// Draw per-cloud parameters, clamped at generation
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            speed_x: (0.05 + rng.gen::<f32>() * 0.03).clamp(0.05, 0.08),
            speed_z: (0.04 + rng.gen::<f32>() * 0.03).clamp(0.04, 0.07),
            drift: (0.6 + rng.gen::<f32>() * 0.4).clamp(0.6, 1.0),
            opacity: (0.15 + rng.gen::<f32>() * 0.1).clamp(0.15, 0.25),
            width: (8.0 + rng.gen::<f32>() * 4.0).clamp(8.0, 12.0),
            depth: (3.0 + rng.gen::<f32>() * 2.0).clamp(3.0, 5.0),
        }
    }
}

/// Per-frame billboard output for the render collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct CloudBillboard {
    /// Billboard center this frame
    pub position: Vec3,
    /// Billboard width
    pub width: f32,
    /// Billboard depth
    pub depth: f32,
    /// Billboard opacity
    pub opacity: f32,
}

/// One drifting cloud
#[derive(Debug, Clone)]
pub struct Cloud {
    anchor: Vec3,
    params: CloudParams,
}

impl Cloud {
    /// Create a cloud at `anchor` with parameters drawn from `rng`
    pub fn new<R: Rng + ?Sized>(anchor: Vec3, rng: &mut R) -> Self {
        Self {
            anchor,
            params: CloudParams::generate(rng),
        }
    }

    /// The fixed anchor this cloud drifts around
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Billboard state at elapsed time `t`; pure
    pub fn billboard(&self, t: f32) -> CloudBillboard {
        let p = &self.params;
        CloudBillboard {
            position: Vec3::new(
                self.anchor.x + (t * p.speed_x).sin() * p.drift,
                self.anchor.y,
                self.anchor.z + (t * p.speed_z).cos() * p.drift,
            ),
            width: p.width,
            depth: p.depth,
            opacity: p.opacity,
        }
    }
}

/// The full decorative cloud layer
#[derive(Debug, Clone)]
pub struct CloudLayer {
    clouds: Vec<Cloud>,
}

impl CloudLayer {
    /// Build the layer over the fixed anchors
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let clouds = ANCHORS
            .iter()
            .map(|&[x, y, z]| Cloud::new(Vec3::new(x, y, z), rng))
            .collect();
        Self { clouds }
    }

    /// Number of clouds in the layer
    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    /// Whether the layer is empty
    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    /// Iterate the clouds
    pub fn iter(&self) -> impl Iterator<Item = &Cloud> {
        self.clouds.iter()
    }

    /// Billboard states for all clouds at elapsed time `t`
    pub fn billboards(&self, t: f32) -> Vec<CloudBillboard> {
        self.clouds.iter().map(|c| c.billboard(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn layer(seed: u64) -> CloudLayer {
        let mut rng = StdRng::seed_from_u64(seed);
        CloudLayer::new(&mut rng)
    }

    #[test]
    fn test_layer_covers_all_anchors() {
        let layer = layer(1);
        assert_eq!(layer.len(), 16);
        for (cloud, anchor) in layer.iter().zip(ANCHORS.iter()) {
            assert_eq!(cloud.anchor(), Vec3::new(anchor[0], anchor[1], anchor[2]));
        }
    }

    #[test]
    fn test_altitude_never_changes() {
        let layer = layer(2);
        let mut t = 0.0_f32;
        while t < 120.0 {
            for (billboard, cloud) in layer.billboards(t).iter().zip(layer.iter()) {
                assert_eq!(billboard.position.y, cloud.anchor().y);
            }
            t += 1.7;
        }
    }

    #[test]
    fn test_drift_bounded_by_amplitude() {
        let layer = layer(3);
        let mut t = 0.0_f32;
        while t < 200.0 {
            for (billboard, cloud) in layer.billboards(t).iter().zip(layer.iter()) {
                let anchor = cloud.anchor();
                // Drift amplitude caps at 1.0.
                assert!((billboard.position.x - anchor.x).abs() <= 1.0 + 1e-5);
                assert!((billboard.position.z - anchor.z).abs() <= 1.0 + 1e-5);
            }
            t += 2.3;
        }
    }

    #[test]
    fn test_billboard_is_pure() {
        let layer = layer(4);
        let first = layer.billboards(42.0);
        let second = layer.billboards(42.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_params_within_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let p = CloudParams::generate(&mut rng);
            assert!((0.05..=0.08).contains(&p.speed_x));
            assert!((0.04..=0.07).contains(&p.speed_z));
            assert!((0.6..=1.0).contains(&p.drift));
            assert!((0.15..=0.25).contains(&p.opacity));
        }
    }

    #[test]
    fn test_anchor_at_zero_time() {
        // sin(0) = 0 on X, cos(0) = 1 on Z: Z starts offset by the full drift.
        let layer = layer(5);
        for (billboard, cloud) in layer.billboards(0.0).iter().zip(layer.iter()) {
            let anchor = cloud.anchor();
            assert_relative_eq!(billboard.position.x, anchor.x, epsilon = 1e-6);
            assert!(billboard.position.z > anchor.z);
        }
    }
}
