//! Math utilities and types
//!
//! Provides the fundamental math types every animator produces and consumes.

pub use nalgebra::{Quaternion, Unit, UnitQuaternion, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
///
/// This is the sole per-frame output of every animator: each update pass
/// overwrites the previous frame's transform in full, so there is no
/// incremental transform state to drift out of sync.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform from position and Euler angles (roll, pitch, yaw)
    pub fn from_position_euler(position: Vec3, euler: Vec3) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::from_euler_angles(euler.x, euler.y, euler.z),
            ..Default::default()
        }
    }

    /// Set a uniform scale on all three axes
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_default_is_identity() {
        let transform = Transform::default();

        assert_eq!(transform.position, Vec3::zeros());
        assert_eq!(transform.rotation, Quat::identity());
        assert_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_from_position_euler() {
        let position = Vec3::new(1.0, 2.0, 3.0);
        let transform = Transform::from_position_euler(position, Vec3::new(0.0, 0.5, 0.0));

        assert_eq!(transform.position, position);
        let (roll, pitch, yaw) = transform.rotation.euler_angles();
        assert_relative_eq!(roll, 0.0, epsilon = 1e-6);
        assert_relative_eq!(pitch, 0.5, epsilon = 1e-6);
        assert_relative_eq!(yaw, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_uniform_scale() {
        let transform = Transform::identity().with_uniform_scale(0.85);
        assert_eq!(transform.scale, Vec3::new(0.85, 0.85, 0.85));
    }
}
