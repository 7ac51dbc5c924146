//! Math utilities and types
//!
//! Provides fundamental math types for scene nodes and lights.

pub use nalgebra::{
    Vector3,
    Matrix4,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Node transform: position, Euler rotation in degrees and scale
///
/// Rotation is kept as the three Euler angles the node was given so they
/// read back exactly as set. The quaternion is derived on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position relative to the parent node
    pub position: Vec3,

    /// Euler rotation in degrees (x = pitch, y = yaw, z = roll)
    pub rotation_degrees: Vec3,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation_degrees: Vec3::zeros(),
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

    /// Rotation quaternion for the stored Euler angles
    pub fn rotation(&self) -> Quat {
        utils::quat_from_euler_degrees(self.rotation_degrees)
    }

    /// Convert to a transformation matrix (translation * rotation * scale)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation().to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Quat, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Build a rotation from Euler angles in degrees.
    ///
    /// X is applied first, then Y, then Z. The Z angle is negated so that a
    /// positive roll turns clockwise, matching the 2D node convention.
    pub fn quat_from_euler_degrees(degrees: Vec3) -> Quat {
        Quat::from_euler_angles(
            deg_to_rad(degrees.x),
            deg_to_rad(degrees.y),
            -deg_to_rad(degrees.z),
        )
    }

    /// Negated third column of a transform matrix.
    ///
    /// This is the node's local -Z axis expressed in the matrix's target
    /// space, the forward direction of lights and cameras.
    pub fn forward_from_matrix(matrix: &super::Mat4) -> Vec3 {
        Vec3::new(-matrix[(0, 2)], -matrix[(1, 2)], -matrix[(2, 2)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_transform_matrix() {
        assert_relative_eq!(Transform::identity().to_matrix(), Mat4::identity());
    }

    #[test]
    fn test_yaw_turns_forward_toward_negative_x() {
        let transform = Transform {
            rotation_degrees: Vec3::new(0.0, 90.0, 0.0),
            ..Default::default()
        };

        let forward = utils::forward_from_matrix(&transform.to_matrix());
        assert_relative_eq!(forward, Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_pitch_applied_before_yaw() {
        // Pitch up 90 degrees then yaw: forward stays pointing up
        let transform = Transform {
            rotation_degrees: Vec3::new(90.0, 45.0, 0.0),
            ..Default::default()
        };

        let forward = utils::forward_from_matrix(&transform.to_matrix());
        assert_relative_eq!(forward, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_translation_lands_in_fourth_column() {
        let transform = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let matrix = transform.to_matrix();

        assert_relative_eq!(matrix[(0, 3)], 1.0);
        assert_relative_eq!(matrix[(1, 3)], 2.0);
        assert_relative_eq!(matrix[(2, 3)], 3.0);
    }

    #[test]
    fn test_degree_conversions() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI);
        assert_relative_eq!(utils::rad_to_deg(constants::PI / 2.0), 90.0);
    }
}
