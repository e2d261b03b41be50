//! Math utilities and types
//!
//! Provides fundamental math types for 3D scene composition, plus the
//! model-matrix composer used before every draw call.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Per-draw transform specification: scale, Euler rotation in degrees, and
/// position.
///
/// Constructed fresh for each drawn object and not retained; the composed
/// model matrix is what reaches the shader. Rotation is expressed in degrees
/// because that is how scene files author it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Scale factors along X, Y, Z
    pub scale: Vec3,

    /// Euler rotation angles in degrees, applied about X, then Y, then Z
    pub rotation_degrees: Vec3,

    /// Position in world space
    pub position: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation_degrees: Vec3::zeros(),
            position: Vec3::zeros(),
        }
    }
}

impl Transform {
    /// Create a transform from explicit scale, rotation (degrees), and position
    #[must_use]
    pub const fn new(scale: Vec3, rotation_degrees: Vec3, position: Vec3) -> Self {
        Self {
            scale,
            rotation_degrees,
            position,
        }
    }

    /// Create an identity transform
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only a position
    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Compose the model matrix from the independent scale, rotation, and
    /// translation parts.
    ///
    /// The composition order is fixed: `translate * rotate_x * rotate_y *
    /// rotate_z * scale`, translation outermost and scale innermost, so
    /// rotation happens about the object's local origin before it is moved
    /// into place. Callers that change this order will silently orbit
    /// objects around the world origin instead of spinning them in place.
    #[must_use]
    pub fn compose(&self) -> Mat4 {
        let scale = Mat4::new_nonuniform_scaling(&self.scale);
        let rotation_x = Mat4::rotation_x(self.rotation_degrees.x.to_radians());
        let rotation_y = Mat4::rotation_y(self.rotation_degrees.y.to_radians());
        let rotation_z = Mat4::rotation_z(self.rotation_degrees.z.to_radians());
        let translation = Mat4::new_translation(&self.position);

        translation * rotation_x * rotation_y * rotation_z * scale
    }

    /// Apply this transform to a point
    #[must_use]
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.compose().transform_point(&point)
    }
}

/// Extension trait for `Mat4` with axis-rotation constructors
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis (angle in radians)
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis (angle in radians)
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis (angle in radians)
    fn rotation_z(angle: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_compose() {
        let matrix = Transform::identity().compose();
        assert_relative_eq!(matrix, Mat4::identity(), epsilon = 1e-6);
    }

    #[test]
    fn test_pure_translation_moves_origin() {
        let transform = Transform::from_position(Vec3::new(5.0, 0.0, 0.0));
        let moved = transform.transform_point(Point3::origin());
        assert_relative_eq!(moved, Point3::new(5.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_compose_matches_explicit_product() {
        let transform = Transform::new(
            Vec3::new(2.0, 1.0, 0.5),
            Vec3::new(30.0, 45.0, 60.0),
            Vec3::new(1.0, -2.0, 3.0),
        );

        let expected = Mat4::new_translation(&Vec3::new(1.0, -2.0, 3.0))
            * Mat4::rotation_x(30.0_f32.to_radians())
            * Mat4::rotation_y(45.0_f32.to_radians())
            * Mat4::rotation_z(60.0_f32.to_radians())
            * Mat4::new_nonuniform_scaling(&Vec3::new(2.0, 1.0, 0.5));

        assert_relative_eq!(transform.compose(), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_applied_before_translation() {
        // A point on the X axis rotated 90 degrees about Y lands on -Z in
        // local space, and only then gets translated.
        let transform = Transform::new(
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 90.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        );
        let moved = transform.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(moved, Point3::new(10.0, 0.0, -1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_scale_applied_innermost() {
        // Scale happens in local space, before rotation: scaling X by 3 and
        // then rotating 90 degrees about Z sends (1,0,0) to (0,3,0).
        let transform = Transform::new(
            Vec3::new(3.0, 1.0, 1.0),
            Vec3::new(0.0, 0.0, 90.0),
            Vec3::zeros(),
        );
        let moved = transform.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(moved, Point3::new(0.0, 3.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_serde_round_trip() {
        let transform = Transform::new(
            Vec3::new(4.0, 1.0, 4.0),
            Vec3::new(180.0, 0.0, 0.0),
            Vec3::new(-5.0, 1.0, 2.0),
        );
        let text = ron::to_string(&transform).unwrap();
        let back: Transform = ron::from_str(&text).unwrap();
        assert_eq!(transform, back);
    }
}
