//! Object transform (position, rotation, scale)

use sandbox_math::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Position, rotation and per-axis scale of an object
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotation about the Y axis, in radians
    ///
    /// Exact for rotations built with [`Transform::set_rotation_y`].
    pub fn rotation_y(&self) -> f32 {
        self.rotation.to_euler(EulerRot::YXZ).0
    }

    pub fn set_rotation_y(&mut self, angle: f32) {
        self.rotation = Quat::from_rotation_y(angle);
    }

    /// Model matrix: scale, then rotate, then translate
    #[inline]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Transform a point from local space to world space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.rotation * (p * self.scale) + self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_identity_transform() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(Transform::identity().transform_point(p).abs_diff_eq(p, EPSILON));
    }

    #[test]
    fn test_scale_rotate_translate_order() {
        let mut t = Transform::from_position(Vec3::new(10.0, 0.0, 0.0)).with_scale(Vec3::new(2.0, 1.0, 1.0));
        t.set_rotation_y(FRAC_PI_2);
        // (1,0,0) scaled to (2,0,0), rotated to (0,0,-2), then moved
        let p = t.transform_point(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(10.0, 0.0, -2.0), EPSILON), "{:?}", p);
    }

    #[test]
    fn test_matrix_matches_transform_point() {
        let mut t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0)).with_scale(Vec3::splat(3.0));
        t.set_rotation_y(0.7);
        let p = Vec3::new(0.5, -1.0, 2.0);
        let via_matrix = t.to_matrix().transform_point3(p);
        assert!(via_matrix.abs_diff_eq(t.transform_point(p), EPSILON));
    }

    #[test]
    fn test_rotation_y_roundtrip() {
        let mut t = Transform::identity();
        t.set_rotation_y(1.25);
        assert!((t.rotation_y() - 1.25).abs() < EPSILON);
    }
}
