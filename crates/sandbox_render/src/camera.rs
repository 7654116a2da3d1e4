//! Fly camera
//!
//! Orientation is built from yaw and pitch with Euler order YXZ: yaw turns
//! about world Y, pitch tilts about the camera's X axis. Pitch stays within
//! ±1.5 rad so the view never flips over the pole.

use sandbox_input::CameraControl;
use sandbox_math::{EulerRot, Mat4, Quat, Ray, Vec3};

/// Pitch limit in radians
pub const PITCH_LIMIT: f32 = 1.5;

/// Perspective fly camera
#[derive(Clone, Debug)]
pub struct Camera3D {
    pub position: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,

    yaw: f32,
    pitch: f32,
    orientation: Quat,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera3D {
    /// Camera at (100, 100, 100) looking down -Z, fov 75°, near 0.1, far 50000
    pub fn new() -> Self {
        Self {
            position: Vec3::new(100.0, 100.0, 100.0),
            fov_degrees: 75.0,
            near: 0.1,
            far: 50000.0,
            yaw: 0.0,
            pitch: 0.0,
            orientation: Quat::IDENTITY,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_projection(mut self, fov_degrees: f32, near: f32, far: f32) -> Self {
        self.fov_degrees = fov_degrees;
        self.near = near;
        self.far = far;
        self
    }

    pub fn with_angles(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.rebuild_orientation();
        self
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Add to yaw and pitch (radians); pitch is clamped
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.rebuild_orientation();
    }

    /// Move along the full view direction (vertical part included) and the right vector
    pub fn move_local(&mut self, forward: f32, right: f32) {
        self.position += self.forward() * forward + self.right() * right;
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Ray from the eye through the center of the screen
    pub fn center_ray(&self) -> Ray {
        Ray::new(self.position, self.forward())
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }

    /// Right-handed perspective with wgpu's 0..1 depth range
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), aspect.max(1e-4), self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn rebuild_orientation(&mut self) {
        self.orientation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0).normalize();
    }
}

impl CameraControl for Camera3D {
    fn move_local(&mut self, forward: f32, right: f32) {
        Camera3D::move_local(self, forward, right);
    }

    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        Camera3D::rotate(self, delta_yaw, delta_pitch);
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbox_math::{Plane, Vec4};
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_camera_defaults() {
        let cam = Camera3D::new();
        assert_eq!(cam.position, Vec3::new(100.0, 100.0, 100.0));
        assert_eq!(cam.fov_degrees, 75.0);
        assert!(approx(cam.forward(), Vec3::NEG_Z));
    }

    #[test]
    fn test_pitch_clamped() {
        let mut cam = Camera3D::new();
        cam.rotate(0.0, 10.0);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        cam.rotate(0.0, -10.0);
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn test_yaw_turns_left_for_positive_angle() {
        let cam = Camera3D::new().with_angles(FRAC_PI_2, 0.0);
        assert!(approx(cam.forward(), Vec3::NEG_X));
        assert!(approx(cam.right(), Vec3::NEG_Z));
    }

    #[test]
    fn test_move_follows_pitch() {
        let mut cam = Camera3D::new().with_position(Vec3::ZERO).with_angles(0.0, -FRAC_PI_2 * 0.5);
        cam.move_local(10.0, 0.0);
        assert!(cam.position.y < -7.0);
        assert!(cam.position.z < -7.0);
    }

    #[test]
    fn test_center_ray_hits_ground() {
        // Looking straight down from (100, 100, 100)
        let cam = Camera3D::new().with_angles(0.0, -PITCH_LIMIT);
        let hit = cam.center_ray().intersect_plane_point(&Plane::horizontal(0.0)).unwrap();
        assert!((hit.y).abs() < 1e-3);
        assert!((hit.x - 100.0).abs() < 1e-3);
        assert!(hit.z < 100.0 && hit.z > 90.0);
    }

    #[test]
    fn test_level_camera_misses_ground() {
        let cam = Camera3D::new();
        assert!(cam.center_ray().intersect_plane(&Plane::horizontal(0.0)).is_none());
    }

    #[test]
    fn test_point_ahead_projects_to_center() {
        let cam = Camera3D::new().with_angles(0.7, -0.4);
        let target = cam.position + cam.forward() * 50.0;
        let clip = cam.view_projection(16.0 / 9.0) * Vec4::new(target.x, target.y, target.z, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_camera_control_trait() {
        let mut cam = Camera3D::new();
        CameraControl::rotate(&mut cam, 0.1, 0.0);
        assert_eq!(cam.yaw(), 0.1);
        assert_eq!(CameraControl::position(&cam), cam.position);
    }
}
