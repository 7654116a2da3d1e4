//! Fly-camera controller
//!
//! Controls:
//! - W/S: Forward/backward along the view direction (including vertical)
//! - A/D: Left/right strafe
//! - Right-click + drag: Turn (yaw) and look up/down (pitch)

use sandbox_math::Vec3;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Units per second; 4 units per frame at 60 fps
pub const DEFAULT_MOVE_SPEED: f32 = 240.0;
/// Radians per pixel of mouse movement
pub const DEFAULT_LOOK_SENSITIVITY: f32 = 0.003;

/// Camera controller for handling input
pub struct CameraController {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,

    // Right mouse button held
    looking: bool,
    pending_dx: f32,
    pending_dy: f32,

    smooth_dx: f32,
    smooth_dy: f32,

    pub move_speed: f32,
    pub look_sensitivity: f32,
    pub smoothing_half_life: f32, // seconds
    pub smoothing_enabled: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            forward: false,
            backward: false,
            left: false,
            right: false,

            looking: false,
            pending_dx: 0.0,
            pending_dy: 0.0,

            smooth_dx: 0.0,
            smooth_dy: 0.0,

            move_speed: DEFAULT_MOVE_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            smoothing_half_life: 0.05,
            smoothing_enabled: false,
        }
    }

    /// Process keyboard input, returning true if the key was consumed
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyW => { self.forward = pressed; true }
            KeyCode::KeyS => { self.backward = pressed; true }
            KeyCode::KeyA => { self.left = pressed; true }
            KeyCode::KeyD => { self.right = pressed; true }
            _ => false,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Right {
            self.looking = state == ElementState::Pressed;
            if !self.looking {
                self.pending_dx = 0.0;
                self.pending_dy = 0.0;
            }
        }
    }

    /// Process raw mouse movement; only counts while the right button is held
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.looking {
            self.pending_dx += delta_x as f32;
            self.pending_dy += delta_y as f32;
        }
    }

    /// Release every held key and button (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.forward = false;
        self.backward = false;
        self.left = false;
        self.right = false;
        self.looking = false;
        self.pending_dx = 0.0;
        self.pending_dy = 0.0;
    }

    /// Apply accumulated input to the camera
    ///
    /// Returns the camera position for the HUD.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C, dt: f32) -> Vec3 {
        let (fwd, rgt) = self.movement_input();
        if fwd != 0.0 || rgt != 0.0 {
            let step = self.move_speed * dt;
            camera.move_local(fwd * step, rgt * step);
        }

        let (dx, dy) = if self.smoothing_enabled && dt > 0.0 {
            // factor = 2^(-dt / half_life)
            let factor = 2.0f32.powf(-dt / self.smoothing_half_life);
            self.smooth_dx = self.smooth_dx * factor + self.pending_dx * (1.0 - factor);
            self.smooth_dy = self.smooth_dy * factor + self.pending_dy * (1.0 - factor);
            (self.smooth_dx, self.smooth_dy)
        } else {
            (self.pending_dx, self.pending_dy)
        };

        // Dragging right turns right, dragging down looks down
        if dx != 0.0 || dy != 0.0 {
            camera.rotate(-dx * self.look_sensitivity, -dy * self.look_sensitivity);
        }

        self.pending_dx = 0.0;
        self.pending_dy = 0.0;

        camera.position()
    }

    /// (forward, right), each in -1.0..=1.0
    pub fn movement_input(&self) -> (f32, f32) {
        let forward = (self.forward as i32 - self.backward as i32) as f32;
        let right = (self.right as i32 - self.left as i32) as f32;
        (forward, right)
    }

    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    pub fn is_looking(&self) -> bool {
        self.looking
    }

    /// Toggle input smoothing on/off
    pub fn toggle_smoothing(&mut self) -> bool {
        self.smoothing_enabled = !self.smoothing_enabled;
        self.smooth_dx = 0.0;
        self.smooth_dy = 0.0;
        self.smoothing_enabled
    }

    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    pub fn with_look_sensitivity(mut self, sensitivity: f32) -> Self {
        self.look_sensitivity = sensitivity;
        self
    }

    pub fn with_smoothing(mut self, enabled: bool) -> Self {
        self.smoothing_enabled = enabled;
        self
    }
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    /// Move along the view direction and the camera's right vector
    fn move_local(&mut self, forward: f32, right: f32);
    /// Add to yaw and pitch, in radians
    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32);
    fn position(&self) -> Vec3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockCamera {
        position: Vec3,
        yaw: f32,
        pitch: f32,
    }

    impl CameraControl for MockCamera {
        fn move_local(&mut self, forward: f32, right: f32) {
            self.position += Vec3::new(right, 0.0, -forward);
        }

        fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
            self.yaw += delta_yaw;
            self.pitch += delta_pitch;
        }

        fn position(&self) -> Vec3 {
            self.position
        }
    }

    #[test]
    fn test_w_moves_forward_at_speed() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::default();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);

        let pos = controller.update(&mut camera, 0.5);
        assert!((pos.z + 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        assert_eq!(controller.movement_input(), (0.0, 0.0));
        assert!(controller.is_moving());
    }

    #[test]
    fn test_unhandled_key_not_consumed() {
        let mut controller = CameraController::new();
        assert!(!controller.process_keyboard(KeyCode::KeyQ, ElementState::Pressed));
    }

    #[test]
    fn test_mouse_motion_needs_right_button() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::default();

        controller.process_mouse_motion(100.0, 0.0);
        controller.update(&mut camera, 0.016);
        assert_eq!(camera.yaw, 0.0);

        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.process_mouse_motion(100.0, -50.0);
        controller.update(&mut camera, 0.016);
        assert!((camera.yaw + 0.3).abs() < 1e-5);
        assert!((camera.pitch - 0.15).abs() < 1e-5);
    }

    #[test]
    fn test_release_all_stops_motion() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        controller.release_all();
        assert!(!controller.is_moving());
        assert!(!controller.is_looking());
    }

    #[test]
    fn test_toggle_smoothing() {
        let mut controller = CameraController::new();
        assert!(controller.toggle_smoothing());
        assert!(!controller.toggle_smoothing());
    }
}
