//! Input handling for the sandbox fly camera
//!
//! WASD flies along the view direction and dragging with the right mouse
//! button turns the camera.

mod camera_controller;

pub use camera_controller::{CameraControl, CameraController, DEFAULT_LOOK_SENSITIVITY, DEFAULT_MOVE_SPEED};
