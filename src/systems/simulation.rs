//! Simulation system
//!
//! Manages the per-frame update:
//! - Delta time calculation
//! - Camera movement from the controller
//! - Fixed-timestep world stepping (edit fields, black hole, physics, transform sync)

use std::time::Instant;

use sandbox_core::{EditFields, ObjectKind, World};
use sandbox_input::CameraController;
use sandbox_math::Vec3;
use sandbox_render::Camera3D;

use crate::config::PhysicsConfig;

/// Result of a simulation update
#[derive(Debug, Default)]
pub struct SimulationResult {
    /// Clamped frame time in seconds
    pub dt: f32,
    /// Fixed steps run this frame
    pub steps: u32,
    /// Kinds of the objects the black hole consumed
    pub consumed: Vec<ObjectKind>,
    /// Camera position after movement, for the HUD
    pub camera_position: Vec3,
}

/// Runs the world at a fixed timestep regardless of frame rate
pub struct SimulationSystem {
    last_frame: Instant,
    accumulator: f32,
    fixed_timestep: f32,
    max_substeps: u32,
    max_frame_dt: f32,
}

impl SimulationSystem {
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            last_frame: Instant::now(),
            accumulator: 0.0,
            fixed_timestep: config.fixed_timestep.max(1e-4),
            max_substeps: config.max_substeps.max(1),
            max_frame_dt: config.max_frame_dt.max(config.fixed_timestep),
        }
    }

    /// Run one frame using wall-clock time since the previous call
    pub fn update(
        &mut self,
        world: &mut World,
        camera: &mut Camera3D,
        controller: &mut CameraController,
        edit: Option<&EditFields>,
    ) -> SimulationResult {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.tick(world, camera, controller, edit, raw_dt)
    }

    /// Run one frame of `raw_dt` seconds
    pub fn tick(
        &mut self,
        world: &mut World,
        camera: &mut Camera3D,
        controller: &mut CameraController,
        edit: Option<&EditFields>,
        raw_dt: f32,
    ) -> SimulationResult {
        // Cap dt so a stall (first frame, window drag) doesn't fast-forward the world
        let dt = raw_dt.clamp(0.0, self.max_frame_dt);

        let camera_position = controller.update(camera, dt);

        let steps = self.advance(dt);
        let mut consumed = Vec::new();
        for _ in 0..steps {
            if let (Some(key), Some(fields)) = (world.selected(), edit) {
                world.apply_edit(key, fields);
            }
            consumed.extend(world.step(self.fixed_timestep));
        }

        if !consumed.is_empty() {
            log::info!("Black hole consumed {} object(s)", consumed.len());
        }

        SimulationResult {
            dt,
            steps,
            consumed,
            camera_position,
        }
    }

    /// Add `dt` to the accumulator and return how many fixed steps to run
    ///
    /// Time beyond `max_substeps` steps is dropped.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;
        let mut steps = 0;
        while self.accumulator >= self.fixed_timestep && steps < self.max_substeps {
            self.accumulator -= self.fixed_timestep;
            steps += 1;
        }
        if steps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.fixed_timestep);
        }
        steps
    }

    /// Forget time accumulated before a pause
    pub fn reset_clock(&mut self) {
        self.last_frame = Instant::now();
        self.accumulator = 0.0;
    }

    pub fn fixed_timestep(&self) -> f32 {
        self.fixed_timestep
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(&PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbox_core::{BlackHole, Color};
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_one_step_per_60hz_frame() {
        let mut sim = SimulationSystem::default();
        let total: u32 = (0..60).map(|_| sim.advance(FRAME + 1e-6)).sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn test_fast_frames_accumulate() {
        let mut sim = SimulationSystem::default();
        assert_eq!(sim.advance(FRAME / 2.0), 0);
        assert_eq!(sim.advance(FRAME / 2.0 + 1e-6), 1);
    }

    #[test]
    fn test_substeps_bounded() {
        let mut sim = SimulationSystem::default();
        assert_eq!(sim.advance(10.0), 5);
        // The backlog is dropped rather than replayed
        assert!(sim.advance(0.0) <= 1);
    }

    #[test]
    fn test_tick_caps_dt_and_moves_camera() {
        let mut sim = SimulationSystem::default();
        let mut world = World::new();
        let mut camera = Camera3D::new();
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);

        let result = sim.tick(&mut world, &mut camera, &mut controller, None, 5.0);
        assert_eq!(result.dt, 0.1);
        // 240 u/s for 0.1 s along -Z
        assert!((result.camera_position.z - 76.0).abs() < 1e-3);
        assert_eq!(result.camera_position, camera.position);
    }

    #[test]
    fn test_tick_applies_edit_to_selection() {
        let mut sim = SimulationSystem::default();
        let mut world = World::new();
        let key = world.spawn(ObjectKind::Cube, Color::WHITE, Vec3::new(0.0, 5.1, 0.0)).unwrap();
        world.select(key);
        let fields = EditFields {
            position: Vec3::new(30.0, 40.0, 0.0),
            ..world.edit_fields(key).unwrap()
        };

        let mut camera = Camera3D::new();
        let mut controller = CameraController::new();
        for _ in 0..10 {
            sim.tick(&mut world, &mut camera, &mut controller, Some(&fields), FRAME + 1e-6);
        }
        let pos = world.get(key).unwrap().transform.position;
        assert!((pos.x - 30.0).abs() < 1e-3);
        assert!((pos.y - 40.0).abs() < 0.1);
    }

    #[test]
    fn test_consumed_objects_reported() {
        let mut sim = SimulationSystem::default();
        let mut world = World::new().with_black_hole(BlackHole {
            enabled: true,
            position: Vec3::new(0.0, 20.0, 0.0),
            strength: 20000.0,
            capture_radius: 10.0,
        });
        world.spawn(ObjectKind::Sphere, Color::WHITE, Vec3::new(0.0, 25.0, 0.0)).unwrap();

        let mut camera = Camera3D::new();
        let mut controller = CameraController::new();
        let result = sim.tick(&mut world, &mut camera, &mut controller, None, FRAME + 1e-6);
        assert_eq!(result.consumed, vec![ObjectKind::Sphere]);
        assert!(world.is_empty());
    }
}
