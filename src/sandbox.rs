//! Sandbox application state
//!
//! Owns the world, camera and panel state and carries out input actions
//! and panel commands. Nothing here touches the window or the GPU.

use log::{info, warn};
use sandbox_core::{load_world, save_world, ObjectKey, SpawnError, World};
use sandbox_input::CameraController;
use sandbox_math::Vec3;
use sandbox_render::Camera3D;

use crate::config::AppConfig;
use crate::input::{InputAction, InputContext};
use crate::systems::{SimulationResult, SimulationSystem};
use crate::ui::{StudioState, UiCommand};

/// Something only the window owner can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRequest {
    Exit,
    ToggleFullscreen,
    /// The mode or language changed; refresh the title
    UpdateTitle,
}

pub struct Sandbox {
    pub world: World,
    pub camera: Camera3D,
    pub controller: CameraController,
    pub studio: StudioState,
    simulation: SimulationSystem,
}

impl Sandbox {
    pub fn from_config(config: &AppConfig) -> Self {
        let world = World::with_physics(config.physics.to_world_config())
            .with_black_hole(config.black_hole.to_black_hole())
            .with_max_objects(config.sandbox.max_objects);

        let camera = Camera3D::new()
            .with_position(Vec3::from_array(config.camera.start_position))
            .with_projection(config.camera.fov, config.camera.near, config.camera.far)
            .with_angles(config.camera.start_yaw, config.camera.start_pitch);

        let mut controller = CameraController::new()
            .with_move_speed(config.input.move_speed)
            .with_look_sensitivity(config.input.mouse_sensitivity)
            .with_smoothing(config.input.smoothing_enabled);
        controller.smoothing_half_life = config.input.smoothing_half_life;

        let studio = StudioState::new(
            config.sandbox.language,
            config.sandbox.default_color,
            config.sandbox.scene_path.clone(),
        );

        Self {
            world,
            camera,
            controller,
            studio,
            simulation: SimulationSystem::new(&config.physics),
        }
    }

    /// What the input mapper needs to know about the UI
    pub fn input_context(&self, ui_wants_input: bool) -> InputContext {
        InputContext {
            edit_mode: self.studio.edit_mode,
            alert_open: self.studio.has_alert(),
            ui_wants_input,
        }
    }

    /// Carry out a mapped input action
    pub fn handle_action(&mut self, action: InputAction) -> Option<WindowRequest> {
        match action {
            InputAction::ToggleEditMode => {
                let on = self.studio.toggle_edit_mode();
                info!("{}", if on { "Studio mode" } else { "View mode" });
                Some(WindowRequest::UpdateTitle)
            }
            InputAction::CloseAlert => {
                self.studio.close_alert();
                None
            }
            InputAction::Exit => Some(WindowRequest::Exit),
            InputAction::ToggleFullscreen => Some(WindowRequest::ToggleFullscreen),
            InputAction::DeleteSelected => {
                self.delete_selected();
                None
            }
            InputAction::ToggleSmoothing => {
                let on = self.controller.toggle_smoothing();
                info!("Input smoothing: {}", if on { "ON" } else { "OFF" });
                None
            }
            InputAction::SelectOrSpawn => {
                self.select_or_spawn();
                None
            }
        }
    }

    /// Carry out a command issued by the panel
    pub fn handle_command(&mut self, command: UiCommand) {
        match command {
            UiCommand::DeleteSelected => {
                self.delete_selected();
            }
            UiCommand::SaveScene => self.save_scene(),
            UiCommand::LoadScene => self.load_scene(),
            UiCommand::CloseAlert => {
                self.studio.close_alert();
            }
        }
    }

    /// Select the object under the crosshair, or spawn one on the ground there
    pub fn select_or_spawn(&mut self) -> Option<ObjectKey> {
        let ray = self.camera.center_ray();
        if let Some(key) = self.world.pick(&ray) {
            self.world.select(key);
            self.studio.sync_selection(&self.world);
            return Some(key);
        }

        match self.world.spawn_at_ray(self.studio.spawn_kind, self.studio.spawn_color, &ray) {
            Ok(key) => {
                self.studio.sync_selection(&self.world);
                Some(key)
            }
            Err(SpawnError::LimitReached { limit }) => {
                warn!("Spawn refused: {} objects already", limit);
                self.studio.show_alert(format!("{} ({})", self.studio.strings().limit_reached, limit));
                None
            }
        }
    }

    /// Remove the selected object and its body
    pub fn delete_selected(&mut self) -> bool {
        let Some(key) = self.world.selected() else {
            return false;
        };
        let removed = self.world.remove(key).is_some();
        self.studio.sync_selection(&self.world);
        removed
    }

    pub fn save_scene(&mut self) {
        let s = self.studio.strings();
        match save_world(&self.world, &self.studio.scene_path) {
            Ok(count) => {
                self.studio.status = Some(format!("{}: {}", s.saved, count));
            }
            Err(e) => {
                warn!("Failed to save {}: {}", self.studio.scene_path, e);
                self.studio.show_alert(format!("{}: {}", s.save_failed, e));
            }
        }
    }

    /// Replace the world with the scene file; on error nothing changes
    pub fn load_scene(&mut self) {
        let s = self.studio.strings();
        match load_world(&mut self.world, &self.studio.scene_path) {
            Ok(count) => {
                self.studio.status = Some(format!("{}: {}", s.loaded, count));
                self.studio.sync_selection(&self.world);
            }
            Err(e) => {
                warn!("Failed to load {}: {}", self.studio.scene_path, e);
                self.studio.show_alert(format!("{}: {}", s.load_failed, e));
            }
        }
    }

    /// Advance one frame on the wall clock
    pub fn update(&mut self) -> SimulationResult {
        self.studio.sync_selection(&self.world);
        let edit = self.studio.edit_fields().copied();
        let result = self
            .simulation
            .update(&mut self.world, &mut self.camera, &mut self.controller, edit.as_ref());
        // The black hole may have consumed the selection
        self.studio.sync_selection(&self.world);
        result
    }

    /// Drop time accumulated while the window was hidden or unfocused
    pub fn pause(&mut self) {
        self.controller.release_all();
        self.simulation.reset_clock();
    }
}
