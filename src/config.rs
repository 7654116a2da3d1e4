//! Sandbox settings
//!
//! Layered with figment, later layers winning:
//! `config/default.toml`, then `config/user.toml` for local overrides,
//! then `SBX_SECTION__KEY` environment variables.
//! Every field has a built-in default, so all three layers are optional.

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

use sandbox_core::{BlackHole, Color, PhysicsConfig as WorldPhysicsConfig};
use sandbox_math::Vec3;

use crate::i18n::Language;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub input: InputConfig,
    pub physics: PhysicsConfig,
    /// Object limit, spawn defaults and the scene file
    pub sandbox: SandboxConfig,
    pub black_hole: BlackHoleConfig,
    pub rendering: RenderingConfig,
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load from `config/` relative to the working directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let dir = config_dir.as_ref();
        let figment = ["default.toml", "user.toml"]
            .into_iter()
            .map(|name| dir.join(name))
            .filter(|path| path.exists())
            .fold(Figment::new(), |figment, path| figment.merge(Toml::file(path)))
            // SBX_WINDOW__TITLE=Test -> window.title = "Test"
            .merge(Env::prefixed("SBX_").split("__"));

        Ok(figment.extract()?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical size
    pub width: u32,
    pub height: u32,
    /// Borderless fullscreen at startup
    pub fullscreen: bool,
    /// Wait for vertical blank when presenting
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Primitive Physics Sandbox".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Where the fly camera starts and how it projects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position [x, y, z]
    pub start_position: [f32; 3],
    /// Starting yaw in radians
    pub start_yaw: f32,
    /// Starting pitch in radians
    pub start_pitch: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Clip planes
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: [100.0, 100.0, 100.0],
            start_yaw: 0.0,
            start_pitch: 0.0,
            fov: 75.0,
            near: 0.1,
            far: 50000.0,
        }
    }
}

/// Fly camera controls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// WASD speed in units per second
    pub move_speed: f32,
    /// Radians of yaw/pitch per pixel of right-drag
    pub mouse_sensitivity: f32,
    /// Half-life of the smoothing filter in seconds
    pub smoothing_half_life: f32,
    /// Smoothing at startup; G toggles it
    pub smoothing_enabled: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_speed: sandbox_input::DEFAULT_MOVE_SPEED,
            mouse_sensitivity: sandbox_input::DEFAULT_LOOK_SENSITIVITY,
            smoothing_half_life: 0.05,
            smoothing_enabled: false,
        }
    }
}

/// Simulation clock and gravity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity acceleration [x, y, z]
    pub gravity: [f32; 3],
    /// Fixed simulation step in seconds
    pub fixed_timestep: f32,
    /// Most fixed steps run in a single frame
    pub max_substeps: u32,
    /// Frame times above this are clamped (seconds)
    pub max_frame_dt: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -40.0, 0.0],
            fixed_timestep: 1.0 / 60.0,
            max_substeps: 5,
            max_frame_dt: 0.1,
        }
    }
}

impl PhysicsConfig {
    pub fn to_world_config(&self) -> WorldPhysicsConfig {
        WorldPhysicsConfig::new(Vec3::from_array(self.gravity))
    }
}

/// Sandbox rules and defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Spawns are refused past this many objects (0 = unlimited)
    pub max_objects: usize,
    /// Initial color of the spawn color picker
    pub default_color: Color,
    /// Scene file used by the save/load buttons
    pub scene_path: String,
    /// Interface language at startup
    pub language: Language,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            max_objects: 200,
            default_color: Color::DEFAULT_SPAWN,
            scene_path: "scene.json".to_string(),
            language: Language::Russian,
        }
    }
}

/// Black hole configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlackHoleConfig {
    pub enabled: bool,
    /// Center [x, y, z]
    pub position: [f32; 3],
    /// Force at unit distance, falling off as 1/distance
    pub strength: f32,
    /// Objects closer than this are consumed
    pub capture_radius: f32,
}

impl Default for BlackHoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: [0.0, 80.0, -300.0],
            strength: 20000.0,
            capture_radius: 10.0,
        }
    }
}

impl BlackHoleConfig {
    pub fn to_black_hole(&self) -> BlackHole {
        BlackHole {
            enabled: self.enabled,
            position: Vec3::from_array(self.position),
            strength: self.strength,
            capture_radius: self.capture_radius,
        }
    }
}

/// Lighting, background and ground grid
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Clear color
    pub background_color: Color,
    /// Ambient light intensity
    pub ambient_intensity: f32,
    /// Directional (sun) light intensity
    pub sun_intensity: f32,
    /// The sun shines from this point towards the origin
    pub sun_position: [f32; 3],
    /// Ground grid edge length
    pub grid_size: f32,
    /// Ground grid cells per side
    pub grid_divisions: u32,
    /// Color of the two lines through the origin
    pub grid_center_color: Color,
    /// Color of the other grid lines
    pub grid_color: Color,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(0x05, 0x05, 0x05),
            ambient_intensity: 1.2,
            sun_intensity: 1.0,
            sun_position: [100.0, 200.0, 100.0],
            grid_size: 2000.0,
            grid_divisions: 50,
            grid_center_color: Color::rgb(0x44, 0x44, 0x44),
            grid_color: Color::rgb(0x22, 0x22, 0x22),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Show the camera coordinates HUD
    pub show_hud: bool,
    /// Default env_logger filter; RUST_LOG overrides it
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_hud: true,
            log_level: "info".to_string(),
        }
    }
}

/// Malformed config file or environment value
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
