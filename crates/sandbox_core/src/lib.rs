//! Core types for the sandbox
//!
//! - [`Transform`] - Position, rotation, and per-axis scale
//! - [`SandboxObject`] - A spawned cube, sphere or wall
//! - [`Material`] / [`Color`] - Visual properties and `#rrggbb` colors
//! - [`World`] - Objects paired with their physics bodies, selection and the black hole
//! - [`EditFields`] - Values of the edit panel
//! - [`Scene`] - JSON save/load of the object list

mod edit;
mod object;
mod scene;
mod scene_validator;
mod transform;
mod world;

pub use edit::{EditFields, EditTab, MIN_SCALE, POSITION_RANGE, ROTATION_RANGE, SCALE_RANGE};
pub use object::{
    Color, ColorParseError, DirtyFlags, Material, ObjectKind, SandboxObject, CUBE_SIZE, DYNAMIC_MASS, SPHERE_RADIUS,
};
pub use scene::{load_world, save_world, SavedObject, SavedVec3, Scene, SceneLoadError, SceneSaveError};
pub use scene_validator::{SceneValidator, ValidationError};
pub use transform::Transform;
pub use world::{ObjectKey, SpawnError, World, GROUND_HALF_EXTENTS, SPAWN_HEIGHT};

// Re-export physics types for convenient access through sandbox_core
pub use sandbox_physics::{BlackHole, BodyKey, PhysicsConfig, PhysicsWorld, RigidBody};
