//! Sandbox rendering library
//!
//! A small wgpu renderer for the sandbox world: lit, instanced meshes for
//! cubes, spheres and walls, plus a line pass for the ground grid.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera3D`] - Fly camera with yaw/pitch orientation
//! - [`pipeline::MeshPipeline`] - Instanced, depth-tested triangle meshes
//! - [`pipeline::LinePipeline`] - Ground grid lines
//! - [`renderable::SceneGeometry`] - Converts the World to GPU instances

pub mod camera;
pub mod context;
pub mod pipeline;
pub mod renderable;

// Re-export core types for convenience
pub use sandbox_core::{Color, Material, ObjectKind, SandboxObject, World};

pub use camera::Camera3D;
pub use renderable::{DrawBatch, GridGeometry, MeshId, MeshLibrary, SceneGeometry};
