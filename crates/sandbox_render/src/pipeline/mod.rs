//! Render pipelines
//!
//! - [`MeshPipeline`] - instanced objects with ambient + sun lighting
//! - [`LinePipeline`] - the ground grid

mod line_pipeline;
mod mesh_pipeline;
pub mod types;

pub use line_pipeline::LinePipeline;
pub use mesh_pipeline::{GpuMesh, MeshDraw, MeshPipeline, DEPTH_FORMAT};
pub use types::{GpuVertex, InstanceData, LineVertex, SceneUniforms};
