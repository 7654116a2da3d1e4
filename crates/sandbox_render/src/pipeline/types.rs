//! GPU-compatible data types for the mesh and line pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use sandbox_math::{Mat4, MeshVertex};

/// A mesh vertex in local space
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl From<&MeshVertex> for GpuVertex {
    fn from(v: &MeshVertex) -> Self {
        Self {
            position: v.position.to_array(),
            normal: v.normal.to_array(),
        }
    }
}

/// Per-object data, one per drawn instance
/// Layout: 96 bytes (must match mesh.wgsl InstanceInput)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    /// Model matrix, column-major (64 bytes)
    pub model: [[f32; 4]; 4],
    /// Linear RGB base color + alpha
    pub color: [f32; 4],
    /// Linear RGB emissive + unused
    pub emissive: [f32; 4],
}

impl InstanceData {
    pub fn new(model: Mat4, color: [f32; 3], emissive: [f32; 3]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
            emissive: [emissive[0], emissive[1], emissive[2], 0.0],
        }
    }
}

impl Default for InstanceData {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, [1.0; 3], [0.0; 3])
    }
}

/// Uniforms shared by the mesh and line passes
/// Layout: 112 bytes total (must match mesh.wgsl / line.wgsl Uniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Projection * view (64 bytes)
    pub view_proj: [[f32; 4]; 4],
    /// Camera position + padding (16 bytes)
    pub camera_pos: [f32; 4],
    /// Direction towards the sun (normalized) + sun intensity (16 bytes)
    pub light_dir: [f32; 4],
    /// ambient intensity, metalness, roughness, unused (16 bytes)
    pub params: [f32; 4],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: [0.0; 4],
            // Sun at (100, 200, 100)
            light_dir: [0.408_248_3, 0.816_496_6, 0.408_248_3, 1.0],
            params: [1.2, 0.1, 0.8, 0.0],
        }
    }
}

/// A colored line endpoint
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}
