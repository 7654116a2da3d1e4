//! Shape traits and primitives for 3D geometry
//!
//! Shapes are pure geometric data - no colors, materials, or rendering info.
//! Everything is built in local space, centered at the origin.

use crate::Vec3;

/// A mesh vertex with position and normal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl MeshVertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}

/// Trait for indexed triangle meshes
///
/// Indices come in groups of three, counter-clockwise when seen from
/// outside the shape.
pub trait MeshShape: Send + Sync {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[MeshVertex];

    /// Get the triangle indices of this shape
    fn indices(&self) -> &[u32];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of triangles
    #[inline]
    fn triangle_count(&self) -> usize {
        self.indices().len() / 3
    }
}
