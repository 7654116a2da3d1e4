//! Cuboid (box) geometry
//!
//! Each of the 6 faces gets its own 4 vertices so normals stay flat,
//! giving 24 vertices and 12 triangles.

use crate::{shape::{MeshShape, MeshVertex}, Vec3};

/// An axis-aligned box centered at origin - pure geometry without colors
#[derive(Clone)]
pub struct Cuboid {
    half_extents: Vec3,
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
}

impl Cuboid {
    /// Create a box with the given full size along each axis
    pub fn new(size: Vec3) -> Self {
        let h = size * 0.5;

        // (normal, tangent u, tangent v) with u x v == normal so the
        // winding below is counter-clockwise from outside
        let faces = [
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, u, v) in faces {
            let base = vertices.len() as u32;
            let center = normal * h;
            let du = u * h;
            let dv = v * h;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                vertices.push(MeshVertex::new(center + du * su + dv * sv, normal));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self {
            half_extents: h,
            vertices,
            indices,
        }
    }

    /// Create a cube with equal side length
    pub fn cube(size: f32) -> Self {
        Self::new(Vec3::splat(size))
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }
}

impl MeshShape for Cuboid {
    fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_counts() {
        let cube = Cuboid::cube(10.0);
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.half_extents(), Vec3::splat(5.0));
    }

    #[test]
    fn test_vertices_on_surface() {
        let cube = Cuboid::new(Vec3::new(2.0, 4.0, 6.0));
        for v in cube.vertices() {
            assert!((v.position.x.abs() - 1.0).abs() < 1e-5);
            assert!((v.position.y.abs() - 2.0).abs() < 1e-5);
            assert!((v.position.z.abs() - 3.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_winding_faces_outward() {
        let cube = Cuboid::cube(2.0);
        let verts = cube.vertices();
        for tri in cube.indices().chunks(3) {
            let a = verts[tri[0] as usize];
            let b = verts[tri[1] as usize];
            let c = verts[tri[2] as usize];
            let face_normal = (b.position - a.position).cross(c.position - a.position);
            assert!(face_normal.dot(a.normal) > 0.0, "triangle {:?} winds inward", tri);
        }
    }
}
