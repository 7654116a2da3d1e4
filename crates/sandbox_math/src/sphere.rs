//! UV sphere geometry

use crate::{shape::{MeshShape, MeshVertex}, Vec3};
use std::f32::consts::{PI, TAU};

/// Default longitudinal segments, matching a typical scene-graph sphere
pub const DEFAULT_SEGMENTS: u32 = 32;
/// Default latitudinal rings
pub const DEFAULT_RINGS: u32 = 16;

/// A sphere tessellated along latitude/longitude lines
#[derive(Clone)]
pub struct UvSphere {
    radius: f32,
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
}

impl UvSphere {
    /// Create a sphere with the default tessellation
    pub fn new(radius: f32) -> Self {
        Self::with_tessellation(radius, DEFAULT_SEGMENTS, DEFAULT_RINGS)
    }

    /// Create a sphere with explicit segment (around Y) and ring (pole to pole) counts
    pub fn with_tessellation(radius: f32, segments: u32, rings: u32) -> Self {
        let segments = segments.max(3);
        let rings = rings.max(2);

        let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
        for ring in 0..=rings {
            let theta = ring as f32 / rings as f32 * PI;
            let (sin_t, cos_t) = theta.sin_cos();
            for seg in 0..=segments {
                let phi = seg as f32 / segments as f32 * TAU;
                let (sin_p, cos_p) = phi.sin_cos();
                let normal = Vec3::new(-cos_p * sin_t, cos_t, sin_p * sin_t);
                vertices.push(MeshVertex::new(normal * radius, normal));
            }
        }

        let stride = segments + 1;
        let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
        for ring in 0..rings {
            for seg in 0..segments {
                let a = ring * stride + seg;
                let b = a + stride;
                let c = b + 1;
                let d = a + 1;
                // Degenerate triangles at the poles are skipped
                if ring != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if ring != rings - 1 {
                    indices.extend_from_slice(&[d, b, c]);
                }
            }
        }

        Self {
            radius,
            vertices,
            indices,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl MeshShape for UvSphere {
    fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }
}
