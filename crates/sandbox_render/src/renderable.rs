//! World to GPU conversion
//!
//! Turns the sandbox world into per-instance data grouped by mesh, and the
//! ground grid into colored line vertices.

use std::ops::Range;

use sandbox_core::{Color, ObjectKind, World, CUBE_SIZE, SPHERE_RADIUS};
use sandbox_math::{Cuboid, GroundGrid, Mat4, MeshShape, Quat, UvSphere, Vec3};

use crate::pipeline::{InstanceData, LineVertex};

/// Base color of the black hole sphere
pub const BLACK_HOLE_COLOR: Color = Color::rgb(0, 0, 0);
/// Faint glow so the black hole stands out against the dark background
pub const BLACK_HOLE_EMISSIVE: Color = Color::rgb(0x22, 0x00, 0x33);

/// Shared meshes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshId {
    /// Cube of side [`CUBE_SIZE`]; also used for walls
    Cube,
    /// Sphere of radius [`SPHERE_RADIUS`]; also used for the black hole
    Sphere,
}

impl MeshId {
    pub const ALL: [MeshId; 2] = [MeshId::Cube, MeshId::Sphere];

    pub fn for_kind(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Cube | ObjectKind::Wall => MeshId::Cube,
            ObjectKind::Sphere => MeshId::Sphere,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeshId::Cube => "Cube",
            MeshId::Sphere => "Sphere",
        }
    }
}

/// CPU-side geometry for every [`MeshId`]
pub struct MeshLibrary {
    cube: Cuboid,
    sphere: UvSphere,
}

impl Default for MeshLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self {
            cube: Cuboid::cube(CUBE_SIZE),
            sphere: UvSphere::new(SPHERE_RADIUS),
        }
    }

    pub fn mesh(&self, id: MeshId) -> &dyn MeshShape {
        match id {
            MeshId::Cube => &self.cube,
            MeshId::Sphere => &self.sphere,
        }
    }
}

/// Instances that share one mesh
#[derive(Clone, Debug, PartialEq)]
pub struct DrawBatch {
    pub mesh: MeshId,
    pub instances: Range<u32>,
}

/// Per-frame instance data for the whole world
#[derive(Clone, Debug, Default)]
pub struct SceneGeometry {
    pub instances: Vec<InstanceData>,
    pub batches: Vec<DrawBatch>,
}

impl SceneGeometry {
    /// Collect one instance per object, plus the black hole when enabled
    pub fn from_world(world: &World) -> Self {
        let mut geometry = Self::default();

        for mesh in MeshId::ALL {
            let start = geometry.instances.len() as u32;

            for (_key, object) in world.iter() {
                if MeshId::for_kind(object.kind) != mesh {
                    continue;
                }
                geometry.instances.push(InstanceData::new(
                    object.transform.to_matrix(),
                    object.material.base_color.to_linear(),
                    object.material.emissive.to_linear(),
                ));
            }

            if mesh == MeshId::Sphere {
                let hole = world.black_hole();
                if hole.enabled && hole.capture_radius > 0.0 {
                    let scale = Vec3::splat(hole.capture_radius / SPHERE_RADIUS);
                    let model = Mat4::from_scale_rotation_translation(scale, Quat::IDENTITY, hole.position);
                    geometry.instances.push(InstanceData::new(
                        model,
                        BLACK_HOLE_COLOR.to_linear(),
                        BLACK_HOLE_EMISSIVE.to_linear(),
                    ));
                }
            }

            let end = geometry.instances.len() as u32;
            if end > start {
                geometry.batches.push(DrawBatch {
                    mesh,
                    instances: start..end,
                });
            }
        }

        geometry
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}

/// Line vertices for the ground grid
#[derive(Clone, Debug)]
pub struct GridGeometry {
    pub vertices: Vec<LineVertex>,
}

impl GridGeometry {
    /// Grid lines in `line_color`, the two lines through the origin in `center_color`
    pub fn new(grid: &GroundGrid, center_color: Color, line_color: Color) -> Self {
        let center = center_color.to_linear();
        let regular = line_color.to_linear();

        let vertices = grid
            .lines()
            .iter()
            .flat_map(|line| {
                let color = if line.is_center { center } else { regular };
                [
                    LineVertex {
                        position: line.start.to_array(),
                        color,
                    },
                    LineVertex {
                        position: line.end.to_array(),
                        color,
                    },
                ]
            })
            .collect();

        Self { vertices }
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }
}
