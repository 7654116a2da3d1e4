//! 3D Mathematics Library
//!
//! Vector and rotation types come from [`glam`] and are re-exported here so
//! every crate in the workspace agrees on one math type set.
//!
//! ## Shape Types
//!
//! - [`MeshShape`] - Trait for triangle meshes with per-vertex normals
//! - [`Cuboid`] - An axis-aligned box centered at the origin
//! - [`UvSphere`] - A latitude/longitude tessellated sphere
//! - [`GroundGrid`] - Line-segment grid lying on the XZ plane
//!
//! ## Picking
//!
//! - [`Ray`] and [`Plane`] - Ray casting against planes, spheres and boxes

pub mod shape;
pub mod cuboid;
pub mod sphere;
pub mod grid;
pub mod ray;

pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
pub use shape::{MeshShape, MeshVertex};
pub use cuboid::Cuboid;
pub use sphere::UvSphere;
pub use grid::{GridLine, GroundGrid};
pub use ray::{Plane, Ray};
