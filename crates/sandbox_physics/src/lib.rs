//! Rigid-body physics for the sandbox
//!
//! This crate provides:
//! - Collision shapes (spheres, AABBs, planes)
//! - Collision detection
//! - Rigid body dynamics with gravity and accumulated forces
//! - The black hole attractor

pub mod attractor;
pub mod body;
pub mod collision;
pub mod material;
pub mod shapes;
pub mod world;

pub use attractor::{BlackHole, Pull};
pub use body::{BodyKey, RigidBody, StaticCollider};
pub use collision::{aabb_vs_aabb, aabb_vs_plane, collide, sphere_vs_aabb, sphere_vs_plane, sphere_vs_sphere, Contact};
pub use material::PhysicsMaterial;
pub use shapes::{Aabb, BodyShape, Collider, Sphere};
pub use world::{PhysicsConfig, PhysicsWorld, DEFAULT_GRAVITY};
