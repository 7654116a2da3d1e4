//! Rigid body types

use crate::material::PhysicsMaterial;
use crate::shapes::{Aabb, BodyShape, Collider};
use sandbox_math::{Plane, Quat, Vec3};
use slotmap::new_key_type;

new_key_type! {
    /// Key to a rigid body in the physics world
    ///
    /// Generational: once a body is removed, old keys return None even if
    /// the slot is reused.
    pub struct BodyKey;
}

/// A rigid body with position, rotation, velocity and a collision shape
#[derive(Clone, Debug)]
pub struct RigidBody {
    /// World position (units)
    pub position: Vec3,
    /// Orientation; not used by contact resolution
    pub rotation: Quat,
    /// Velocity (units per second)
    pub velocity: Vec3,
    /// Forces accumulated since the last step, cleared after integration
    pub force: Vec3,
    /// Mass; zero for static bodies
    pub mass: f32,
    pub material: PhysicsMaterial,
    pub affected_by_gravity: bool,
    /// Static bodies never move during a step
    pub is_static: bool,
    shape: BodyShape,
    scale: Vec3,
    collider: Collider,
}

impl RigidBody {
    fn with_shape(position: Vec3, shape: BodyShape) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            force: Vec3::ZERO,
            mass: 1.0,
            material: PhysicsMaterial::default(),
            affected_by_gravity: true,
            is_static: false,
            shape,
            scale: Vec3::ONE,
            collider: shape.collider_at(position, Vec3::ONE),
        }
    }

    /// Create a dynamic body with a sphere collider
    pub fn new_sphere(position: Vec3, radius: f32) -> Self {
        Self::with_shape(position, BodyShape::Sphere { radius })
    }

    /// Create a dynamic body with a box collider
    pub fn new_box(position: Vec3, half_extents: Vec3) -> Self {
        Self::with_shape(position, BodyShape::Box { half_extents })
    }

    /// Create a static box that doesn't move
    pub fn new_static_box(position: Vec3, half_extents: Vec3) -> Self {
        Self::new_box(position, half_extents).with_static(true)
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// A mass of zero or less makes the body static
    pub fn with_mass(mut self, mass: f32) -> Self {
        if mass <= 0.0 {
            return self.with_static(true);
        }
        self.mass = mass;
        self
    }

    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn with_gravity(mut self, affected: bool) -> Self {
        self.affected_by_gravity = affected;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        if is_static {
            self.mass = 0.0;
            self.affected_by_gravity = false;
            self.velocity = Vec3::ZERO;
        }
        self
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    pub fn shape(&self) -> BodyShape {
        self.shape
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Update the position and sync the collider
    pub fn set_position(&mut self, position: Vec3) {
        let delta = position - self.position;
        self.position = position;
        self.collider = self.collider.translated(delta);
    }

    /// Rescale the collider relative to its unscaled shape
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.collider = self.shape.collider_at(self.position, scale);
    }

    /// Apply a positional correction (e.g. from contact resolution)
    pub fn apply_correction(&mut self, correction: Vec3) {
        self.position += correction;
        self.collider = self.collider.translated(correction);
    }

    /// Accumulate a force for the next step; ignored on static bodies
    pub fn apply_force(&mut self, force: Vec3) {
        if !self.is_static {
            self.force += force;
        }
    }
}

/// Immovable collision geometry that isn't a body (the ground)
#[derive(Clone, Debug)]
pub struct StaticCollider {
    pub collider: Collider,
    pub material: PhysicsMaterial,
}

impl StaticCollider {
    pub fn new(collider: Collider, material: PhysicsMaterial) -> Self {
        Self { collider, material }
    }

    /// Infinite horizontal plane at the given height
    pub fn floor(y: f32, material: PhysicsMaterial) -> Self {
        Self::new(Collider::Plane(Plane::horizontal(y)), material)
    }

    /// Box slab whose top face sits at `top_y`
    pub fn ground_slab(top_y: f32, half_extents: Vec3, material: PhysicsMaterial) -> Self {
        let center = Vec3::new(0.0, top_y - half_extents.y, 0.0);
        Self::new(Collider::Aabb(Aabb::from_center_half_extents(center, half_extents)), material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sphere_body() {
        let pos = Vec3::new(1.0, 2.0, 3.0);
        let body = RigidBody::new_sphere(pos, 0.5);

        assert_eq!(body.position, pos);
        assert_eq!(body.velocity, Vec3::ZERO);
        assert_eq!(body.mass, 1.0);
        assert!(body.affected_by_gravity);
        assert!(!body.is_static);
        assert_eq!(body.collider().center(), pos);
    }

    #[test]
    fn test_zero_mass_is_static() {
        let body = RigidBody::new_box(Vec3::ZERO, Vec3::splat(5.0)).with_mass(0.0);
        assert!(body.is_static);
        assert!(!body.affected_by_gravity);
    }

    #[test]
    fn test_set_position_moves_collider() {
        let mut body = RigidBody::new_sphere(Vec3::ZERO, 1.0);
        let new_pos = Vec3::new(5.0, 10.0, 3.0);
        body.set_position(new_pos);
        assert_eq!(body.position, new_pos);
        assert_eq!(body.collider().center(), new_pos);
    }

    #[test]
    fn test_set_scale_does_not_compound() {
        let mut body = RigidBody::new_box(Vec3::ZERO, Vec3::splat(5.0));
        body.set_scale(Vec3::splat(2.0));
        body.set_scale(Vec3::splat(2.0));
        match body.collider() {
            Collider::Aabb(b) => assert_eq!(b.half_extents(), Vec3::splat(10.0)),
            other => panic!("expected box, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_force_ignored_on_static() {
        let mut body = RigidBody::new_static_box(Vec3::ZERO, Vec3::ONE);
        body.apply_force(Vec3::X);
        assert_eq!(body.force, Vec3::ZERO);

        let mut body = RigidBody::new_sphere(Vec3::ZERO, 1.0);
        body.apply_force(Vec3::X);
        body.apply_force(Vec3::X);
        assert_eq!(body.force, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_ground_slab_top_face() {
        let ground = StaticCollider::ground_slab(0.0, Vec3::new(1000.0, 5.0, 1000.0), PhysicsMaterial::GROUND);
        match ground.collider {
            Collider::Aabb(b) => {
                assert_eq!(b.max.y, 0.0);
                assert_eq!(b.center().y, -5.0);
            }
            other => panic!("expected box, got {:?}", other),
        }
    }
}
