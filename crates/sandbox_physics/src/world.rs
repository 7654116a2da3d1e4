//! Physics world and simulation

use crate::body::{BodyKey, RigidBody, StaticCollider};
use crate::collision::{collide, Contact};
use crate::material::PhysicsMaterial;
use sandbox_math::Vec3;
use slotmap::SlotMap;

/// Default gravity, strong enough that dropped objects settle quickly
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -40.0, 0.0);

/// Configuration for the physics simulation
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Gravity acceleration (units/s²)
    pub gravity: Vec3,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
        }
    }
}

impl PhysicsConfig {
    pub fn new(gravity: Vec3) -> Self {
        Self { gravity }
    }
}

/// The physics world containing all rigid bodies
pub struct PhysicsWorld {
    bodies: SlotMap<BodyKey, RigidBody>,
    /// Static colliders (the ground)
    static_colliders: Vec<StaticCollider>,
    pub config: PhysicsConfig,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            static_colliders: Vec::new(),
            config,
        }
    }

    pub fn add_static_collider(&mut self, collider: StaticCollider) {
        self.static_colliders.push(collider);
    }

    pub fn static_colliders(&self) -> &[StaticCollider] {
        &self.static_colliders
    }

    /// Add a body to the world and return its key
    pub fn add_body(&mut self, body: RigidBody) -> BodyKey {
        self.bodies.insert(body)
    }

    /// Remove a body from the world and return it
    pub fn remove_body(&mut self, key: BodyKey) -> Option<RigidBody> {
        self.bodies.remove(key)
    }

    /// Remove every body, keeping static colliders
    pub fn clear_bodies(&mut self) {
        self.bodies.clear();
    }

    pub fn get_body(&self, key: BodyKey) -> Option<&RigidBody> {
        self.bodies.get(key)
    }

    pub fn get_body_mut(&mut self, key: BodyKey) -> Option<&mut RigidBody> {
        self.bodies.get_mut(key)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body_keys(&self) -> impl Iterator<Item = BodyKey> + '_ {
        self.bodies.keys()
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyKey, &RigidBody)> {
        self.bodies.iter()
    }

    /// Step the simulation forward by dt seconds
    ///
    /// 1. Accumulated forces and gravity go into velocity, forces are cleared
    /// 2. Velocity is integrated into position
    /// 3. Contacts with static colliders are resolved
    /// 4. Body-body contacts are resolved
    pub fn step(&mut self, dt: f32) {
        let gravity = self.config.gravity;
        for (_key, body) in &mut self.bodies {
            if body.is_static {
                body.force = Vec3::ZERO;
                continue;
            }

            let mut acceleration = body.force / body.mass;
            if body.affected_by_gravity {
                acceleration += gravity;
            }
            body.velocity += acceleration * dt;
            body.force = Vec3::ZERO;

            let displacement = body.velocity * dt;
            body.apply_correction(displacement);
        }

        self.resolve_static_collisions();
        self.resolve_body_collisions();
    }

    fn resolve_static_collisions(&mut self) {
        for (_key, body) in &mut self.bodies {
            if body.is_static {
                continue;
            }

            for static_col in &self.static_colliders {
                let Some(contact) = collide(body.collider(), &static_col.collider) else {
                    continue;
                };
                if !contact.is_colliding() {
                    continue;
                }

                body.apply_correction(contact.normal * contact.penetration);
                let combined = body.material.mix(&static_col.material);
                body.velocity = respond(body.velocity, contact.normal, &combined);
            }
        }
    }

    fn resolve_body_collisions(&mut self) {
        let keys: Vec<BodyKey> = self.bodies.keys().collect();

        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                let (key_a, key_b) = (keys[i], keys[j]);
                let (body_a, body_b) = (&self.bodies[key_a], &self.bodies[key_b]);

                if body_a.is_static && body_b.is_static {
                    continue;
                }

                // Normal points from B toward A
                if let Some(contact) = collide(body_a.collider(), body_b.collider()) {
                    if contact.is_colliding() {
                        self.resolve_body_pair(key_a, key_b, &contact);
                    }
                }
            }
        }
    }

    fn resolve_body_pair(&mut self, key_a: BodyKey, key_b: BodyKey, contact: &Contact) {
        let (static_a, mass_a) = (self.bodies[key_a].is_static, self.bodies[key_a].mass);
        let (static_b, mass_b) = (self.bodies[key_b].is_static, self.bodies[key_b].mass);

        // Share of the separation each body takes
        let (ratio_a, ratio_b) = if static_a {
            (0.0, 1.0)
        } else if static_b {
            (1.0, 0.0)
        } else {
            let total = mass_a + mass_b;
            (mass_b / total, mass_a / total)
        };

        let push = contact.normal * contact.penetration;
        let combined = self.bodies[key_a].material.mix(&self.bodies[key_b].material);

        if !static_a {
            let body = &mut self.bodies[key_a];
            body.apply_correction(push * ratio_a);
            body.velocity = respond(body.velocity, contact.normal, &combined);
        }
        if !static_b {
            let body = &mut self.bodies[key_b];
            body.apply_correction(-push * ratio_b);
            body.velocity = respond(body.velocity, -contact.normal, &combined);
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Velocity after touching a surface whose normal points toward the body
///
/// Motion into the surface is removed (or bounced) and tangential motion
/// is damped by grip.
fn respond(velocity: Vec3, normal: Vec3, material: &PhysicsMaterial) -> Vec3 {
    let into = velocity.dot(normal);
    if into >= 0.0 {
        return velocity;
    }

    let velocity = velocity - normal * into * (1.0 + material.bounce);
    let along = normal * velocity.dot(normal);
    let tangent = velocity - along;
    if tangent.length_squared() > 1e-8 {
        along + tangent * (1.0 - material.grip)
    } else {
        velocity
    }
}
