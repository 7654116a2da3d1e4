//! World container for sandbox objects
//!
//! The World owns every [`SandboxObject`] together with the physics world
//! holding their bodies. Every mutation goes through here so an object and
//! its body are always added and removed as a pair.

use std::fmt;

use log::{debug, info};
use sandbox_math::{Plane, Quat, Ray, Vec3};
use sandbox_physics::{BlackHole, BodyKey, PhysicsConfig, PhysicsMaterial, PhysicsWorld, StaticCollider};
use slotmap::{new_key_type, SlotMap};

use crate::edit::EditFields;
use crate::object::{Color, DirtyFlags, Material, ObjectKind, SandboxObject};
use crate::Transform;

new_key_type! {
    /// Key to an object in the world
    ///
    /// Generational: a key to a removed object resolves to `None` even if
    /// its slot has been reused.
    pub struct ObjectKey;
}

/// Height new objects are dropped from
pub const SPAWN_HEIGHT: f32 = 5.1;

/// Half-extents of the ground slab; its top face is at y = 0
pub const GROUND_HALF_EXTENTS: Vec3 = Vec3::new(1000.0, 5.0, 1000.0);

/// Why a spawn was refused
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnError {
    /// The world already holds `limit` objects
    LimitReached { limit: usize },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::LimitReached { limit } => write!(f, "Object limit reached ({})", limit),
        }
    }
}

impl std::error::Error for SpawnError {}

/// All sandbox objects plus the physics world and the black hole
pub struct World {
    objects: SlotMap<ObjectKey, SandboxObject>,
    physics: PhysicsWorld,
    black_hole: BlackHole,
    selection: Option<ObjectKey>,
    /// 0 means unlimited
    max_objects: usize,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create an empty world with default physics and the ground slab
    pub fn new() -> Self {
        Self::with_physics(PhysicsConfig::default())
    }

    /// Create an empty world with the given physics configuration
    pub fn with_physics(config: PhysicsConfig) -> Self {
        let mut physics = PhysicsWorld::with_config(config);
        physics.add_static_collider(StaticCollider::ground_slab(0.0, GROUND_HALF_EXTENTS, PhysicsMaterial::GROUND));
        Self {
            objects: SlotMap::with_key(),
            physics,
            black_hole: BlackHole::default(),
            selection: None,
            max_objects: 0,
        }
    }

    pub fn with_black_hole(mut self, black_hole: BlackHole) -> Self {
        self.black_hole = black_hole;
        self
    }

    /// Limit the number of objects; 0 disables the limit
    pub fn with_max_objects(mut self, max_objects: usize) -> Self {
        self.max_objects = max_objects;
        self
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.physics
    }

    pub fn black_hole(&self) -> &BlackHole {
        &self.black_hole
    }

    pub fn black_hole_mut(&mut self) -> &mut BlackHole {
        &mut self.black_hole
    }

    #[inline]
    pub fn max_objects(&self) -> usize {
        self.max_objects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, key: ObjectKey) -> Option<&SandboxObject> {
        self.objects.get(key)
    }

    pub fn get_mut(&mut self, key: ObjectKey) -> Option<&mut SandboxObject> {
        self.objects.get_mut(key)
    }

    pub fn contains(&self, key: ObjectKey) -> bool {
        self.objects.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectKey, &SandboxObject)> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObjectKey, &mut SandboxObject)> {
        self.objects.iter_mut()
    }

    /// Whether another object fits under the limit
    pub fn can_spawn(&self) -> bool {
        self.max_objects == 0 || self.objects.len() < self.max_objects
    }

    /// Spawn an object at `position` with unit scale
    pub fn spawn(&mut self, kind: ObjectKind, color: Color, position: Vec3) -> Result<ObjectKey, SpawnError> {
        self.spawn_scaled(kind, color, position, Vec3::ONE)
    }

    /// Spawn an object, inserting the object and its body together
    pub fn spawn_scaled(
        &mut self,
        kind: ObjectKind,
        color: Color,
        position: Vec3,
        scale: Vec3,
    ) -> Result<ObjectKey, SpawnError> {
        if !self.can_spawn() {
            return Err(SpawnError::LimitReached {
                limit: self.max_objects,
            });
        }

        let mut body = kind.build_body(position);
        body.set_scale(scale);
        let body_key = self.physics.add_body(body);

        let transform = Transform::from_position(position).with_scale(scale);
        let key = self
            .objects
            .insert(SandboxObject::new(kind, transform, Material::from_color(color), body_key));

        info!("Spawned {} at ({:.1}, {:.1}, {:.1})", kind, position.x, position.y, position.z);
        Ok(key)
    }

    /// Spawn where `ray` meets the ground and select the new object
    ///
    /// The object is placed just above the ground at the hit point, or
    /// above the origin when the ray never reaches the ground.
    pub fn spawn_at_ray(&mut self, kind: ObjectKind, color: Color, ray: &Ray) -> Result<ObjectKey, SpawnError> {
        if !self.can_spawn() {
            return Err(SpawnError::LimitReached {
                limit: self.max_objects,
            });
        }
        let hit = ray.intersect_plane_point(&Plane::horizontal(0.0)).unwrap_or_else(|| {
            debug!("Spawn ray misses the ground, placing at the origin");
            Vec3::ZERO
        });
        let key = self.spawn(kind, color, Vec3::new(hit.x, SPAWN_HEIGHT, hit.z))?;
        self.select(key);
        Ok(key)
    }

    /// Remove an object and its body; clears the selection if it was selected
    pub fn remove(&mut self, key: ObjectKey) -> Option<SandboxObject> {
        let object = self.objects.remove(key)?;
        self.physics.remove_body(object.body);
        if self.selection == Some(key) {
            self.selection = None;
        }
        info!("Removed {}", object.kind);
        Some(object)
    }

    /// Remove every object and body, keeping the ground
    pub fn clear(&mut self) {
        self.objects.clear();
        self.physics.clear_bodies();
        self.selection = None;
    }

    #[inline]
    pub fn selected(&self) -> Option<ObjectKey> {
        self.selection
    }

    /// Select an object, moving the highlight from the previous selection
    ///
    /// Returns false (and leaves the selection alone) for stale keys.
    pub fn select(&mut self, key: ObjectKey) -> bool {
        if !self.objects.contains_key(key) {
            return false;
        }
        self.deselect();
        if let Some(object) = self.objects.get_mut(key) {
            object.set_highlighted(true);
        }
        self.selection = Some(key);
        debug!("Selected {:?}", key);
        true
    }

    pub fn deselect(&mut self) {
        if let Some(prev) = self.selection.take() {
            if let Some(object) = self.objects.get_mut(prev) {
                object.set_highlighted(false);
            }
        }
    }

    /// Current edit-panel values for an object
    pub fn edit_fields(&self, key: ObjectKey) -> Option<EditFields> {
        let object = self.objects.get(key)?;
        let position = self
            .physics
            .get_body(object.body)
            .map(|b| b.position)
            .unwrap_or(object.transform.position);
        Some(EditFields::from_object(object, position))
    }

    /// Push edit-panel values onto an object and its body
    ///
    /// Dynamic bodies lose their velocity so the object holds still while
    /// being edited.
    pub fn apply_edit(&mut self, key: ObjectKey, fields: &EditFields) -> bool {
        let Some(object) = self.objects.get_mut(key) else {
            return false;
        };
        let fields = fields.sanitized();
        let rotation = Quat::from_rotation_y(fields.rotation_y);

        if let Some(body) = self.physics.get_body_mut(object.body) {
            body.set_position(fields.position);
            if !object.kind.is_static() {
                body.velocity = Vec3::ZERO;
            }
            body.rotation = rotation;
            body.set_scale(fields.scale);
        }

        object.transform.position = fields.position;
        object.transform.rotation = rotation;
        object.transform.scale = fields.scale;
        object.mark_dirty(DirtyFlags::TRANSFORM);
        true
    }

    /// Nearest object hit by `ray`
    ///
    /// Spheres are tested as spheres of their largest scaled radius, cubes
    /// and walls as boxes oriented by the object rotation.
    pub fn pick(&self, ray: &Ray) -> Option<ObjectKey> {
        self.objects
            .iter()
            .filter_map(|(key, object)| {
                let t = match object.kind {
                    ObjectKind::Sphere => {
                        ray.intersect_sphere(object.transform.position, object.half_extents().max_element())
                    }
                    ObjectKind::Cube | ObjectKind::Wall => ray.intersect_oriented_box(
                        object.transform.position,
                        object.transform.rotation,
                        object.half_extents(),
                    ),
                }?;
                Some((key, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(key, _)| key)
    }

    /// Advance one physics tick
    ///
    /// The black hole pulls or consumes dynamic objects first, then physics
    /// steps and object transforms are copied from their bodies. Returns the
    /// kinds of the objects consumed this tick.
    pub fn step(&mut self, dt: f32) -> Vec<ObjectKind> {
        let captured_bodies = self.black_hole.apply(&mut self.physics);
        let mut consumed = Vec::with_capacity(captured_bodies.len());
        for body in captured_bodies {
            if let Some(key) = self.key_for_body(body) {
                if let Some(object) = self.remove(key) {
                    info!("Black hole consumed {}", object.kind);
                    consumed.push(object.kind);
                }
            } else {
                self.physics.remove_body(body);
            }
        }

        self.physics.step(dt);
        self.sync_transforms();
        consumed
    }

    /// Copy body positions and rotations onto their objects
    pub fn sync_transforms(&mut self) {
        for (_key, object) in &mut self.objects {
            if let Some(body) = self.physics.get_body(object.body) {
                if object.transform.position != body.position || object.transform.rotation != body.rotation {
                    object.transform.position = body.position;
                    object.transform.rotation = body.rotation;
                    object.mark_dirty(DirtyFlags::TRANSFORM);
                }
            }
        }
    }

    fn key_for_body(&self, body: BodyKey) -> Option<ObjectKey> {
        self.objects.iter().find(|(_, o)| o.body == body).map(|(k, _)| k)
    }
}
