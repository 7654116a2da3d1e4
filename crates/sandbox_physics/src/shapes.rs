//! Collision shapes
//!
//! These are lightweight primitives used for collision detection,
//! separate from the renderable meshes in sandbox_math.

use sandbox_math::{Plane, Vec3};

/// A sphere defined by center and radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if a point is inside or on the sphere
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

/// An axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if a point is inside or on the box
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Closest point inside or on the box to a given point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

/// Collider enum for the supported collision shapes
///
/// Planes are only used for static colliders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
    Sphere(Sphere),
    Aabb(Aabb),
    Plane(Plane),
}

impl Collider {
    /// Center of the collider; for planes, the point on the plane closest to the origin
    pub fn center(&self) -> Vec3 {
        match self {
            Collider::Sphere(s) => s.center,
            Collider::Aabb(b) => b.center(),
            Collider::Plane(p) => p.normal * p.distance,
        }
    }

    pub fn translated(&self, delta: Vec3) -> Self {
        match self {
            Collider::Sphere(s) => Collider::Sphere(Sphere::new(s.center + delta, s.radius)),
            Collider::Aabb(b) => Collider::Aabb(b.translated(delta)),
            Collider::Plane(p) => Collider::Plane(Plane::new(p.normal, p.distance + p.normal.dot(delta))),
        }
    }
}

/// Unscaled shape of a body in local space
///
/// The world-space collider is derived from this, the body position and
/// the body scale, so rescaling never compounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyShape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

impl BodyShape {
    /// Build the world-space collider for this shape
    ///
    /// Boxes scale per axis; spheres scale by the largest axis.
    pub fn collider_at(&self, center: Vec3, scale: Vec3) -> Collider {
        let scale = scale.abs();
        match *self {
            BodyShape::Sphere { radius } => Collider::Sphere(Sphere::new(center, radius * scale.max_element())),
            BodyShape::Box { half_extents } => {
                Collider::Aabb(Aabb::from_center_half_extents(center, half_extents * scale))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_contains() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        assert!(sphere.contains(Vec3::ZERO));
        assert!(sphere.contains(Vec3::new(1.0, 0.0, 0.0)));
        assert!(!sphere.contains(Vec3::new(1.1, 0.0, 0.0)));
    }

    #[test]
    fn test_aabb_from_center_half_extents() {
        let aabb = Aabb::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5));
        assert_eq!(aabb.min, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(aabb.max, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_aabb_closest_point() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let inside = Vec3::splat(0.5);
        assert_eq!(aabb.closest_point(inside), inside);
        assert_eq!(aabb.closest_point(Vec3::new(2.0, 0.5, 0.5)), Vec3::new(1.0, 0.5, 0.5));
        assert!(aabb.contains(Vec3::ZERO));
        assert!(!aabb.contains(Vec3::new(-0.1, 0.5, 0.5)));
    }

    #[test]
    fn test_plane_translation_moves_distance() {
        let collider = Collider::Plane(Plane::horizontal(0.0));
        let moved = collider.translated(Vec3::new(3.0, 2.0, 0.0));
        assert_eq!(moved.center(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_box_shape_scales_per_axis() {
        let shape = BodyShape::Box { half_extents: Vec3::splat(5.0) };
        match shape.collider_at(Vec3::ZERO, Vec3::new(2.0, 1.0, 0.5)) {
            Collider::Aabb(b) => assert_eq!(b.half_extents(), Vec3::new(10.0, 5.0, 2.5)),
            other => panic!("expected box, got {:?}", other),
        }
    }

    #[test]
    fn test_sphere_shape_scales_by_largest_axis() {
        let shape = BodyShape::Sphere { radius: 6.0 };
        match shape.collider_at(Vec3::ZERO, Vec3::new(1.0, 3.0, 2.0)) {
            Collider::Sphere(s) => assert_eq!(s.radius, 18.0),
            other => panic!("expected sphere, got {:?}", other),
        }
    }
}
