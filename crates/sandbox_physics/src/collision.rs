//! Collision detection between spheres, boxes and planes
//!
//! Every test returns a [`Contact`] whose normal points from the second
//! shape toward the first, so pushing the first shape along the normal by
//! the penetration depth separates the pair.

use crate::shapes::{Aabb, Collider, Sphere};
use sandbox_math::{Plane, Vec3};

/// Contact information from a collision
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// Point of contact
    pub point: Vec3,
    /// Normal pointing from the second shape toward the first
    pub normal: Vec3,
    /// Penetration depth (positive means overlapping)
    pub penetration: f32,
}

impl Contact {
    pub fn new(point: Vec3, normal: Vec3, penetration: f32) -> Self {
        Self {
            point,
            normal,
            penetration,
        }
    }

    pub fn is_colliding(&self) -> bool {
        self.penetration > 0.0
    }

    /// Same contact seen from the other shape
    pub fn flipped(mut self) -> Self {
        self.normal = -self.normal;
        self
    }
}

pub fn sphere_vs_plane(sphere: &Sphere, plane: &Plane) -> Option<Contact> {
    let penetration = sphere.radius - plane.signed_distance(sphere.center);
    if penetration > 0.0 {
        let point = sphere.center - plane.normal * sphere.radius;
        Some(Contact::new(point, plane.normal, penetration))
    } else {
        None
    }
}

pub fn aabb_vs_plane(aabb: &Aabb, plane: &Plane) -> Option<Contact> {
    // Corner furthest along the negative normal
    let corner = aabb.center() - aabb.half_extents() * plane.normal.signum();
    let signed_dist = plane.signed_distance(corner);
    if signed_dist < 0.0 {
        Some(Contact::new(corner, plane.normal, -signed_dist))
    } else {
        None
    }
}

pub fn sphere_vs_sphere(a: &Sphere, b: &Sphere) -> Option<Contact> {
    let delta = a.center - b.center;
    let dist_sq = delta.length_squared();
    let min_dist = a.radius + b.radius;

    if dist_sq >= min_dist * min_dist {
        return None;
    }
    let dist = dist_sq.sqrt();
    // Coincident centers separate straight up
    let normal = if dist > 1e-4 { delta / dist } else { Vec3::Y };
    let point = b.center + normal * b.radius;
    Some(Contact::new(point, normal, min_dist - dist))
}

/// Normal points from the box toward the sphere
pub fn sphere_vs_aabb(sphere: &Sphere, aabb: &Aabb) -> Option<Contact> {
    let closest = aabb.closest_point(sphere.center);
    let delta = sphere.center - closest;
    let dist_sq = delta.length_squared();

    if dist_sq >= sphere.radius * sphere.radius {
        return None;
    }

    let dist = dist_sq.sqrt();
    if dist > 1e-4 {
        return Some(Contact::new(closest, delta / dist, sphere.radius - dist));
    }

    // Center inside the box: leave through the nearest face
    let to_min = sphere.center - aabb.min;
    let to_max = aabb.max - sphere.center;
    let mut best = (to_min.x, Vec3::NEG_X);
    for candidate in [
        (to_max.x, Vec3::X),
        (to_min.y, Vec3::NEG_Y),
        (to_max.y, Vec3::Y),
        (to_min.z, Vec3::NEG_Z),
        (to_max.z, Vec3::Z),
    ] {
        if candidate.0 < best.0 {
            best = candidate;
        }
    }
    Some(Contact::new(closest, best.1, sphere.radius + best.0))
}

/// Normal points from `b` toward `a`
pub fn aabb_vs_aabb(a: &Aabb, b: &Aabb) -> Option<Contact> {
    if a.max.cmplt(b.min).any() || a.min.cmpgt(b.max).any() {
        return None;
    }

    let overlap = (a.max.min(b.max) - a.min.max(b.min)).max(Vec3::ZERO);
    let a_center = a.center();
    let b_center = b.center();

    let mut axis = 0;
    for i in 1..3 {
        if overlap[i] < overlap[axis] {
            axis = i;
        }
    }

    let mut normal = Vec3::ZERO;
    normal[axis] = if a_center[axis] < b_center[axis] { -1.0 } else { 1.0 };

    let point = (a.min.max(b.min) + a.max.min(b.max)) * 0.5;
    Some(Contact::new(point, normal, overlap[axis]))
}

/// Contact between any two colliders, normal pointing from `b` toward `a`
pub fn collide(a: &Collider, b: &Collider) -> Option<Contact> {
    match (a, b) {
        (Collider::Sphere(s), Collider::Plane(p)) => sphere_vs_plane(s, p),
        (Collider::Aabb(box_a), Collider::Plane(p)) => aabb_vs_plane(box_a, p),
        (Collider::Sphere(sa), Collider::Sphere(sb)) => sphere_vs_sphere(sa, sb),
        (Collider::Sphere(s), Collider::Aabb(bx)) => sphere_vs_aabb(s, bx),
        (Collider::Aabb(bx), Collider::Sphere(s)) => sphere_vs_aabb(s, bx).map(Contact::flipped),
        (Collider::Aabb(box_a), Collider::Aabb(box_b)) => aabb_vs_aabb(box_a, box_b),
        (Collider::Plane(_), Collider::Plane(_)) => None,
        (Collider::Plane(p), other) => collide(other, &Collider::Plane(*p)).map(Contact::flipped),
    }
}
